use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::BlogData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct BlogProps {
    pub content: Rc<BlogData>,
}

#[function_component(BlogSection)]
pub fn blog_section(props: &BlogProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "blog");
    let content = &props.content;

    html! {
        <section id="blog" class="section-padding blog" ref={node}>
            <style>
                {r#"
                    .blog {
                        background: var(--color-background-light);
                    }
                    .blog-posts {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .blog-post-preview {
                        background: var(--color-white);
                        border-radius: 12px;
                        overflow: hidden;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.06);
                    }
                    .blog-post-preview:hover {
                        transform: translateY(-5px);
                    }
                    .blog-post-preview a {
                        text-decoration: none;
                        color: inherit;
                        display: block;
                    }
                    .blog-preview-image {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                        display: block;
                    }
                    .blog-post-body {
                        padding: 1.5rem;
                    }
                    .blog-date {
                        display: block;
                        color: var(--color-text-secondary);
                        font-size: 0.85rem;
                        margin-bottom: 0.5rem;
                    }
                    .blog-post-body h3 {
                        color: var(--color-dark);
                        margin-bottom: 0.5rem;
                    }
                    .blog-post-body p {
                        color: var(--color-text-secondary);
                        margin-bottom: 1rem;
                    }
                    .blog-read-more {
                        color: var(--color-primary);
                        font-weight: 500;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.description}</p>
                </div>
                <div class="blog-posts">
                    { for content.articles.iter().enumerate().map(|(i, article)| html! {
                        <article
                            key={article.url.clone()}
                            class={classes!("blog-post-preview", entrance_class(in_view, "translate-y-8"))}
                            style={format!("transition-delay: {}ms;", i * 100)}
                        >
                            <a href={article.url.clone()}>
                                <img src={article.image_url.clone()} alt={article.image_alt.clone()} loading="lazy" class="blog-preview-image" />
                                <div class="blog-post-body">
                                    <span class="blog-date">{&article.date}</span>
                                    <h3>{&article.title}</h3>
                                    <p>{&article.excerpt}</p>
                                    <span class="blog-read-more">{format!("{} →", content.read_more_text)}</span>
                                </div>
                            </a>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
