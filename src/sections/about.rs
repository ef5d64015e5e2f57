use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::config::SiteConfig;
use crate::content::AboutData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub config: Rc<SiteConfig>,
    pub content: Rc<AboutData>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "about");
    let AboutProps { config, content } = props;

    html! {
        <section id="about" class="section-padding about" ref={node}>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-photo img {
                        width: 100%;
                        border-radius: 12px;
                        box-shadow: 0 24px 48px rgba(0,0,0,0.12);
                    }
                    .about-name {
                        font-family: var(--font-heading);
                        font-size: 1.6rem;
                        color: var(--color-dark);
                        margin-bottom: 0.25rem;
                    }
                    .about-credentials {
                        color: var(--color-primary);
                        font-weight: 500;
                        margin-bottom: 1.5rem;
                    }
                    .about-text p {
                        color: var(--color-text-secondary);
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .about-badges {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1.5rem;
                    }
                    .about-badge {
                        background: var(--color-primary-light);
                        color: var(--color-dark);
                        padding: 0.35rem 0.9rem;
                        border-radius: 9999px;
                        font-size: 0.9rem;
                    }
                    @media (max-width: 900px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container-custom">
                <h2 class="section-title">{&content.title}</h2>
                <div class="about-grid">
                    <div class={classes!("about-photo", entrance_class(in_view, "-translate-x-8"))}>
                        <img src={content.image_url.clone()} alt={content.image_alt.clone()} loading="lazy" />
                    </div>
                    <div class={classes!("about-text", entrance_class(in_view, "translate-x-8"), "delay-300")}>
                        <h3 class="about-name">{&content.name}</h3>
                        <p class="about-credentials">{&content.credentials}</p>
                        { for content.description.iter().map(|paragraph| html! { <p>{paragraph}</p> }) }
                        <div class="about-badges">
                            { for content.badges.iter().map(|badge| html! {
                                <span class="about-badge">{badge}</span>
                            }) }
                        </div>
                        <p class="about-location">{format!("{} · {}", config.location.city, config.therapist.working_hours)}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
