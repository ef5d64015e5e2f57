use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::TestimonialData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub content: Rc<TestimonialData>,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "testimonials");
    let content = &props.content;

    html! {
        <section id="testimonials" class="section-padding testimonials" ref={node}>
            <style>
                {r#"
                    .testimonial-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                    }
                    .testimonial-card {
                        background: var(--color-white);
                        border-radius: 12px;
                        padding: 2rem;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.06);
                    }
                    .testimonial-stars {
                        color: #facc15;
                        letter-spacing: 0.15rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-text {
                        color: var(--color-text-secondary);
                        font-style: italic;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .testimonial-name {
                        color: var(--color-dark);
                        font-weight: 600;
                    }
                    .testimonials-more {
                        display: block;
                        text-align: center;
                        margin-top: 2rem;
                        color: var(--color-primary);
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.description}</p>
                </div>
                <div class="testimonial-cards">
                    { for content.testimonials.iter().enumerate().map(|(i, testimonial)| html! {
                        <figure
                            key={testimonial.id.clone()}
                            class={classes!("testimonial-card", entrance_class(in_view, "translate-y-8"))}
                            style={format!("transition-delay: {}ms;", i * 150)}
                        >
                            if content.show_rating {
                                <div class="testimonial-stars" aria-label={format!("{}/{}", testimonial.rating, crate::content::Testimonial::MAX_RATING)}>
                                    {testimonial.stars()}
                                </div>
                            }
                            <blockquote class="testimonial-text">{&testimonial.text}</blockquote>
                            <figcaption class="testimonial-name">{&testimonial.name}</figcaption>
                        </figure>
                    }) }
                </div>
                if !content.google_maps_link.is_empty() {
                    <a class="testimonials-more" href={content.google_maps_link.clone()} target="_blank" rel="noopener noreferrer">
                        {"Zobacz wszystkie opinie w Google"}
                    </a>
                }
            </div>
        </section>
    }
}
