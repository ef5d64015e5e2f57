use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::ServicesData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: Rc<ServicesData>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "services");
    let content = &props.content;

    html! {
        <section id="services" class="section-padding services" ref={node}>
            <style>
                {r#"
                    .services {
                        background: var(--color-background-light);
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .services-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .services-list {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .service-item {
                        background: var(--color-white);
                        border-radius: 12px;
                        padding: 1.75rem;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.06);
                    }
                    .service-item.hoverable:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 16px 32px rgba(0,0,0,0.1);
                    }
                    .service-icon {
                        font-size: 2rem;
                        margin-bottom: 0.75rem;
                    }
                    .service-item h3 {
                        color: var(--color-dark);
                        margin-bottom: 0.5rem;
                    }
                    .service-item p {
                        color: var(--color-text-secondary);
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.description}</p>
                </div>
                <div class={content.layout.class()}>
                    { for content.ordered().into_iter().enumerate().map(|(i, item)| html! {
                        <div
                            key={item.id.clone()}
                            class={classes!(
                                "service-item",
                                content.show_hover_effects.then_some("hoverable"),
                                entrance_class(in_view, "translate-y-8")
                            )}
                            style={format!("transition-delay: {}ms;", i * 100)}
                        >
                            if content.show_icons {
                                <div class="service-icon">{&item.icon}</div>
                            }
                            <h3>{&item.title}</h3>
                            <p>{&item.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
