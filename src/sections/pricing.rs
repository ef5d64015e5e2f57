use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::PricingData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub content: Rc<PricingData>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "pricing");
    let content = &props.content;

    html! {
        <section id="pricing" class="section-padding pricing" ref={node}>
            <style>
                {r#"
                    .pricing {
                        background: var(--color-background-light);
                    }
                    .pricing-cards {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .pricing-card {
                        background: var(--color-white);
                        border-radius: 12px;
                        padding: 2rem;
                        text-align: center;
                        box-shadow: 0 8px 24px rgba(0,0,0,0.06);
                        border-top: 4px solid var(--color-primary);
                    }
                    .pricing-card h3 {
                        color: var(--color-dark);
                        margin-bottom: 1rem;
                    }
                    .pricing-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                        color: var(--color-primary);
                    }
                    .pricing-duration {
                        color: var(--color-text-secondary);
                        margin-bottom: 1rem;
                    }
                    .pricing-card p {
                        color: var(--color-text-secondary);
                        font-size: 0.95rem;
                    }
                    .pricing-footer {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        color: var(--color-text-secondary);
                    }
                    .pricing-methods {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.5rem;
                        margin: 0.75rem 0 1.5rem;
                    }
                    .pricing-method {
                        border: 1px solid var(--color-primary-light);
                        border-radius: 9999px;
                        padding: 0.25rem 0.9rem;
                    }
                    .pricing-notes {
                        list-style: none;
                        padding: 0;
                        font-size: 0.9rem;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.subtitle}</p>
                </div>
                <div class="pricing-cards">
                    { for content.services.iter().enumerate().map(|(i, service)| html! {
                        <div
                            key={service.id.clone()}
                            class={classes!("pricing-card", entrance_class(in_view, "translate-y-8"))}
                            style={format!("transition-delay: {}ms;", i * 100)}
                        >
                            <h3>{&service.title}</h3>
                            <div class="pricing-price">{service.price_label()}</div>
                            <div class="pricing-duration">{service.duration_label()}</div>
                            if let Some(description) = &service.description {
                                <p>{description}</p>
                            }
                        </div>
                    }) }
                </div>
                <div class={classes!("pricing-footer", entrance_class(in_view, ""), "delay-300")}>
                    <div class="pricing-methods">
                        { for content.payment_methods.iter().map(|method| html! {
                            <span class="pricing-method">{method}</span>
                        }) }
                    </div>
                    <ul class="pricing-notes">
                        { for content.notes.iter().map(|note| html! { <li>{note}</li> }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
