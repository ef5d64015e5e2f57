use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::{FaqData, FaqQuestion};
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    item: FaqQuestion,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={format!("faq-{}", props.item.id)} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{&props.item.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.item.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub content: Rc<FaqData>,
}

#[function_component(FaqSection)]
pub fn faq_section(props: &FaqProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "faq");
    let content = &props.content;

    html! {
        <section id="faq" class="section-padding faq" ref={node}>
            <style>
                {r#"
                    .faq-list {
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .faq-item {
                        border-bottom: 1px solid var(--color-background-dark);
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.25rem 0;
                        background: none;
                        border: none;
                        cursor: pointer;
                        text-align: left;
                        font-size: 1.1rem;
                        color: var(--color-dark);
                    }
                    .toggle-icon {
                        color: var(--color-primary);
                        font-size: 1.5rem;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                        color: var(--color-text-secondary);
                    }
                    .faq-item.open .faq-answer {
                        max-height: 40rem;
                        padding-bottom: 1.25rem;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.subtitle}</p>
                </div>
                <div class={classes!("faq-list", entrance_class(in_view, "translate-y-8"))}>
                    { for content.questions.iter().map(|item| html! {
                        <FaqItem key={item.id.clone()} item={item.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
