use std::rc::Rc;

use yew::prelude::*;

use crate::animation::entrance_class;
use crate::content::ProcessData;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct ProcessProps {
    pub content: Rc<ProcessData>,
}

#[function_component(ProcessSection)]
pub fn process_section(props: &ProcessProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "process");
    let content = &props.content;

    html! {
        <section id="process" class="section-padding process" ref={node}>
            <style>
                {r#"
                    .process-steps {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 2rem;
                        counter-reset: step;
                    }
                    .process-step {
                        position: relative;
                        text-align: center;
                        padding: 2rem 1.5rem;
                    }
                    .process-step-number {
                        width: 3rem;
                        height: 3rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--color-primary);
                        color: var(--color-white);
                        font-weight: 600;
                    }
                    .process-step-icon {
                        font-size: 1.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .process-step h3 {
                        color: var(--color-dark);
                        margin-bottom: 0.5rem;
                    }
                    .process-step p {
                        color: var(--color-text-secondary);
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.description}</p>
                </div>
                <ol class="process-steps">
                    { for content.ordered().into_iter().enumerate().map(|(i, step)| html! {
                        <li
                            key={step.id.clone()}
                            class={classes!("process-step", entrance_class(in_view, "translate-y-8"))}
                            style={format!("transition-delay: {}ms;", i * 150)}
                        >
                            <div class="process-step-number">{i + 1}</div>
                            <div class="process-step-icon">{&step.icon}</div>
                            <h3>{&step.title}</h3>
                            <p>{&step.description}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
