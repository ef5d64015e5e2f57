use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Shows the current toast and dismisses it after a few seconds or on click.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|_| {
                    Timeout::new(TOAST_MS, move || on_dismiss.emit(()))
                });
                // dropping the handle cancels a pending dismissal
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast-viewport" role="status" aria-live="polite">
            <style>
                {r#"
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .toast-viewport {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 100;
                        max-width: 380px;
                        width: calc(100% - 3rem);
                    }
                    .toast {
                        background: var(--color-white);
                        color: var(--color-dark);
                        border-left: 4px solid var(--color-primary);
                        border-radius: 8px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
                        animation: toastIn 0.4s ease-out forwards;
                        cursor: pointer;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        color: var(--color-text-secondary);
                        font-size: 0.95rem;
                    }
                "#}
            </style>
            <div class="toast" onclick={dismiss}>
                <div class="toast-title">{&toast.title}</div>
                <div class="toast-description">{&toast.description}</div>
            </div>
        </div>
    }
}
