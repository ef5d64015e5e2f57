use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::animation::{
    entrance_class, ParticleAction, ParticleField, Ripple, PARTICLE_COUNT, PARTICLE_TICK_MS, RIPPLE_MS,
};
use crate::components::notification::Toast;
use crate::config::{tint, SiteConfig};
use crate::contact_form::{ContactForm, FieldId, FormAction, SUBMIT_DELAY_MS};
use crate::content::{ContactData, FieldCopy};
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub config: Rc<SiteConfig>,
    pub content: Rc<ContactData>,
    pub on_notify: Callback<Toast>,
}

fn text_input(form: &UseReducerDispatcher<ContactForm>, field: FieldId) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            area.value()
        } else {
            return;
        };
        form.dispatch(FormAction::Edit(field, value));
    })
}

fn required_mark(required: bool) -> &'static str {
    if required { " *" } else { "" }
}

fn field_error(form: &ContactForm, field: FieldId) -> Html {
    match form.errors.get(field) {
        Some(message) => html! { <p class="field-error-text">{message}</p> },
        None => html! {},
    }
}

/// One labelled single-line input. Validated fields get the border tone and
/// the inline error below.
fn input_row(
    form: &ContactForm,
    dispatcher: &UseReducerDispatcher<ContactForm>,
    field: FieldId,
    copy: &FieldCopy,
    input_type: &'static str,
    validated: bool,
) -> Html {
    let tone = if validated { form.border_tone(field).class() } else { "" };
    html! {
        <div class="form-row">
            <label for={field.as_str()}>{&copy.label}{required_mark(copy.required)}</label>
            <input
                id={field.as_str()}
                name={field.as_str()}
                type={input_type}
                class={classes!("form-input", tone)}
                placeholder={copy.placeholder.clone()}
                value={form.values.text(field).to_string()}
                oninput={text_input(dispatcher, field)}
            />
            if validated {
                { field_error(form, field) }
            }
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "contact");

    let form = {
        let messages = props.content.messages.clone();
        use_reducer(move || ContactForm::new(messages))
    };
    let particles = use_reducer(ParticleField::default);
    let ripple = use_state(|| None::<Ripple>);
    let ripple_timeout = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();

    // Particles are drawn once, the first time the section shows up.
    {
        let particles = particles.dispatcher();
        use_effect_with_deps(
            move |in_view: &bool| {
                if *in_view {
                    let seeded = ParticleField::generate(PARTICLE_COUNT, web_sys::js_sys::Math::random);
                    particles.dispatch(ParticleAction::Seed(seeded));
                }
                || ()
            },
            in_view,
        );
    }

    {
        let tick = particles.dispatcher();
        let millis = if in_view && !particles.is_empty() { PARTICLE_TICK_MS } else { 0 };
        yew_hooks::use_interval(move || tick.dispatch(ParticleAction::Tick), millis);
    }

    // Simulated send. The future is not cancelled on unmount; finishing it
    // only touches this component's own state.
    {
        let dispatcher = form.dispatcher();
        let on_notify = props.on_notify.clone();
        let confirmation = form.confirmation();
        use_effect_with_deps(
            move |submitting: &bool| {
                if *submitting {
                    spawn_local(async move {
                        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                        debug!("Simulated contact message delivered");
                        on_notify.emit(confirmation);
                        dispatcher.dispatch(FormAction::Delivered);
                    });
                }
                || ()
            },
            form.is_submitting(),
        );
    }

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let on_consent = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                dispatcher.dispatch(FormAction::Consent(input.checked()));
            }
        })
    };

    // Events are delegated to the app root, so the form is measured through
    // its own ref rather than the event's current target.
    let on_touch = {
        let ripple = ripple.clone();
        let ripple_timeout = ripple_timeout.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.touches().get(0) else { return };
            let Some(form_el) = form_ref.cast::<Element>() else { return };
            let rect = form_el.get_bounding_client_rect();
            ripple.set(Some(Ripple::at(
                touch.client_x() as f64,
                touch.client_y() as f64,
                rect.left(),
                rect.top(),
            )));
            let ripple = ripple.clone();
            // Replacing the pending timeout drops and cancels the previous one.
            *ripple_timeout.borrow_mut() = Some(Timeout::new(RIPPLE_MS, move || ripple.set(None)));
        })
    };

    let ContactProps { config, content, .. } = props;
    let colors = &config.colors;
    let dispatcher = form.dispatcher();
    let fields = &content.form_fields;

    html! {
        <section id="contact" class="section-padding contact" ref={node}>
            <style>
                {r#"
                    .contact {
                        position: relative;
                        overflow: hidden;
                        isolation: isolate;
                    }
                    .contact-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: -1;
                    }
                    .contact-particle {
                        position: absolute;
                        border-radius: 50%;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-card {
                        position: relative;
                        overflow: hidden;
                        background: var(--color-white);
                        padding: 2rem;
                        border-radius: 8px;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 20px 40px rgba(0,0,0,0.08);
                    }
                    .form-pair {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-row label {
                        display: block;
                        margin-bottom: 0.5rem;
                        color: #374151;
                    }
                    .form-input {
                        width: 100%;
                        padding: 0.6rem 0.8rem;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        font: inherit;
                        transition: border-color 0.3s ease;
                    }
                    .form-input.field-error {
                        border-color: #ef4444;
                    }
                    .form-input.field-success {
                        border-color: #22c55e;
                    }
                    .field-error-text {
                        color: #ef4444;
                        font-size: 0.875rem;
                        margin-top: 0.25rem;
                    }
                    .form-message {
                        margin-bottom: 1.5rem;
                    }
                    .form-consent {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .form-submit {
                        width: 100%;
                        padding: 0.8rem;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .form-submit:disabled {
                        opacity: 0.7;
                        cursor: wait;
                    }
                    @keyframes ripple {
                        from { transform: translate(-50%, -50%) scale(0); opacity: 1; }
                        to { transform: translate(-50%, -50%) scale(1); opacity: 0; }
                    }
                    .touch-ripple {
                        position: absolute;
                        width: 200px;
                        height: 200px;
                        border-radius: 50%;
                        pointer-events: none;
                        animation: ripple 0.5s ease-out forwards;
                    }
                    .contact-info h3 {
                        font-size: 1.5rem;
                        color: #1f2937;
                        border-bottom: 1px solid #f3f4f6;
                        padding-bottom: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-info-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-info-icon {
                        padding: 0.75rem;
                        border-radius: 50%;
                        line-height: 1;
                    }
                    .contact-info-label {
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.25rem;
                    }
                    .contact-info-row a {
                        color: #4b5563;
                        text-decoration: none;
                    }
                    .appointment-button {
                        display: block;
                        text-align: center;
                        color: #fff;
                        padding: 0.75rem 1.5rem;
                        border-radius: 6px;
                        text-decoration: none;
                        margin-top: 2rem;
                    }
                    .contact-map {
                        margin-top: 2rem;
                        height: 18rem;
                        border-radius: 8px;
                        overflow: hidden;
                        border: 4px solid #fff;
                        box-shadow: 0 20px 40px rgba(0,0,0,0.08);
                    }
                    .contact-map-link {
                        display: block;
                        margin-top: 0.75rem;
                        color: var(--color-primary);
                        font-size: 0.9rem;
                    }
                    .contact-map iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .form-pair {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div
                class="contact-backdrop"
                style={format!("background: linear-gradient(to top, {}, {});", colors.background_light, colors.white)}
            >
                { for particles.particles.iter().map(|p| html! {
                    <div
                        class="contact-particle"
                        style={format!(
                            "left: {}%; top: {}%; width: {}px; height: {}px; background: {};",
                            p.x, p.y, p.size, p.size, tint(&colors.primary, "20")
                        )}
                    ></div>
                }) }
            </div>

            <div class="container-custom">
                <div class="section-header">
                    <h2 class="section-title">{&content.title}</h2>
                    <p class="section-lead">{&content.description}</p>
                </div>

                <div class="contact-grid">
                    <div class={classes!(entrance_class(in_view, "translate-x-8"), "delay-100")}>
                        <form class="contact-card" ref={form_ref} onsubmit={onsubmit} ontouchstart={on_touch} novalidate={true}>
                            if let Some(r) = *ripple {
                                <div
                                    class="touch-ripple"
                                    style={format!("left: {}px; top: {}px; background: {};", r.x, r.y, tint(&colors.primary, "10"))}
                                ></div>
                            }

                            <div class="form-pair">
                                { input_row(&form, &dispatcher, FieldId::Name, &fields.name, "text", true) }
                                { input_row(&form, &dispatcher, FieldId::Email, &fields.email, "email", true) }
                            </div>
                            <div class="form-pair">
                                { input_row(&form, &dispatcher, FieldId::Phone, &fields.phone, "tel", false) }
                                { input_row(&form, &dispatcher, FieldId::Subject, &fields.subject, "text", false) }
                            </div>

                            <div class="form-row form-message">
                                <label for="message">{&fields.message.label}{required_mark(fields.message.required)}</label>
                                <textarea
                                    id="message"
                                    name="message"
                                    rows="5"
                                    class={classes!("form-input", form.border_tone(FieldId::Message).class())}
                                    placeholder={fields.message.placeholder.clone()}
                                    value={form.values.message.clone()}
                                    oninput={text_input(&dispatcher, FieldId::Message)}
                                />
                                { field_error(&form, FieldId::Message) }
                            </div>

                            <div class="form-consent">
                                <input
                                    id="gdpr"
                                    name={FieldId::GdprConsent.as_str()}
                                    type="checkbox"
                                    checked={form.values.gdpr_consent}
                                    onchange={on_consent}
                                />
                                <div>
                                    <label for="gdpr">{&fields.gdpr_checkbox.label}{required_mark(fields.gdpr_checkbox.required)}</label>
                                    { field_error(&form, FieldId::GdprConsent) }
                                </div>
                            </div>

                            <button
                                type="submit"
                                class="form-submit"
                                disabled={form.is_submitting()}
                                style={format!("background-color: {};", colors.primary)}
                            >
                                { if form.is_submitting() { content.messages.sending.clone() } else { content.submit_button.clone() } }
                                {" ➤"}
                            </button>
                        </form>
                    </div>

                    <div class={classes!(entrance_class(in_view, "translate-x-8"), "delay-300")}>
                        <div class="contact-card contact-info">
                            <h3>{"Dane kontaktowe"}</h3>
                            <div class="contact-info-row">
                                <span class="contact-info-icon" style={format!("background: {};", tint(&colors.primary, "10"))}>{"📍"}</span>
                                <div>
                                    <p class="contact-info-label">{"Adres"}</p>
                                    <p>{&config.therapist.address}</p>
                                </div>
                            </div>
                            <div class="contact-info-row">
                                <span class="contact-info-icon" style={format!("background: {};", tint(&colors.primary, "10"))}>{"📞"}</span>
                                <div>
                                    <p class="contact-info-label">{"Telefon"}</p>
                                    <a href={format!("tel:{}", config.therapist.phone)}>{&config.therapist.phone}</a>
                                </div>
                            </div>
                            <div class="contact-info-row">
                                <span class="contact-info-icon" style={format!("background: {};", tint(&colors.primary, "10"))}>{"✉️"}</span>
                                <div>
                                    <p class="contact-info-label">{"Email"}</p>
                                    <a href={format!("mailto:{}", config.therapist.email)}>{&config.therapist.email}</a>
                                </div>
                            </div>
                            <div class="contact-info-row">
                                <span class="contact-info-icon" style={format!("background: {};", tint(&colors.primary, "10"))}>{"🗓️"}</span>
                                <div>
                                    <p class="contact-info-label">{"Godziny pracy"}</p>
                                    <p>{&config.therapist.working_hours}</p>
                                </div>
                            </div>
                            <a
                                class="appointment-button"
                                href={content.calendly_link.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                style={format!("background-color: {};", colors.accent)}
                            >
                                {&content.appointment_button_text}
                            </a>
                        </div>

                        <div class="contact-map">
                            <iframe
                                title="Mapa lokalizacji gabinetu"
                                src={content.map_src(config)}
                                allowfullscreen={true}
                                loading="lazy"
                            ></iframe>
                        </div>
                        <a class="contact-map-link" href={config.location.map_url.clone()} target="_blank" rel="noopener noreferrer">
                            {format!("{} ↗", config.location.address)}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
