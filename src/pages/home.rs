use log::warn;
use web_sys::Document;
use yew::prelude::*;

use crate::components::notification::{Toast, Toaster};
use crate::config::Metadata;
use crate::content::SiteContent;
use crate::sections::{
    about::AboutSection, blog::BlogSection, contact::ContactSection, faq::FaqSection, footer::Footer,
    hero::HeroSection, pricing::PricingSection, process::ProcessSection, services::ServicesSection,
    testimonials::TestimonialsSection,
};

fn set_meta(document: &Document, name: &str, value: &str) {
    let selector = format!("meta[name=\"{}\"]", name);
    let existing = document.query_selector(&selector).ok().flatten();
    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Ok(meta) = document.create_element("meta") else { return };
            let _ = meta.set_attribute("name", name);
            match document.head() {
                Some(head) => {
                    let _ = head.append_child(&meta);
                }
                None => return,
            }
            meta
        }
    };
    let _ = meta.set_attribute("content", value);
}

/// Writes title, description and keywords into the document head.
pub fn apply_metadata(metadata: &Metadata) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document available, skipping head metadata");
        return;
    };
    document.set_title(&metadata.title);
    set_meta(&document, "description", &metadata.description);
    set_meta(&document, "keywords", &metadata.keywords);
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: SiteContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let toast = use_state(|| None::<Toast>);
    let site = &props.site;

    {
        let metadata = site.config.metadata.clone();
        use_effect_with_deps(
            move |_| {
                apply_metadata(&metadata);
                || ()
            },
            (),
        );
    }

    let notify = {
        let toast = toast.clone();
        Callback::from(move |t: Toast| toast.set(Some(t)))
    };
    let dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    html! {
        <div class="site" style={site.config.theme_style()}>
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: var(--font-body);
                    }
                    .site {
                        background: var(--color-background);
                        color: var(--color-dark);
                        font-family: var(--font-body);
                    }
                    .site h1, .site h2, .site h3 {
                        font-family: var(--font-heading);
                        margin-top: 0;
                    }
                    .section-padding {
                        padding: 6rem 0;
                    }
                    .container-custom {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title {
                        font-size: 2.5rem;
                        color: var(--color-dark);
                        margin-bottom: 1rem;
                        text-align: center;
                    }
                    .section-lead {
                        font-size: 1.25rem;
                        color: var(--color-text-secondary);
                        max-width: 48rem;
                        margin: 0 auto;
                    }
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.7s ease, transform 0.7s ease;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                    .translate-y-8 { transform: translateY(2rem); }
                    .translate-x-8 { transform: translateX(2rem); }
                    .-translate-x-8 { transform: translateX(-2rem); }
                    .delay-100 { transition-delay: 100ms; }
                    .delay-300 { transition-delay: 300ms; }
                    .delay-400 { transition-delay: 400ms; }
                    .delay-500 { transition-delay: 500ms; }
                    .delay-600 { transition-delay: 600ms; }
                    @media (max-width: 768px) {
                        .section-padding {
                            padding: 4rem 0;
                        }
                        .section-title {
                            font-size: 2rem;
                        }
                    }
                "#}
            </style>
            <HeroSection config={site.config.clone()} content={site.hero.clone()} />
            <AboutSection config={site.config.clone()} content={site.about.clone()} />
            <ServicesSection content={site.services.clone()} />
            <ProcessSection content={site.process.clone()} />
            <PricingSection content={site.pricing.clone()} />
            <TestimonialsSection content={site.testimonials.clone()} />
            <FaqSection content={site.faq.clone()} />
            <BlogSection content={site.blog.clone()} />
            <ContactSection config={site.config.clone()} content={site.contact.clone()} on_notify={notify} />
            <Footer config={site.config.clone()} content={site.footer.clone()} />
            <Toaster toast={(*toast).clone()} on_dismiss={dismiss} />
        </div>
    }
}
