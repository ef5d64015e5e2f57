use std::rc::Rc;

use yew::prelude::*;

use crate::animation::{entrance_class, Parallax};
use crate::config::SiteConfig;
use crate::content::HeroData;
use crate::hooks::{use_in_view, use_scrolled_past};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub config: Rc<SiteConfig>,
    pub content: Rc<HeroData>,
}

/// Inline style for the hero photo. Blur and scale kick in once the page is
/// scrolled; the base brightness and contrast always stay.
fn background_style(image_url: &str, scrolled: bool) -> String {
    format!(
        "background-image: linear-gradient(rgba(0, 0, 0, 0.1), rgba(0, 0, 0, 0.2)), url({}); filter: brightness(1.25) contrast(1.05) blur({}px); transform: scale({});",
        image_url,
        if scrolled { 2 } else { 0 },
        if scrolled { 1.05 } else { 1.0 },
    )
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "hero");
    let scrolled = use_scrolled_past(50.0);
    let parallax = use_state(Parallax::default);

    {
        let parallax = parallax.clone();
        yew_hooks::use_event_with_window("mousemove", move |e: MouseEvent| {
            let Some(window) = web_sys::window() else { return };
            let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
            parallax.set(Parallax::from_pointer(
                e.client_x() as f64,
                e.client_y() as f64,
                width,
                height,
            ));
        });
    }

    let HeroProps { config, content } = props;

    let hero_style = background_style(&content.image_url, scrolled);

    html! {
        <section id="hero" class="hero" ref={node}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        padding: 8rem 0 5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        transition: all 0.5s ease-out;
                    }
                    .hero-blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                    }
                    .hero-blob.accent {
                        width: 24rem;
                        height: 24rem;
                        top: 25%;
                        left: 25%;
                        background: var(--color-accent);
                        opacity: 0.15;
                        transition: transform 0.2s ease-out;
                    }
                    .hero-blob.primary {
                        width: 16rem;
                        height: 16rem;
                        bottom: 25%;
                        right: 33%;
                        background: var(--color-primary);
                        opacity: 0.25;
                        transition: transform 0.3s ease-out;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 64rem;
                        width: 100%;
                        padding: 0 1.5rem;
                    }
                    .hero-tagline {
                        display: inline-block;
                        color: #fff;
                        background: var(--color-primary);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 1.2rem;
                        margin-bottom: 0.75rem;
                    }
                    .hero-card {
                        background: rgba(0, 0, 0, 0.3);
                        backdrop-filter: blur(4px);
                        padding: 2rem;
                        border-radius: 12px;
                    }
                    .hero-card h1 {
                        color: #fff;
                        font-size: 3.75rem;
                        line-height: 1.15;
                        margin-bottom: 1rem;
                        font-family: var(--font-heading);
                    }
                    .hero-card h1 .hero-title {
                        display: block;
                        margin-top: 0.5rem;
                        font-size: 2.5rem;
                        color: var(--color-text-primary);
                    }
                    .hero-subheadline {
                        color: #fff;
                        font-size: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-highlights {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .hero-highlight {
                        color: #fff;
                        background: rgba(255, 255, 255, 0.2);
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                    }
                    .hero-highlight:first-child::before {
                        content: '★';
                        color: #facc15;
                        margin-right: 0.5rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        color: #fff;
                        background: var(--color-primary);
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.1rem;
                        text-decoration: none;
                        transition: box-shadow 0.3s ease;
                    }
                    .hero-cta:hover {
                        box-shadow: 0 16px 32px rgba(0,0,0,0.25);
                    }
                    .hero-availability {
                        color: #fff;
                        margin-top: 1rem;
                    }
                    .hero-scroll {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        color: #fff;
                        background: rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        padding: 0.75rem 1rem;
                        text-decoration: none;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, -25%); }
                        50% { transform: translate(-50%, 0); }
                    }
                    @media (max-width: 768px) {
                        .hero-card h1 {
                            font-size: 2.25rem;
                        }
                        .hero-card h1 .hero-title {
                            font-size: 1.75rem;
                        }
                        .hero-subheadline {
                            font-size: 1.2rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-background" style={hero_style}></div>
            <div class="hero-blob accent" style={format!("transform: {};", parallax.transform(0.5))}></div>
            <div class="hero-blob primary" style={format!("transform: {};", parallax.transform(-0.3))}></div>

            <div class="hero-content">
                <div class={classes!("hero-tagline", entrance_class(in_view, "translate-y-8"))}>
                    {&content.tagline}
                </div>
                <div class={classes!("hero-card", entrance_class(in_view, "translate-y-8"))}>
                    <h1>
                        <span>{&config.therapist.name}</span>
                        <span class="hero-title">{&config.therapist.title}</span>
                    </h1>
                    <p class={classes!("hero-subheadline", entrance_class(in_view, "translate-y-8"), "delay-300")}>
                        {&content.subheadline}
                    </p>
                    <div class={classes!("hero-highlights", entrance_class(in_view, "translate-y-8"), "delay-400")}>
                        { for content.highlights.iter().map(|h| html! {
                            <span class="hero-highlight">{h}</span>
                        }) }
                    </div>
                    <a href="#contact" class={classes!("hero-cta", entrance_class(in_view, ""), "delay-500")}>
                        {&content.cta_text}
                    </a>
                    <p class={classes!("hero-availability", entrance_class(in_view, ""), "delay-600")}>
                        {&content.availability_note}
                    </p>
                </div>
            </div>

            <a href="#about" class="hero-scroll" aria-label="Przewiń w dół">{"↓"}</a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_keeps_tone_while_blurred() {
        let resting = background_style("/hero.jpg", false);
        assert!(resting.contains("filter: brightness(1.25) contrast(1.05) blur(0px)"));
        assert!(resting.contains("scale(1)"));

        let scrolled = background_style("/hero.jpg", true);
        assert!(scrolled.contains("filter: brightness(1.25) contrast(1.05) blur(2px)"));
        assert!(scrolled.contains("scale(1.05)"));
        assert!(scrolled.contains("url(/hero.jpg)"));
    }
}
