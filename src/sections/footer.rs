use std::rc::Rc;

use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::FooterData;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub config: Rc<SiteConfig>,
    pub content: Rc<FooterData>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let cookies_accepted = use_state(|| false);
    let FooterProps { config, content } = props;
    let crisis = &content.crisis_help;
    let consent = &content.cookie_consent;

    let accept_cookies = {
        let cookies_accepted = cookies_accepted.clone();
        Callback::from(move |_: MouseEvent| cookies_accepted.set(true))
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: var(--color-dark);
                        color: var(--color-light);
                        padding: 4rem 0 2rem;
                    }
                    .crisis-help {
                        border: 1px solid var(--color-accent);
                        border-radius: 12px;
                        padding: 1.5rem 2rem;
                        margin-bottom: 3rem;
                        background: rgba(255, 255, 255, 0.04);
                    }
                    .crisis-help h3 {
                        color: var(--color-accent-light);
                        margin-bottom: 0.5rem;
                    }
                    .crisis-help a {
                        display: inline-block;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--color-white);
                        margin: 0.75rem 0 0.25rem;
                        text-decoration: none;
                    }
                    .crisis-availability {
                        font-size: 0.9rem;
                        opacity: 0.8;
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.9rem;
                        opacity: 0.85;
                    }
                    .footer-tagline {
                        opacity: 0.7;
                        margin-top: 0.25rem;
                    }
                    .footer-links, .footer-social {
                        display: flex;
                        gap: 1.25rem;
                    }
                    .footer-links a, .footer-social a {
                        color: inherit;
                    }
                    .cookie-banner {
                        position: fixed;
                        left: 1rem;
                        right: 1rem;
                        bottom: 1rem;
                        z-index: 90;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        max-width: 56rem;
                        margin: 0 auto;
                        background: var(--color-white);
                        color: var(--color-dark);
                        border-radius: 8px;
                        padding: 1rem 1.5rem;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.2);
                    }
                    .cookie-banner button {
                        background: var(--color-primary);
                        color: var(--color-white);
                        border: none;
                        border-radius: 6px;
                        padding: 0.5rem 1.25rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="container-custom">
                <div class="crisis-help">
                    <h3>{&crisis.title}</h3>
                    <p>{&crisis.description}</p>
                    <a href={format!("tel:{}", crisis.phone_number.replace(' ', ""))}>{&crisis.phone_number}</a>
                    <p class="crisis-availability">{&crisis.availability_text}</p>
                </div>

                <div class="footer-bottom">
                    <div>
                        <p>{format!("© {} {}", Local::now().year(), content.copyright)}</p>
                        <p class="footer-tagline">{&config.site_description}</p>
                    </div>
                    <nav class="footer-links">
                        { for content.links.iter().map(|link| html! {
                            <a href={link.url.clone()}>{&link.text}</a>
                        }) }
                    </nav>
                    <div class="footer-social">
                        { for config.social.links().into_iter().map(|(label, url)| html! {
                            <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{label}</a>
                        }) }
                    </div>
                </div>
            </div>

            if !*cookies_accepted {
                <div class="cookie-banner" role="dialog" aria-live="polite">
                    <p>
                        {&consent.message}{" "}
                        <a href={consent.more_info_url.clone()}>{&consent.more_info_text}</a>
                    </p>
                    <button onclick={accept_cookies}>{&consent.accept_button_text}</button>
                </div>
            }
        </footer>
    }
}
