use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;

mod animation;
mod config;
mod contact_form;
mod content;
mod hooks;
mod components {
    pub mod notification;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod about;
    pub mod blog;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod pricing;
    pub mod process;
    pub mod services;
    pub mod testimonials;
}

use content::SiteContent;
use hooks::use_scrolled_past;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub site: SiteContent,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let site = &props.site;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(80.0);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        ("about", site.about.title.as_str()),
        ("services", site.services.title.as_str()),
        ("process", site.process.title.as_str()),
        ("pricing", site.pricing.title.as_str()),
        ("faq", site.faq.title.as_str()),
        ("blog", site.blog.title.as_str()),
        ("contact", site.contact.title.as_str()),
    ];
    let crisis = &site.config.crisis_help;

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 16px rgba(0,0,0,0.08);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-heading);
                        font-weight: 700;
                        color: #fff;
                        text-decoration: none;
                    }
                    .top-nav.scrolled .nav-logo, .top-nav.scrolled .nav-link {
                        color: var(--color-dark);
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-crisis {
                        background: var(--color-accent);
                        color: #fff;
                        padding: 0.35rem 0.8rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: currentColor;
                    }
                    @media (max-width: 900px) {
                        .burger-menu {
                            display: flex;
                            color: #fff;
                        }
                        .top-nav.scrolled .burger-menu {
                            color: var(--color-dark);
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: var(--color-white);
                            padding: 1.5rem;
                        }
                        .nav-right.mobile-menu-open .nav-link {
                            color: var(--color-dark);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">{&site.config.site_name}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a
                        href={format!("tel:{}", crisis.phone_number.replace(' ', ""))}
                        class="nav-crisis"
                        title={crisis.availability_text.clone()}
                    >
                        {format!("SOS {}", crisis.phone_number)}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub site: SiteContent,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <>
            <Nav site={props.site.clone()} />
            <Home site={props.site.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct UnavailableProps {
    pub reason: String,
}

/// Rendered instead of the page when a content document fails to load.
#[function_component]
fn ContentUnavailable(props: &UnavailableProps) -> Html {
    html! {
        <main style="min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; text-align: center;">
            <div>
                <h1>{"Strona jest chwilowo niedostępna"}</h1>
                <p style="color: #666;">{&props.reason}</p>
            </div>
        </main>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    match SiteContent::load() {
        Ok(site) => {
            info!("Loaded content for {}", site.config.site_name);
            yew::Renderer::<App>::with_props(AppProps { site }).render();
        }
        Err(e) => {
            error!("{}", e);
            yew::Renderer::<ContentUnavailable>::with_props(UnavailableProps {
                reason: e.to_string(),
            })
            .render();
        }
    }
}
