use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::EntranceLatch;

/// Share of the section that must be visible before it animates in.
pub const IN_VIEW_THRESHOLD: f64 = 0.1;

/// Returns true once `node` has intersected the viewport, and stays true for
/// the lifetime of the component. The observer disconnects after the first
/// hit.
#[hook]
pub fn use_in_view(node: NodeRef, label: &'static str) -> bool {
    let latch = use_state(EntranceLatch::default);

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut teardown: Option<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let on_entry = latch.clone();
                    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let visible = entries.iter().any(|entry| {
                                entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting()
                            });
                            if visible {
                                debug!("Section `{}` entered the viewport", label);
                                on_entry.set(on_entry.observe(true));
                                observer.disconnect();
                            }
                        },
                    );

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                        Ok(observer) => {
                            observer.observe(&element);
                            teardown = Some((observer, callback));
                        }
                        Err(_) => {
                            warn!("IntersectionObserver unavailable, showing `{}` immediately", label);
                            latch.set(latch.observe(true));
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = teardown {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    latch.entered()
}

/// Tracks whether the window has been scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .map_or(false, |scroll_y| is_past(scroll_y, threshold))
    });

    {
        let scrolled = scrolled.clone();
        yew_hooks::use_event_with_window("scroll", move |_: Event| {
            if let Some(window) = web_sys::window() {
                if let Ok(scroll_y) = window.scroll_y() {
                    scrolled.set(is_past(scroll_y, threshold));
                }
            }
        });
    }

    *scrolled
}

fn is_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_exclusive() {
        assert!(!is_past(0.0, 50.0));
        assert!(!is_past(50.0, 50.0));
        assert!(is_past(50.5, 50.0));
    }
}
