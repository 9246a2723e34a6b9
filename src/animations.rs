//! Visibility Animator
//!
//! Entrance animations for `[data-aos]`, hero parallax and floating
//! decorations. The observer itself lives in the `scroll-reveal` crate.

use scroll_reveal::{observe_once, observer_supported, reveal, start_floating, RevealOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement, IntersectionObserver};

use crate::config::PARALLAX_RATE;
use crate::dom::{self, Scope};

const REVEAL_SELECTOR: &str = "[data-aos]";

/// Observe every `[data-aos]` element; returns the observer so markup
/// inserted later can be registered too
pub fn init_animations() -> Option<IntersectionObserver> {
    let targets = dom::query_all(REVEAL_SELECTOR);

    let observer = if observer_supported() {
        match observe_once(&RevealOptions::default(), reveal) {
            Ok(observer) => Some(observer),
            Err(err) => {
                log::warn!("entrance observer unavailable: {:?}", err);
                None
            }
        }
    } else {
        None
    };

    match &observer {
        Some(observer) => targets.iter().for_each(|el| observer.observe(el)),
        // Nothing to wait for: show everything in its final state
        None => targets.iter().for_each(reveal),
    }
    log::debug!("observing {} entrance animations", targets.len());

    init_parallax();
    init_floating();
    observer
}

/// Register `root` and its `[data-aos]` descendants with `observer`
pub fn observe_subtree(observer: &IntersectionObserver, root: &Element) {
    if root.matches(REVEAL_SELECTOR).unwrap_or(false) {
        observer.observe(root);
    }
    for el in Scope::Subtree(root).query_all(REVEAL_SELECTOR) {
        observer.observe(&el);
    }
}

pub fn init_lazy_images() {
    let images = dom::cast_all::<HtmlImageElement>(dom::query_all("img[data-src]"));
    log::debug!("lazy loading {} images", images.len());
    scroll_reveal::lazy_load_images(images);
}

/// Hero background offset for a scroll position
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

fn init_parallax() {
    let Some(hero) = dom::query(".hero-section") else { return };

    dom::listen_window(&["scroll"], move |_| {
        if let Some(background) = hero.query_selector(".hero-background").ok().flatten() {
            let rate = parallax_offset(dom::scroll_y());
            dom::set_style(&background, "transform", &format!("translateY({}px)", rate));
        }
    });
}

fn init_floating() {
    let elements = dom::query_all(".float-element, .float-icon");
    for (index, el) in elements.into_iter().enumerate() {
        if let Ok(el) = el.dyn_into::<HtmlElement>() {
            start_floating(el, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_moves_at_half_speed_upwards() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
    }
}
