//! Page Chrome
//!
//! Back-to-top button, navbar behaviour, the loading screen and global
//! error reporting.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, ErrorEvent, PromiseRejectionEvent, ScrollBehavior, ScrollToOptions};

use crate::config::{
    BACK_TO_TOP_OFFSET_PX, BACK_TO_TOP_PRESS_MS, LOADING_FADE_DELAY_MS, LOADING_FALLBACK_MS, LOADING_HIDE_MS,
    MOBILE_BREAKPOINT_PX, NAVBAR_SCROLLED_OFFSET_PX,
};
use crate::dom::{self, Scope};

// ========================
// Back to top
// ========================

pub fn init_back_to_top() {
    let Some(button) = dom::by_id("back-to-top") else { return };

    let shown = button.clone();
    dom::listen_window(&["scroll"], move |_| {
        dom::set_class(&shown, "show", dom::scroll_y() > BACK_TO_TOP_OFFSET_PX);
    });

    let pressed = button.clone();
    dom::listen(&button, &["click"], move |ev| {
        ev.prevent_default();
        if let Some(win) = dom::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
        dom::flash_style(&pressed, "transform", "scale(0.9)", BACK_TO_TOP_PRESS_MS);
    });
}

// ========================
// Navigation
// ========================

pub fn init_navigation() {
    let Some(navbar) = dom::query(".navbar") else { return };

    dom::listen_window(&["scroll"], move |_| {
        dom::set_class(&navbar, "scrolled", dom::scroll_y() > NAVBAR_SCROLLED_OFFSET_PX);
    });

    let current_path = dom::window().and_then(|win| win.location().pathname().ok()).unwrap_or_default();
    let links = dom::query_all(".nav-link");
    for link in &links {
        if link.get_attribute("href").as_deref() == Some(current_path.as_str()) {
            dom::set_class(link, "active", true);
        }
    }

    dom::bind_all(Scope::Document, ".nav-link", &["mouseenter"], |link| {
        let link = link.clone();
        move |_| dom::set_style(&link, "transform", "translateY(-2px)")
    });
    dom::bind_all(Scope::Document, ".nav-link", &["mouseleave"], |link| {
        let link = link.clone();
        move |_| dom::clear_style(&link, "transform")
    });

    // Collapse the mobile menu after picking a link
    if let (Some(_toggler), Some(collapse)) = (dom::query(".navbar-toggler"), dom::query(".navbar-collapse")) {
        for link in &links {
            let collapse = collapse.clone();
            dom::listen(link, &["click"], move |_| {
                if viewport_width() < MOBILE_BREAKPOINT_PX {
                    dom::set_class(&collapse, "show", false);
                }
            });
        }
    }
}

fn viewport_width() -> f64 {
    dom::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX)
}

// ========================
// Loading screen
// ========================

fn fade_out(screen: &Element) {
    dom::set_style(screen, "opacity", "0");
    let screen = screen.clone();
    Timeout::new(LOADING_HIDE_MS, move || dom::set_style(&screen, "display", "none")).forget();
}

/// Hide `#loading-screen` shortly after `load`, or after a fixed
/// maximum if `load` is slow. Only the first path to fire runs.
pub fn init_loading_screen() {
    let Some(screen) = dom::by_id("loading-screen") else { return };

    let hidden = Rc::new(Cell::new(false));
    let fallback_slot: Rc<RefCell<Option<Timeout>>> = Rc::default();

    let fallback = {
        let screen = screen.clone();
        let hidden = Rc::clone(&hidden);
        Timeout::new(LOADING_FALLBACK_MS, move || {
            if !hidden.replace(true) {
                log::debug!("loading screen hidden by fallback");
                fade_out(&screen);
            }
        })
    };
    *fallback_slot.borrow_mut() = Some(fallback);

    dom::on_load(move || {
        if let Some(timer) = fallback_slot.borrow_mut().take() {
            timer.cancel();
        }
        Timeout::new(LOADING_FADE_DELAY_MS, move || {
            if !hidden.replace(true) {
                fade_out(&screen);
            }
        })
        .forget();
    });
}

// ========================
// Page lifecycle
// ========================

pub fn init_page_lifecycle() {
    dom::on_load(|| {
        if let Some(body) = dom::document().and_then(|doc| doc.body()) {
            dom::set_class(&body, "loaded", true);
        }
        log::info!("all features loaded");
    });

    dom::listen_window(&["error"], |ev| {
        match ev.dyn_ref::<ErrorEvent>() {
            Some(err) => log::error!("script error: {} ({}:{})", err.message(), err.filename(), err.lineno()),
            None => log::error!("script error: {:?}", ev.type_()),
        }
    });

    dom::listen_window(&["unhandledrejection"], |ev| {
        if let Some(rejection) = ev.dyn_ref::<PromiseRejectionEvent>() {
            log::error!("unhandled promise rejection: {:?}", rejection.reason());
        }
    });
}
