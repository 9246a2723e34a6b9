//! Modal Enhancements
//!
//! Reacts to Bootstrap's modal events: focus on open, clean form on close.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlFormElement};

use crate::dom::{self, Scope};
use crate::forms::clear_validation;

pub fn init_modals() {
    dom::bind_all(Scope::Document, ".modal", &["shown.bs.modal"], |modal| {
        let modal = modal.clone();
        move |_| on_shown(&modal)
    });
    dom::bind_all(Scope::Document, ".modal", &["hide.bs.modal"], |modal| {
        let modal = modal.clone();
        move |_| on_hide(&modal)
    });
}

fn on_shown(modal: &Element) {
    if let Some(first) = modal
        .query_selector("input, textarea")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let _ = first.focus();
    }
    if let Some(dialog) = modal.query_selector(".modal-dialog").ok().flatten() {
        dom::set_style(&dialog, "transform", "scale(1)");
    }
}

fn on_hide(modal: &Element) {
    let Some(form) = modal
        .query_selector("form")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    form.reset();
    clear_validation(&form);
}
