//! View Binder
//!
//! Thin helpers over web-sys: element lookup, listener binding and
//! short-lived style changes. Listeners live as long as the page, so their
//! closures are leaked on purpose.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

pub fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Where a selector is evaluated
#[derive(Clone, Copy)]
pub enum Scope<'a> {
    Document,
    /// Only descendants of this element (used for freshly inserted markup)
    Subtree(&'a Element),
}

impl Scope<'_> {
    pub fn query_all(self, selector: &str) -> Vec<Element> {
        let list = match self {
            Scope::Document => document().and_then(|doc| doc.query_selector_all(selector).ok()),
            Scope::Subtree(root) => root.query_selector_all(selector).ok(),
        };
        list.map(|l| elements(&l)).unwrap_or_default()
    }
}

pub fn query_all(selector: &str) -> Vec<Element> {
    Scope::Document.query_all(selector)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Keep only elements of type `T`
pub fn cast_all<T: JsCast>(elements: Vec<Element>) -> Vec<T> {
    elements.into_iter().filter_map(|el| el.dyn_into::<T>().ok()).collect()
}

/// Attach one handler to several event types on `target`
pub fn listen<F>(target: &EventTarget, events: &[&str], handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    for event in events {
        if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("binding '{}': {:?}", event, err);
        }
    }
    callback.forget();
}

/// Bind `events` on every element matching `selector` in `scope`.
/// `handler_for` builds a handler per element so it can capture it.
pub fn bind_all<F, H>(scope: Scope<'_>, selector: &str, events: &[&str], mut handler_for: F) -> usize
where
    F: FnMut(&Element) -> H,
    H: FnMut(Event) + 'static,
{
    let targets = scope.query_all(selector);
    for el in &targets {
        listen(el, events, handler_for(el));
    }
    targets.len()
}

/// Bind on `window`
pub fn listen_window<F>(events: &[&str], handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(win) = window() {
        listen(&win, events, handler);
    }
}

fn ready_state() -> Option<String> {
    document().map(|doc| doc.ready_state())
}

/// Run once the DOM is parsed; immediately if that already happened
pub fn on_ready<F: FnOnce() + 'static>(handler: F) {
    match (document(), ready_state()) {
        (Some(doc), Some(state)) if state == "loading" => {
            let mut handler = Some(handler);
            listen(&doc, &["DOMContentLoaded"], move |_| {
                if let Some(run) = handler.take() {
                    run();
                }
            });
        }
        _ => handler(),
    }
}

/// Run once the window has loaded; immediately if it already has
pub fn on_load<F: FnOnce() + 'static>(handler: F) {
    if ready_state().as_deref() == Some("complete") {
        handler();
        return;
    }
    let mut handler = Some(handler);
    listen_window(&["load"], move |_| {
        if let Some(run) = handler.take() {
            run();
        }
    });
}

pub fn scroll_y() -> f64 {
    window().and_then(|win| win.scroll_y().ok()).unwrap_or(0.0)
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property(property);
    }
}

/// Apply a style now and drop it after `ms`
pub fn flash_style(el: &Element, property: &'static str, value: &str, ms: u32) {
    set_style(el, property, value);
    let el = el.clone();
    Timeout::new(ms, move || clear_style(&el, property)).forget();
}

/// Prevent the event's default action, if it has one
pub fn prevent_default(ev: &Event) {
    if ev.cancelable() {
        ev.prevent_default();
    }
}
