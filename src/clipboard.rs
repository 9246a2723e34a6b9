//! Clipboard
//!
//! `[data-clipboard]` elements copy their attribute value (or the page URL
//! when it is empty) and confirm with a short toast.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::config::{CLIPBOARD_NOTIFICATION_MS, MSG_COPY_FAILED, MSG_LINK_COPIED};
use crate::context::PageContext;
use crate::dom::{self, Scope};
use crate::models::Severity;
use crate::notifier::Notifier;

pub fn init_clipboard(ctx: &PageContext) {
    dom::bind_all(Scope::Document, "[data-clipboard]", &["click"], |el| {
        let el = el.clone();
        let notifier = ctx.notifier;
        move |ev| {
            dom::prevent_default(&ev);
            let text = match el.get_attribute("data-clipboard").filter(|t| !t.is_empty()) {
                Some(text) => text,
                None => dom::window().and_then(|win| win.location().href().ok()).unwrap_or_default(),
            };
            leptos::task::spawn_local(copy_to_clipboard(text, notifier));
        }
    });
}

pub async fn copy_to_clipboard(text: String, notifier: Notifier) {
    let copied = match async_clipboard() {
        Some(clipboard) => JsFuture::from(clipboard.write_text(&text)).await.is_ok(),
        None => copy_with_textarea(&text),
    };

    if copied {
        notifier.show_for(MSG_LINK_COPIED, Severity::Success, CLIPBOARD_NOTIFICATION_MS);
    } else {
        log::warn!("copy to clipboard failed");
        notifier.show_for(MSG_COPY_FAILED, Severity::Error, CLIPBOARD_NOTIFICATION_MS);
    }
}

fn async_clipboard() -> Option<web_sys::Clipboard> {
    let navigator = dom::window()?.navigator();
    let present = js_sys::Reflect::get(&navigator, &"clipboard".into())
        .map(|v| !v.is_undefined())
        .unwrap_or(false);
    present.then(|| navigator.clipboard())
}

/// Older browsers: select a hidden textarea and `execCommand("copy")`
fn copy_with_textarea(text: &str) -> bool {
    let Some(doc) = dom::document() else { return false };
    let Some(body) = doc.body() else { return false };
    let Some(area) = doc
        .create_element("textarea")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
    else {
        return false;
    };

    area.set_value(text);
    if body.append_child(&area).is_err() {
        return false;
    }
    let _ = area.focus();
    area.select();
    let copied = doc
        .dyn_ref::<HtmlDocument>()
        .map(|html| html.exec_command("copy").unwrap_or(false))
        .unwrap_or(false);
    area.remove();
    copied
}
