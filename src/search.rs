//! Search
//!
//! Debounced query logging on the search box and `<mark>` highlighting
//! of the active `?search=` term in project cards.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, UrlSearchParams};

use crate::config::{MIN_SEARCH_QUERY_LEN, SEARCH_DEBOUNCE_MS};
use crate::dom;
use crate::text::{highlight, search_pattern};

const HIGHLIGHT_SELECTOR: &str = ".project-card .card-title, .project-card .card-text";

/// Runs only the last of a burst of calls, `delay_ms` after it
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::default(),
        }
    }

    pub fn call<F: FnOnce() + 'static>(&self, f: F) {
        // Dropping the previous timeout cancels it
        *self.pending.borrow_mut() = Some(Timeout::new(self.delay_ms, f));
    }
}

/// Worth searching for: more than the minimum number of characters
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() > MIN_SEARCH_QUERY_LEN
}

pub fn init_search() {
    let (Some(_form), Some(input)) = (
        dom::by_id("searchForm"),
        dom::query(r#"input[name="search"]"#).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()),
    ) else {
        return;
    };

    let debounce = Debouncer::new(SEARCH_DEBOUNCE_MS);
    let field = input.clone();
    dom::listen(&input, &["input"], move |_| {
        let query = field.value().trim().to_string();
        if is_searchable(&query) {
            debounce.call(move || log::info!("searching for: {}", query));
        }
    });

    if let Some(query) = current_query() {
        highlight_search_terms(&query);
    }
}

fn current_query() -> Option<String> {
    let search = dom::window()?.location().search().ok()?;
    UrlSearchParams::new_with_str(&search).ok()?.get("search")
}

fn highlight_search_terms(query: &str) {
    let Some(pattern) = search_pattern(query) else { return };

    for el in dom::query_all(HIGHLIGHT_SELECTOR) {
        let text = el.text_content().unwrap_or_default();
        if pattern.is_match(&text) {
            el.set_inner_html(&highlight(&text, &pattern));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_searchable() {
        assert!(!is_searchable(""));
        assert!(!is_searchable("ab"));
        assert!(!is_searchable("  ab  "));
        assert!(is_searchable("abc"));
        assert!(is_searchable("ção"));
    }
}
