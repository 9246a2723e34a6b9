//! Form Enhancements
//!
//! Inline validation feedback, busy submit buttons with a fallback
//! timer, and character counters for limited textareas.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::OnceLock;

use gloo_timers::callback::Timeout;
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::comments::{SubmitButton, COMMENT_FORM_ID};
use crate::config::{
    COUNTER_WARNING_REMAINING, MIN_PASSWORD_LEN, MSG_FIELD_REQUIRED, MSG_INVALID_EMAIL, MSG_SHORT_PASSWORD,
    SUBMIT_BUSY_LABEL, SUBMIT_FALLBACK_MS,
};
use crate::dom::{self, Scope};
use crate::optimistic::BusyGuard;

const FIELD_SELECTOR: &str = "input, textarea, select";
const FIELD_ERROR_CLASS: &str = "field-error";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_re().is_match(value)
}

// ========================
// Validation
// ========================

/// Field kinds with extra rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Password,
    Other,
}

impl FieldKind {
    pub fn from_type(input_type: &str) -> Self {
        match input_type {
            "email" => FieldKind::Email,
            "password" => FieldKind::Password,
            _ => FieldKind::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    /// Non-empty and acceptable
    Valid,
    /// Empty optional field, no feedback either way
    Empty,
    Invalid(&'static str),
}

/// Validate a trimmed field value
pub fn validate(value: &str, kind: FieldKind, required: bool) -> Validation {
    let value = value.trim();
    if value.is_empty() {
        return if required { Validation::Invalid(MSG_FIELD_REQUIRED) } else { Validation::Empty };
    }
    match kind {
        FieldKind::Email if !is_valid_email(value) => Validation::Invalid(MSG_INVALID_EMAIL),
        FieldKind::Password if value.chars().count() < MIN_PASSWORD_LEN => Validation::Invalid(MSG_SHORT_PASSWORD),
        _ => Validation::Valid,
    }
}

/// (value, type) of an input, textarea or select
fn field_value(el: &Element) -> Option<(String, String)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some((input.value(), input.type_()));
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.value(), "textarea".to_string()));
    }
    el.dyn_ref::<HtmlSelectElement>().map(|select| (select.value(), select.type_()))
}

fn validate_field(el: &Element) {
    let Some((value, input_type)) = field_value(el) else { return };
    let result = validate(&value, FieldKind::from_type(&input_type), el.has_attribute("required"));

    match result {
        Validation::Valid => {
            dom::set_class(el, "is-invalid", false);
            dom::set_class(el, "is-valid", true);
            show_field_error(el, None);
        }
        Validation::Invalid(message) => {
            dom::set_class(el, "is-valid", false);
            dom::set_class(el, "is-invalid", true);
            show_field_error(el, Some(message));
        }
        Validation::Empty => {}
    }
}

/// Replace the field's inline message; `None` just clears it
fn show_field_error(field: &Element, message: Option<&str>) {
    let Some(parent) = field.parent_element() else { return };

    if let Some(existing) = parent.query_selector(&format!(".{}", FIELD_ERROR_CLASS)).ok().flatten() {
        existing.remove();
    }

    let Some(message) = message else { return };
    let Some(doc) = dom::document() else { return };
    if let Ok(error) = doc.create_element("div") {
        error.set_class_name("field-error small text-danger mt-1");
        error.set_text_content(Some(message));
        let _ = parent.append_child(&error);
    }
}

/// Drop all validation feedback inside `root`
pub fn clear_validation(root: &Element) {
    for el in Scope::Subtree(root).query_all(".is-valid, .is-invalid") {
        let _ = el.class_list().remove_2("is-valid", "is-invalid");
    }
    for el in Scope::Subtree(root).query_all(&format!(".{}", FIELD_ERROR_CLASS)) {
        el.remove();
    }
}

// ========================
// Submit fallback
// ========================

/// A submit in progress: the button stays busy until the page goes away
/// or the fallback fires, whichever comes first
struct PendingSubmit {
    _busy: BusyGuard<SubmitButton>,
    fallback: Timeout,
}

type SubmitSlot = Rc<RefCell<Option<PendingSubmit>>>;

fn on_form_submit(form: &HtmlFormElement, slot: &SubmitSlot) {
    // Release an older submit first so its button label is restored before
    // this one reads it
    slot.borrow_mut().take();

    let Some(button) = SubmitButton::find(form, SUBMIT_BUSY_LABEL) else { return };
    let busy = BusyGuard::new(button);

    let fired = Rc::clone(slot);
    let fallback = Timeout::new(SUBMIT_FALLBACK_MS, move || {
        if let Some(pending) = fired.borrow_mut().take() {
            // Already fired; dropping the guard restores the button
            pending.fallback.forget();
        }
    });

    *slot.borrow_mut() = Some(PendingSubmit { _busy: busy, fallback });
}

// ========================
// Character counter
// ========================

/// Counter markup; length is in UTF-16 units like `maxlength`
pub fn counter_markup(current: usize, max: i64) -> String {
    let remaining = max - current as i64;
    let class = if remaining < COUNTER_WARNING_REMAINING { "text-warning" } else { "text-muted" };
    format!(r#"<span class="{}">{}/{} caracteres</span>"#, class, current, max)
}

fn init_character_counters() {
    let Some(doc) = dom::document() else { return };

    for area in dom::cast_all::<HtmlTextAreaElement>(dom::query_all("textarea[maxlength]")) {
        let (Some(parent), Ok(counter)) = (area.parent_element(), doc.create_element("div")) else {
            continue;
        };
        counter.set_class_name("character-counter small text-muted text-end mt-1");
        let _ = parent.append_child(&counter);

        let max = i64::from(area.max_length());
        let update = {
            let area = area.clone();
            move || counter.set_inner_html(&counter_markup(area.value().encode_utf16().count(), max))
        };
        update();
        dom::listen(&area, &["input"], move |_| update());
    }
}

// ========================
// Init
// ========================

pub fn init_forms() {
    let slot: SubmitSlot = Rc::default();

    for form in dom::cast_all::<HtmlFormElement>(dom::query_all("form")) {
        dom::bind_all(Scope::Subtree(&form), FIELD_SELECTOR, &["input", "blur"], |field| {
            let field = field.clone();
            move |_| validate_field(&field)
        });
        dom::bind_all(Scope::Subtree(&form), FIELD_SELECTOR, &["focus"], |field| {
            let field = field.clone();
            move |_| {
                let _ = field.class_list().remove_2("is-valid", "is-invalid");
            }
        });

        // The comment form runs its own busy state around the AJAX call
        if form.id() == COMMENT_FORM_ID {
            continue;
        }
        let target = form.clone();
        let slot = Rc::clone(&slot);
        dom::listen(&target, &["submit"], move |_| on_form_submit(&form, &slot));
    }

    // Leaving the page is the normal end of a plain submit
    dom::listen_window(&["pagehide"], move |_| {
        slot.borrow_mut().take();
    });

    init_character_counters();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_empty() {
        assert_eq!(validate("   ", FieldKind::Other, true), Validation::Invalid("Este campo é obrigatório"));
        assert_eq!(validate("", FieldKind::Email, false), Validation::Empty);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate("ana@site.com", FieldKind::Email, true), Validation::Valid);
        assert_eq!(validate(" ana@site.com ", FieldKind::Email, false), Validation::Valid);
        assert_eq!(validate("ana@site", FieldKind::Email, false), Validation::Invalid("Email inválido"));
        assert_eq!(validate("ana site@x.com", FieldKind::Email, false), Validation::Invalid("Email inválido"));
        assert_eq!(validate("a@@b.c", FieldKind::Email, false), Validation::Invalid("Email inválido"));
    }

    #[test]
    fn test_password_length() {
        assert_eq!(
            validate("12345", FieldKind::Password, true),
            Validation::Invalid("Senha deve ter pelo menos 6 caracteres")
        );
        assert_eq!(validate("123456", FieldKind::Password, true), Validation::Valid);
        assert_eq!(validate("çãõéíú", FieldKind::Password, true), Validation::Valid);
    }

    #[test]
    fn test_email_rule_only_applies_to_email_fields() {
        assert_eq!(validate("not an email", FieldKind::Other, true), Validation::Valid);
    }

    #[test]
    fn test_field_kind_from_type() {
        assert_eq!(FieldKind::from_type("email"), FieldKind::Email);
        assert_eq!(FieldKind::from_type("password"), FieldKind::Password);
        assert_eq!(FieldKind::from_type("text"), FieldKind::Other);
    }

    #[test]
    fn test_counter_markup() {
        assert_eq!(counter_markup(10, 500), r#"<span class="text-muted">10/500 caracteres</span>"#);
        assert_eq!(counter_markup(460, 500), r#"<span class="text-warning">460/500 caracteres</span>"#);
        assert_eq!(counter_markup(450, 500), r#"<span class="text-muted">450/500 caracteres</span>"#);
    }
}
