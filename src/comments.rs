//! Comment Form
//!
//! `#commentForm` posts over AJAX; the created comment is prepended to
//! `#commentsList` without a reload.

use leptos::task::spawn_local;
use percent_encoding::utf8_percent_encode;
use scroll_reveal::parse_int;
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement};

use crate::animations;
use crate::api::{self, PATH_SEGMENT};
use crate::config::{COMMENT_BUSY_LABEL, MSG_COMMENT_ADDED, MSG_COMMENT_REJECTED, MSG_CONNECTION_ERROR, UPLOADS_PREFIX};
use crate::context::PageContext;
use crate::dom;
use crate::error::{UiError, UiResult};
use crate::models::{Comment, Severity};
use crate::optimistic::{BusyControl, BusyGuard};
use crate::text::escape_html;

pub const COMMENT_FORM_ID: &str = "commentForm";
const COMMENTS_LIST_ID: &str = "commentsList";
const COMMENT_COUNT_SELECTOR: &str = ".comments-count, .comment-count";

/// The parts of a button a busy state touches
pub trait ButtonView {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

impl ButtonView for HtmlButtonElement {
    fn label(&self) -> String {
        self.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.set_inner_html(label);
    }

    fn set_disabled(&self, disabled: bool) {
        HtmlButtonElement::set_disabled(self, disabled);
    }
}

/// Submit button showing a busy label while a request runs
pub struct SubmitButton<B: ButtonView = HtmlButtonElement> {
    button: B,
    original: String,
    busy_label: &'static str,
}

impl<B: ButtonView> SubmitButton<B> {
    pub fn new(button: B, busy_label: &'static str) -> Self {
        let original = button.label();
        Self { button, original, busy_label }
    }
}

impl SubmitButton {
    /// `button[type="submit"]` inside `form`
    pub fn find(form: &HtmlFormElement, busy_label: &'static str) -> Option<Self> {
        form.query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            .map(|button| Self::new(button, busy_label))
    }
}

impl<B: ButtonView> BusyControl for SubmitButton<B> {
    fn enter_busy(&self) {
        self.button.set_disabled(true);
        self.button.set_label(self.busy_label);
    }

    fn leave_busy(&self) {
        self.button.set_disabled(false);
        self.button.set_label(&self.original);
    }
}

/// Markup for one freshly created comment. Server text is escaped.
pub fn render_comment_html(comment: &Comment) -> String {
    let name = escape_html(&comment.user_name);
    let avatar = match comment.user_image.as_deref().filter(|img| !img.is_empty()) {
        Some(image) => format!(
            r#"<img src="{}{}" class="rounded-circle me-3" width="50" height="50" alt="{}">"#,
            UPLOADS_PREFIX,
            utf8_percent_encode(image, PATH_SEGMENT),
            name
        ),
        None => r#"<div class="avatar-placeholder me-3"><i class="fas fa-user-circle fa-2x text-muted"></i></div>"#
            .to_string(),
    };

    format!(
        r#"<div class="comment-item mb-4 new-comment" data-aos="fade-up">
    <div class="d-flex">
        {avatar}
        <div class="flex-grow-1">
            <div class="comment-content bg-dark-light p-3 rounded">
                <div class="d-flex justify-content-between align-items-center mb-2">
                    <h6 class="fw-bold mb-0">{name}</h6>
                    <small class="text-muted">{created_at}</small>
                </div>
                <p class="mb-0">{content}</p>
            </div>
        </div>
    </div>
</div>"#,
        avatar = avatar,
        name = name,
        created_at = escape_html(&comment.created_at),
        content = escape_html(&comment.content),
    )
}

/// Counter text after adding `delta`; unreadable counts start from 0
pub fn bump_count(text: &str, delta: i64) -> String {
    parse_int(text).unwrap_or(0).saturating_add(delta).to_string()
}

pub fn init_comment_form(ctx: &PageContext) {
    let Some(form) = dom::by_id(COMMENT_FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return;
    };

    let ctx = ctx.clone();
    let target = form.clone();
    dom::listen(&target, &["submit"], move |ev| {
        ev.prevent_default();
        submit(form.clone(), ctx.clone());
    });
}

/// Where a created comment shows up
pub trait CommentPage {
    /// Put rendered markup at the top of the list
    fn prepend(&self, html: &str);
    fn clear_form(&self);
    fn bump_counts(&self, delta: i64);
}

/// Apply a submit outcome to the page; returns the toast to show
pub fn settle_submit<P: CommentPage>(page: &P, outcome: UiResult<Comment>) -> (&'static str, Severity) {
    match outcome {
        Ok(comment) => {
            page.prepend(&render_comment_html(&comment));
            page.clear_form();
            page.bump_counts(1);
            (MSG_COMMENT_ADDED, Severity::Success)
        }
        Err(UiError::Rejected(errors)) => {
            log::warn!("comment rejected: {}", errors);
            (MSG_COMMENT_REJECTED, Severity::Error)
        }
        Err(err) => {
            log::error!("posting comment: {}", err);
            (MSG_CONNECTION_ERROR, Severity::Error)
        }
    }
}

struct DomCommentPage {
    form: HtmlFormElement,
    ctx: PageContext,
}

impl CommentPage for DomCommentPage {
    fn prepend(&self, html: &str) {
        let Some(list) = dom::by_id(COMMENTS_LIST_ID) else {
            log::warn!("{}", UiError::MissingElement("#commentsList"));
            return;
        };
        if let Err(err) = list.insert_adjacent_html("afterbegin", html) {
            log::error!("inserting comment: {:?}", err);
            return;
        }
        if let Some(inserted) = list.first_element_child() {
            enhance_inserted(&inserted, &self.ctx);
        }
    }

    fn clear_form(&self) {
        self.form.reset();
    }

    fn bump_counts(&self, delta: i64) {
        for el in dom::query_all(COMMENT_COUNT_SELECTOR) {
            let next = bump_count(&el.text_content().unwrap_or_default(), delta);
            el.set_text_content(Some(&next));
        }
    }
}

fn submit(form: HtmlFormElement, ctx: PageContext) {
    let data = match FormData::new_with_form(&form) {
        Ok(data) => data,
        Err(err) => {
            log::error!("reading comment form: {:?}", err);
            return;
        }
    };
    let action = form.action();
    let busy = SubmitButton::find(&form, COMMENT_BUSY_LABEL).map(BusyGuard::new);

    spawn_local(async move {
        // Released when this task ends, whatever the outcome
        let _busy = busy;

        let outcome = api::submit_comment(&action, data).await;
        let notifier = ctx.notifier;
        let (message, severity) = settle_submit(&DomCommentPage { form, ctx }, outcome);
        notifier.show(message, severity);
    });
}

/// Give markup added after load the same treatment as the initial page
fn enhance_inserted(root: &Element, ctx: &PageContext) {
    if let Some(observer) = &ctx.reveal {
        animations::observe_subtree(observer, root);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    fn comment(image: Option<&str>) -> Comment {
        Comment {
            user_name: "Ana <Dev>".to_string(),
            user_image: image.map(str::to_string),
            content: "<script>alert(1)</script>".to_string(),
            created_at: "02/03/2024 10:00".to_string(),
        }
    }

    #[test]
    fn test_render_escapes_server_text() {
        let html = render_comment_html(&comment(None));
        assert!(html.contains("Ana &lt;Dev&gt;"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_placeholder_without_image() {
        let html = render_comment_html(&comment(None));
        assert!(html.contains("avatar-placeholder"));
        assert!(!html.contains("<img"));

        let html = render_comment_html(&comment(Some("")));
        assert!(html.contains("avatar-placeholder"));
    }

    #[test]
    fn test_render_avatar_path() {
        let html = render_comment_html(&comment(Some("ana photo.png")));
        assert!(html.contains(r#"src="/uploads/ana%20photo.png""#));
        assert!(html.contains(r#"alt="Ana &lt;Dev&gt;""#));
    }

    #[test]
    fn test_render_is_single_entry() {
        let html = render_comment_html(&comment(None));
        assert_eq!(html.matches("comment-item").count(), 1);
        assert!(html.starts_with("<div"));
    }

    #[test]
    fn test_bump_count() {
        assert_eq!(bump_count("4", 1), "5");
        assert_eq!(bump_count("", 1), "1");
        assert_eq!(bump_count("12 comentários", 1), "13");
    }

    #[test]
    fn test_bump_count_saturates() {
        assert_eq!(bump_count("9223372036854775807", 1), i64::MAX.to_string());
    }

    struct FakeButton {
        label: RefCell<String>,
        disabled: Cell<bool>,
        label_changes: Cell<u32>,
    }

    impl FakeButton {
        fn new(label: &str) -> Self {
            Self {
                label: RefCell::new(label.to_string()),
                disabled: Cell::new(false),
                label_changes: Cell::new(0),
            }
        }
    }

    impl ButtonView for &FakeButton {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }
        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = label.to_string();
            self.label_changes.set(self.label_changes.get() + 1);
        }
        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
        }
    }

    #[derive(Default)]
    struct FakePage {
        entries: RefCell<Vec<String>>,
        field: RefCell<String>,
        count: Cell<i64>,
    }

    impl CommentPage for FakePage {
        fn prepend(&self, html: &str) {
            self.entries.borrow_mut().insert(0, html.to_string());
        }
        fn clear_form(&self) {
            self.field.borrow_mut().clear();
        }
        fn bump_counts(&self, delta: i64) {
            self.count.set(self.count.get() + delta);
        }
    }

    fn page_with_one_comment() -> FakePage {
        let page = FakePage::default();
        page.entries.borrow_mut().push("<div>old</div>".to_string());
        *page.field.borrow_mut() = "Muito bom!".to_string();
        page.count.set(1);
        page
    }

    /// Runs one submit the way the form does: busy for the whole request
    fn run_submit(button: &FakeButton, page: &FakePage, outcome: UiResult<Comment>) -> (&'static str, Severity) {
        let _busy = BusyGuard::new(SubmitButton::new(button, COMMENT_BUSY_LABEL));
        assert!(button.disabled.get());
        assert_eq!(*button.label.borrow(), COMMENT_BUSY_LABEL);
        settle_submit(page, outcome)
    }

    #[test]
    fn test_submit_success_prepends_one_entry_and_clears_form() {
        let button = FakeButton::new("Comentar");
        let page = page_with_one_comment();

        let toast = run_submit(&button, &page, Ok(comment(None)));

        assert_eq!(toast, (MSG_COMMENT_ADDED, Severity::Success));
        let entries = page.entries.borrow();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].contains("Ana &lt;Dev&gt;"));
        assert_eq!(entries[1], "<div>old</div>");
        assert!(page.field.borrow().is_empty());
        assert_eq!(page.count.get(), 2);

        assert!(!button.disabled.get());
        assert_eq!(*button.label.borrow(), "Comentar");
        assert_eq!(button.label_changes.get(), 2);
    }

    #[test]
    fn test_submit_rejected_leaves_page_alone() {
        let button = FakeButton::new("Comentar");
        let page = page_with_one_comment();

        let toast = run_submit(&button, &page, Err(UiError::Rejected("content".into())));

        assert_eq!(toast, (MSG_COMMENT_REJECTED, Severity::Error));
        assert_eq!(page.entries.borrow().len(), 1);
        assert_eq!(*page.field.borrow(), "Muito bom!");
        assert_eq!(page.count.get(), 1);
        assert!(!button.disabled.get());
        assert_eq!(*button.label.borrow(), "Comentar");
        assert_eq!(button.label_changes.get(), 2);
    }

    #[test]
    fn test_submit_network_error_shows_connection_toast() {
        let button = FakeButton::new("Comentar");
        let page = page_with_one_comment();

        let toast = run_submit(&button, &page, Err(UiError::Network("offline".into())));

        assert_eq!(toast, (MSG_CONNECTION_ERROR, Severity::Error));
        assert_eq!(page.entries.borrow().len(), 1);
        assert!(!button.disabled.get());
        assert_eq!(*button.label.borrow(), "Comentar");
    }
}
