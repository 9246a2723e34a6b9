//! Like Buttons
//!
//! `.like-btn[data-project-id]` with a `.likes-count` child. The click is
//! shown immediately, then replaced by the server's numbers or undone.

use leptos::task::spawn_local;
use scroll_reveal::parse_int;
use web_sys::Element;

use crate::api;
use crate::config::{LIKE_PULSE_MS, MSG_LIKE_FAILED};
use crate::context::PageContext;
use crate::dom::{self, Scope};
use crate::models::LikeState;
use crate::optimistic::{Pending, Settled};

/// Bind every like button on the page
pub fn init_like_buttons(ctx: &PageContext) {
    let bound = dom::bind_all(Scope::Document, ".like-btn", &["click"], |button| {
        let button = button.clone();
        let ctx = ctx.clone();
        move |_| on_like_click(&button, &ctx)
    });
    log::debug!("bound {} like buttons", bound);
}

/// Count text to a number; garbage or negatives count as 0
pub fn parse_count(text: &str) -> u32 {
    parse_int(text).and_then(|n| u32::try_from(n).ok()).unwrap_or(0)
}

fn read_state(button: &Element, count_el: &Element) -> LikeState {
    LikeState {
        liked: dom::has_class(button, "active"),
        count: parse_count(&count_el.text_content().unwrap_or_default()),
    }
}

fn render(button: &Element, count_el: &Element, state: LikeState) {
    dom::set_class(button, "active", state.liked);
    count_el.set_text_content(Some(&state.count.to_string()));
}

fn on_like_click(button: &Element, ctx: &PageContext) {
    let Some(project_id) = button.get_attribute("data-project-id") else {
        return;
    };
    let Some(count_el) = button.query_selector(".likes-count").ok().flatten() else {
        log::warn!("like button for project {} has no .likes-count", project_id);
        return;
    };
    let Some(ticket) = ctx.likes_in_flight.try_begin(project_id.clone()) else {
        log::debug!("like for project {} already pending, ignoring click", project_id);
        return;
    };

    let pending = Pending::begin(read_state(button, &count_el));
    render(button, &count_el, pending.shown);

    let button = button.clone();
    let notifier = ctx.notifier;
    spawn_local(async move {
        let _ticket = ticket;
        let outcome = api::toggle_like(&project_id).await;

        let settled = pending.settle(&outcome);
        render(&button, &count_el, settled.state());

        match settled {
            Settled::Confirmed(_) => {
                dom::flash_style(&button, "transform", "scale(1.2)", LIKE_PULSE_MS);
            }
            Settled::Reverted(_) => {
                if let Err(err) = &outcome {
                    log::error!("like for project {} failed: {}", project_id, err);
                }
                notifier.error(MSG_LIKE_FAILED);
            }
        }
    });
}
