//! Portfolio Digital Page
//!
//! Wires every enhancement onto the server-rendered markup.

use std::rc::Rc;

use crate::context::PageContext;
use crate::notifier::Notifier;
use crate::preferences::{BrowserStorage, PreferenceService};
use crate::{animations, chrome, clipboard, comments, forms, likes, modals, search, theme};

/// Run all enhancements; called once the DOM is ready
pub fn start() {
    let notifier = Notifier::new();
    notifier.mount();

    theme::init_theme_toggle(Rc::new(PreferenceService::new(BrowserStorage)));
    chrome::init_back_to_top();
    chrome::init_navigation();
    let reveal = animations::init_animations();
    forms::init_forms();
    modals::init_modals();
    chrome::init_loading_screen();

    let ctx = PageContext::new(notifier, reveal);
    likes::init_like_buttons(&ctx);
    comments::init_comment_form(&ctx);
    search::init_search();
    animations::init_lazy_images();
    clipboard::init_clipboard(&ctx);
    chrome::init_page_lifecycle();

    log::info!("Portfolio Digital loaded successfully! 🚀");
}
