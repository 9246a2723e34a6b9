//! Theme Toggle
//!
//! Applies the stored theme on load and flips it on click.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::{THEME_TRANSITION_MS, TITLE_SWITCH_TO_DARK, TITLE_SWITCH_TO_LIGHT};
use crate::dom;
use crate::models::Theme;
use crate::preferences::{PreferenceService, PreferenceStorage};

/// Title shown on the toggle for the current theme
pub fn toggle_title(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => TITLE_SWITCH_TO_LIGHT,
        Theme::Light => TITLE_SWITCH_TO_DARK,
    }
}

/// Set `data-theme` on `<html>`
pub fn apply(theme: Theme) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

/// Wire `#theme-toggle` / `#theme-icon` to the preference service
pub fn init_theme_toggle<S: PreferenceStorage + 'static>(prefs: Rc<PreferenceService<S>>) {
    let (Some(toggle), Some(icon)) = (dom::by_id("theme-toggle"), dom::by_id("theme-icon")) else {
        log::debug!("theme toggle not on this page");
        return;
    };

    let update_icon = {
        let toggle = toggle.clone();
        move |theme: Theme| {
            icon.set_class_name(theme.toggle_icon());
            let _ = toggle.set_attribute("title", toggle_title(theme));
        }
    };

    let saved = prefs.get();
    apply(saved);
    update_icon(saved);

    // What is on screen wins over storage, which may be unavailable
    let current = Cell::new(saved);
    let button = toggle.clone();
    dom::listen(&toggle, &["click"], move |_| {
        let next = current.get().toggled();
        current.set(next);
        prefs.set(next);

        if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
            dom::flash_style(&root, "transition", "all 0.3s ease", THEME_TRANSITION_MS);
        }
        apply(next);
        update_icon(next);
        dom::flash_style(&button, "transform", "rotate(360deg)", THEME_TRANSITION_MS);

        log::debug!("theme switched to {}", next.as_str());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_title_describes_next_theme() {
        assert_eq!(toggle_title(Theme::Dark), "Modo claro");
        assert_eq!(toggle_title(Theme::Light), "Modo escuro");
    }
}
