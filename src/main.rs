//! Portfolio Digital Frontend Entry Point

mod animations;
mod api;
mod app;
mod chrome;
mod clipboard;
mod comments;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod forms;
mod likes;
mod modals;
mod models;
mod notifier;
mod optimistic;
mod preferences;
mod search;
mod store;
mod text;
mod theme;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }

    dom::on_ready(app::start);
}
