//! Taskboard Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod dom;
mod error;
mod events;
mod format;
mod models;
mod pages;
mod router;
mod search;
mod services;
mod shortcuts;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let cfg = config::init();
    if let Some(level) = cfg.log_level() {
        _ = console_log::init_with_level(level);
    }
    log::info!("taskboard ui starting, api at {}", cfg.api_root);
    mount_to_body(App);
}
