//! Todo Widget Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod logger;
mod models;
mod storage;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
