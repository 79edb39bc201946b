//! Guarda Coisas Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod stats;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(config::log_level());
    log::info!("[APP] Starting");
    mount_to_body(App);
}
