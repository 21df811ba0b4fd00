//! Order Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod error;
mod forms;
mod logging;
mod models;
mod overlay;
mod store;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = BoardConfig::load();
    log::set_max_level(config.level());

    mount_to_body(move || view! { <App config=config /> });
}
