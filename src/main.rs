//! Realtime Items Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logger;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use realtime_items_core::database::Backend;
use realtime_items_core::{DatabaseConfig, ItemService, MemoryDatabase};

fn main() {
    console_error_panic_hook::set_once();
    logger::init(if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });

    let config = DatabaseConfig::from_build_env();
    let backend = Backend::from_config(&config).unwrap_or_else(|e| {
        log::error!("Falling back to an in-memory store: {}", e);
        Backend::Memory(MemoryDatabase::new())
    });
    let service = ItemService::new(backend, config.collection_ref());

    mount_to_body(move || view! { <App service=service /> });
}
