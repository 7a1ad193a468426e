//! Simple Note Desktop Application
//!
//! A single window with the note form and the active/deleted note list.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod state;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use notes_core::config::ClientConfig;
use notes_core::HttpNoteStore;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Simple Note...");

    let config = ClientConfig::resolve(None).unwrap_or_else(|error| {
        tracing::error!("Ignoring invalid client configuration: {}", error);
        ClientConfig::default()
    });
    let store = match HttpNoteStore::new(config.api_base_url.clone()) {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("Failed to build notes API client: {}", error);
            std::process::exit(1);
        }
    };
    tracing::info!("Using notes API at {} ({})", store.base_url(), config.source);

    let window = WindowBuilder::new()
        .with_title("Notes App")
        .with_inner_size(LogicalSize::new(900.0, 760.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .with_context(store)
        .launch(app::App);
}
