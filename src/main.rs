// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! MarkText - Main Entry Point
//!
//! A minimal markdown editor with a live preview and Word export. Built with Rust and egui.

mod app;
mod config;
mod editor;
mod error;
mod export;
mod fonts;
mod markdown;
mod state;
mod string_utils;
mod theme;
mod ui;

use app::MarkTextApp;
use config::{load_config, Settings};
use log::info;

/// Application name constant.
const APP_NAME: &str = "MarkText";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    // Loaded once; the app takes these settings for its session
    let settings = load_config();
    let window_size = &settings.window_size;

    info!(
        "Window configuration: {}x{}",
        window_size.width, window_size.height
    );

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([window_size.width, window_size.height])
        .with_min_inner_size([Settings::MIN_WINDOW_SIZE, 300.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(move |cc| Ok(Box::new(MarkTextApp::new(cc, settings)))),
    )
}
