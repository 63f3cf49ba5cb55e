// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use llm_catalog::{config::state::AppState, gui, log};

fn main() {
    let state = AppState::from_env();
    log::init(&state.options.log_level, log::Sink::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("LLM Catalog")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(state, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
