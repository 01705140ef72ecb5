#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(unsafe_code)]
#![allow(clippy::undocumented_unsafe_blocks)]

mod config;
mod gfx;
mod viewer;

use config::{SceneConfig, WINDOW_HEIGHT, WINDOW_WIDTH};
use viewer::Viewer;

fn main() -> eframe::Result {
    // Log to stderr, `RUST_LOG=debug` for setup details
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let size = config::surface_size(WINDOW_WIDTH, WINDOW_HEIGHT);
    let scene = SceneConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([size, size])
            .with_resizable(false),
        depth_buffer: 24,

        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    eframe::run_native(
        "Rotating Plane",
        options,
        Box::new(move |cc| Ok(Box::new(Viewer::new(cc, &scene, size)?))),
    )
    .inspect_err(|e| log::error!("{e}"))
}
