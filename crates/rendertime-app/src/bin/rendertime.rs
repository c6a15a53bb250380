//! Render time calculator desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop application.

use rendertime_app::{RenderTimeApp, version};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.rendertime";
    const APP_NAME: &str = "Render Time Calculator";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting {APP_NAME}, version={}",
        version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_title(version::window_title())
            .with_resizable(true)
            .with_inner_size((560.0, 260.0))
            .with_min_inner_size((500.0, 200.0)),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(RenderTimeApp::new(cc)))),
    )
}
