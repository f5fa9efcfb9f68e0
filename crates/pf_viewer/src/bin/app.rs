use std::path::Path;

use eframe::egui;
use pf_content::Portfolio;
use pf_viewer::app::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

const CONTENT_PATH: &str = "./data/portfolio.json";

fn main() -> Result<(), eframe::Error> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting portfolio viewer");

    let portfolio = Portfolio::load_or_builtin(Path::new(CONTENT_PATH));
    let title = portfolio.metadata.title.clone();

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 860.0)),
        min_window_size: Some(egui::vec2(360.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Box::new(App::new(portfolio))
        }),
    )
}
