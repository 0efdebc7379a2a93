//! morfo viewer
//!
//! Loads the coin photograph, runs the morphology pipeline and shows every
//! stage in a 3x3 gallery window.

mod app;
mod layout;

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use app::GalleryApp;
use morfo_algorithms::pipeline::{run_pipeline, PipelineParams};
use morfo_core::io::read_color_image;
use morfo_core::ColorImage;

/// Input photograph, relative to the working directory
const IMAGE_PATH: &str = "./resimler/coins.jpg";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let image = load_image(IMAGE_PATH, &spinner("Reading image..."))?;
    let (rows, cols) = image.shape();
    info!(path = IMAGE_PATH, rows, cols, "image loaded");

    let pb = spinner("Running morphology pipeline...");
    let output = run_pipeline(&image, &PipelineParams::default());
    pb.finish_and_clear();
    let output = output.context("pipeline failed")?;
    info!(threshold = output.threshold, "pipeline finished");

    let gallery = output.into_gallery().context("failed to build gallery")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("morfo: Morphological Edge Detection")
            .with_inner_size([1200.0, 1000.0])
            .with_min_inner_size([600.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "morfo",
        native_options,
        Box::new(move |_cc| Ok(Box::new(GalleryApp::new(gallery)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}

/// Decode the input photograph, clearing `pb` whether or not it succeeds
fn load_image(path: &str, pb: &ProgressBar) -> Result<ColorImage> {
    let image = read_color_image(path);
    pb.finish_and_clear();
    image.with_context(|| format!("could not load image, is the path correct? {path}"))
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
