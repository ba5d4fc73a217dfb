use canny_edges::config::{load_config, EdgeToolConfig};
use canny_edges::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use canny_edges::{CannyPipeline, EdgeMapSummary, TimingBreakdown};
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: EdgeToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let smoothed = config.preprocess.apply(gray.as_view());

    let pipeline = CannyPipeline::new(config.canny);
    let report = pipeline
        .process(smoothed.as_view())
        .map_err(|e| format!("Edge detection failed on {}: {e}", config.input.display()))?;

    save_grayscale_u8(report.edges.as_image(), &config.output.edge_map)?;
    println!(
        "Saved edge map to {} (strong={}, weak={})",
        config.output.edge_map.display(),
        report.summary.counts.strong,
        report.summary.counts.weak
    );

    if let Some(path) = &config.output.threshold_preview {
        save_grayscale_u8(report.threshold_preview.as_image(), path)?;
        println!("Saved threshold preview to {}", path.display());
    }

    if let Some(path) = &config.output.summary_json {
        let summary = EdgeRunSummary {
            input: config.input.display().to_string(),
            blur_passes: config.preprocess.blur_passes,
            summary: &report.summary,
            timing: &report.timing,
        };
        write_json_file(path, &summary)?;
        println!("Saved summary to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_edges <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeRunSummary<'a> {
    input: String,
    blur_passes: usize,
    summary: &'a EdgeMapSummary,
    timing: &'a TimingBreakdown,
}
