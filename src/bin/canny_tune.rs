use canny_edges::config::{load_config, TuningToolConfig};
use canny_edges::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use canny_edges::tuning::{Adjustment, TuningState};
use canny_edges::{CannyParams, CannyPipeline, EdgeCounts};
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
    let config: TuningToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let smoothed = config.preprocess.apply(gray.as_view());

    let mut state = TuningState::new(config.initial.params, config.initial.change_value);
    let mut pipeline = CannyPipeline::new(state.params);
    let mut trace = Vec::with_capacity(config.adjustments.len() + 1);

    // step 0 is the initial parameter set
    let steps = std::iter::once(None).chain(config.adjustments.iter().copied().map(Some));
    for (index, adjustment) in steps.enumerate() {
        if let Some(adj) = adjustment {
            pipeline.set_params(state.apply(adj));
        }
        let edges = pipeline
            .run(smoothed.as_view())
            .map_err(|e| format!("Step {index} failed: {e}"))?;

        let path = config.output.dir.join(format!("step_{index:03}.png"));
        save_grayscale_u8(edges.as_image(), &path)?;
        let counts = edges.counts();
        println!(
            "[{index:03}] {:<14} low={:>5.1} high={:>5.1} window={:>3} step={:>2} -> strong={} weak={}",
            adjustment.map_or("initial".to_string(), |a| format!("{a:?}")),
            state.params.low_threshold,
            state.params.high_threshold,
            state.params.edge_tracking_window,
            state.change_value,
            counts.strong,
            counts.weak
        );
        trace.push(TuningStep {
            index,
            adjustment,
            params: state.params,
            change_value: state.change_value,
            counts,
            edge_map: path.display().to_string(),
        });
    }

    if let Some(path) = &config.output.trace_json {
        write_json_file(path, &trace)?;
        println!("Saved tuning trace to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: canny_tune <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TuningStep {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    adjustment: Option<Adjustment>,
    params: CannyParams,
    change_value: i32,
    counts: EdgeCounts,
    edge_map: String,
}
