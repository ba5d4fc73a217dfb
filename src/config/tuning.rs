use super::edge::PreprocessConfig;
use crate::tuning::{Adjustment, TuningState};
use serde::Deserialize;
use std::path::PathBuf;

/// Config for the `canny_tune` tool: a scripted sequence of adjustments.
#[derive(Debug, Deserialize)]
pub struct TuningToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    /// Starting parameters and threshold step.
    #[serde(default)]
    pub initial: TuningState,
    /// Applied in order; the pipeline re-runs after each one.
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
    pub output: TuningOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct TuningOutputConfig {
    /// Directory receiving `step_XXX.png` edge maps.
    pub dir: PathBuf,
    /// Optional JSON trace of the parameters used at every step.
    #[serde(default)]
    pub trace_json: Option<PathBuf>,
}
