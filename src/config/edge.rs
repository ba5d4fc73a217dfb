use crate::detector::CannyParams;
use crate::image::filters::{gaussian_blur_u8, GAUSSIAN_5TAP};
use crate::image::{GrayImageU8, ImageU8};
use serde::Deserialize;
use std::path::PathBuf;

/// Config for the `detect_edges` tool.
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    #[serde(default)]
    pub canny: CannyParams,
    pub output: EdgeOutputConfig,
}

/// Smoothing applied before the edge stages.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Number of 5-tap Gaussian passes. `0` feeds the decoded image as is.
    pub blur_passes: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { blur_passes: 1 }
    }
}

impl PreprocessConfig {
    pub fn apply(&self, gray: ImageU8<'_>) -> GrayImageU8 {
        gaussian_blur_u8(&gray, &GAUSSIAN_5TAP, self.blur_passes)
    }
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Final edge map (0 / 100 / 255).
    pub edge_map: PathBuf,
    /// Optional double-threshold map before promotion.
    #[serde(default)]
    pub threshold_preview: Option<PathBuf>,
    /// Optional JSON with counts, parameters and timings.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}
