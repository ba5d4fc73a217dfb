use super::TimingBreakdown;
use crate::detector::CannyParams;
use crate::edges::{EdgeCounts, EdgeMap};
use serde::Serialize;

/// Result of [`CannyPipeline::process`](crate::CannyPipeline::process).
#[derive(Clone, Debug)]
pub struct CannyReport {
    /// Final edge map after hysteresis.
    pub edges: EdgeMap,
    /// Double-threshold map before promotion.
    pub threshold_preview: EdgeMap,
    pub summary: EdgeMapSummary,
    pub timing: TimingBreakdown,
}

/// Serializable description of one run, written next to the edge map by the tools.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMapSummary {
    pub width: usize,
    pub height: usize,
    pub params: CannyParams,
    /// Radius actually used for tracking, after the window fallback.
    pub tracking_radius: usize,
    /// Pixels that met the high threshold directly.
    pub seed_count: usize,
    /// Weak pixels promoted through connectivity.
    pub promoted_count: usize,
    pub counts: EdgeCounts,
}

impl EdgeMapSummary {
    pub fn new(params: &CannyParams, preview: &EdgeMap, edges: &EdgeMap) -> Self {
        let seeds = preview.counts().strong;
        let counts = edges.counts();
        Self {
            width: edges.width(),
            height: edges.height(),
            params: *params,
            tracking_radius: params.classifier().radius(),
            seed_count: seeds,
            promoted_count: counts.strong.saturating_sub(seeds),
            counts,
        }
    }
}
