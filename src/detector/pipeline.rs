use super::params::CannyParams;
use crate::diagnostics::{CannyReport, EdgeMapSummary, TimingBreakdown};
use crate::edges::{estimate_gradients, suppress_non_maxima, EdgeMap};
use crate::error::Result;
use crate::image::ImageU8;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Gradient → non-maximum suppression → hysteresis, over one grayscale image.
///
/// The pipeline holds only parameters. Every call allocates its own
/// buffers, so a shared `&CannyPipeline` can serve concurrent callers.
#[derive(Clone, Debug, Default)]
pub struct CannyPipeline {
    params: CannyParams,
}

impl CannyPipeline {
    /// Create a pipeline with the supplied parameters.
    pub fn new(params: CannyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Replace the parameters used by subsequent runs.
    pub fn set_params(&mut self, params: CannyParams) {
        self.params = params;
    }

    /// Run all three stages and return the final edge map.
    pub fn run(&self, gray: ImageU8<'_>) -> Result<EdgeMap> {
        self.params.validate()?;
        let field = estimate_gradients(&gray);
        let mut magnitude = field.magnitude;
        suppress_non_maxima(&mut magnitude, &field.angle)?;
        self.params.classifier().classify(&magnitude)
    }

    /// Run the pipeline and return the edge map together with the
    /// pre-promotion threshold map, counts and stage timings.
    pub fn process(&self, gray: ImageU8<'_>) -> Result<CannyReport> {
        self.params.validate()?;
        let (width, height) = (gray.w, gray.h);
        debug!(
            "CannyPipeline::process start w={} h={} low={} high={} window={}",
            width,
            height,
            self.params.low_threshold,
            self.params.high_threshold,
            self.params.edge_tracking_window
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let field = timing.time("gradient", || estimate_gradients(&gray));
        let mut magnitude = field.magnitude;
        timing.time("non_max_suppression", || {
            suppress_non_maxima(&mut magnitude, &field.angle)
        })?;

        let classifier = self.params.classifier();
        let threshold_preview = classifier.threshold_preview(&magnitude)?;
        let edges = timing.time("hysteresis", || classifier.classify(&magnitude))?;

        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        let summary = EdgeMapSummary::new(&self.params, &threshold_preview, &edges);
        debug!(
            "CannyPipeline::process done strong={} weak={} promoted={} total_ms={:.3}",
            summary.counts.strong, summary.counts.weak, summary.promoted_count, timing.total_ms
        );

        Ok(CannyReport {
            edges,
            threshold_preview,
            summary,
            timing,
        })
    }

    /// Run the pipeline over many images. Each image gets its own buffers;
    /// with the `parallel` feature the runs are spread over the rayon pool.
    pub fn run_batch(&self, images: &[ImageU8<'_>]) -> Vec<Result<EdgeMap>> {
        #[cfg(feature = "parallel")]
        {
            images.par_iter().map(|img| self.run(img.clone())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            images.iter().map(|img| self.run(img.clone())).collect()
        }
    }
}
