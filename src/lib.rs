#![doc = include_str!("../README.md")]

// Public modules
pub mod detector;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod tuning;

// Tool-layer configuration used by the binaries.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + parameters + result.
pub use crate::detector::{CannyParams, CannyPipeline};
pub use crate::edges::{EdgeCounts, EdgeMap, EdgeState};
pub use crate::error::{CannyError, Result};

// Diagnostics returned by `CannyPipeline::process`.
pub use crate::diagnostics::{CannyReport, EdgeMapSummary, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use canny_edges::prelude::*;
///
/// let (w, h) = (64usize, 48usize);
/// let gray: Vec<u8> = (0..w * h).map(|i| if i % w < w / 2 { 20 } else { 200 }).collect();
/// let img = ImageU8::new(w, h, &gray).unwrap();
///
/// let pipeline = CannyPipeline::new(CannyParams::new(30.0, 70.0, 3));
/// let edges = pipeline.run(img).unwrap();
/// assert!(edges.counts().strong > 0);
/// assert_eq!(edges.state(0, 0), EdgeState::None);
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8};
    pub use crate::{CannyParams, CannyPipeline, EdgeMap, EdgeState};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::edges::hysteresis::{is_valid_window, tracking_radius};
    pub use crate::edges::{
        estimate_gradients, suppress_non_maxima, AngleBuffer, GradientField,
        HysteresisClassifier, MagnitudeBuffer, OrientationBucket,
    };
}
