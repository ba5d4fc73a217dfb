//! Pipeline orchestration.
//!
//! - [`params`]: thresholds and tracking window, loadable from JSON.
//! - `pipeline`: [`CannyPipeline`], which runs gradient estimation,
//!   non-maximum suppression and hysteresis in sequence on fresh buffers.
//!
//! Nothing persists between runs. Callers that want to tune parameters
//! interactively re-run the pipeline with new [`CannyParams`] (see
//! [`crate::tuning`]).

pub mod params;
mod pipeline;

pub use params::CannyParams;
pub use pipeline::CannyPipeline;
