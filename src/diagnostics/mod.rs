//! Diagnostics returned alongside the edge map: per-stage timings and a
//! serializable summary of the classification.

pub mod report;
pub mod timing;

pub use report::{CannyReport, EdgeMapSummary};
pub use timing::{StageTiming, TimingBreakdown};
