//! Edge stages: gradients, non-maximum suppression and hysteresis tracking.
//!
//! The stages are plain functions over owned buffers and run strictly in
//! order:
//!
//! - [`estimate_gradients`]: clamped Sobel magnitude plus a folded angle in
//!   degrees for every interior pixel.
//! - [`suppress_non_maxima`]: zeroes magnitudes that are not a local maximum
//!   along their orientation bucket, in place.
//! - [`HysteresisClassifier`]: double threshold followed by window-connected
//!   promotion of weak pixels, rendered as an [`EdgeMap`].
//!
//! Border pixels are never written by any stage and always read as
//! [`EdgeState::None`] in the final map.

pub mod edge_map;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use edge_map::{EdgeCounts, EdgeMap, EdgeState};
pub use grad::{estimate_gradients, AngleBuffer, GradientField, MagnitudeBuffer};
pub use hysteresis::{tracking_radius, HysteresisClassifier};
pub use nms::{suppress_non_maxima, OrientationBucket};
