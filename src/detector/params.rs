//! Parameters for one pipeline run.
//!
//! Thresholds are compared against the clamped 8-bit gradient magnitude, so
//! the useful range is `[0, 255]`.

use crate::edges::hysteresis::{is_valid_window, HysteresisClassifier};
use crate::error::{CannyError, Result};
use serde::{Deserialize, Serialize};

/// Thresholds and tracking window for [`CannyPipeline`](super::CannyPipeline).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Magnitudes at or above this are weak edge candidates.
    pub low_threshold: f32,
    /// Magnitudes at or above this seed edge tracking.
    pub high_threshold: f32,
    /// Side length of the square tracking window. Positive odd values are
    /// used as given; anything else falls back to 3 unless `strict_window`.
    pub edge_tracking_window: i32,
    /// Reject windows that would otherwise fall back silently.
    pub strict_window: bool,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 30.0,
            high_threshold: 70.0,
            edge_tracking_window: 3,
            strict_window: false,
        }
    }
}

impl CannyParams {
    pub fn new(low_threshold: f32, high_threshold: f32, edge_tracking_window: i32) -> Self {
        Self {
            low_threshold,
            high_threshold,
            edge_tracking_window,
            ..Self::default()
        }
    }

    pub fn with_strict_window(mut self, strict: bool) -> Self {
        self.strict_window = strict;
        self
    }

    /// The hysteresis stage configured from these parameters.
    pub fn classifier(&self) -> HysteresisClassifier {
        HysteresisClassifier::new(
            self.low_threshold,
            self.high_threshold,
            self.edge_tracking_window,
        )
    }

    /// Check threshold ordering, finiteness and (optionally) the window.
    pub fn validate(&self) -> Result<()> {
        self.classifier().validate()?;
        if self.low_threshold < 0.0 {
            return Err(CannyError::InvalidConfiguration(format!(
                "low threshold {} is negative",
                self.low_threshold
            )));
        }
        if self.strict_window && !is_valid_window(self.edge_tracking_window) {
            return Err(CannyError::InvalidConfiguration(format!(
                "edge tracking window {} must be a positive odd integer",
                self.edge_tracking_window
            )));
        }
        if self.low_threshold > 255.0 {
            log::warn!(
                "low threshold {} is above the largest magnitude, the edge map will be empty",
                self.low_threshold
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_interactive_tool() {
        let p = CannyParams::default();
        assert_eq!(p.low_threshold, 30.0);
        assert_eq!(p.high_threshold, 70.0);
        assert_eq!(p.edge_tracking_window, 3);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn strict_window_rejects_fallback_sizes() {
        for window in [0, 2, -5] {
            let lenient = CannyParams::new(10.0, 20.0, window);
            assert!(lenient.validate().is_ok());
            assert!(lenient.with_strict_window(true).validate().is_err());
        }
        assert!(CannyParams::new(10.0, 20.0, 5)
            .with_strict_window(true)
            .validate()
            .is_ok());
    }

    #[test]
    fn negative_low_is_rejected() {
        assert!(CannyParams::new(-1.0, 20.0, 3).validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let p: CannyParams = serde_json::from_str(r#"{"high_threshold": 120}"#).unwrap();
        assert_eq!(p.high_threshold, 120.0);
        assert_eq!(p.low_threshold, 30.0);
        assert!(!p.strict_window);
    }
}
