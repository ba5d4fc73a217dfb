//! Caller-side parameter tuning.
//!
//! Replaces an interactive keyboard loop: each [`Adjustment`] nudges the
//! current [`CannyParams`] with the same clamping the interactive tool used,
//! and the caller re-runs the pipeline afterwards. The pipeline itself keeps
//! no state between runs.

use crate::detector::CannyParams;
use serde::{Deserialize, Serialize};

/// Largest threshold step an adjustment may use.
pub const MAX_CHANGE_VALUE: i32 = 10;
/// Smallest threshold step.
pub const MIN_CHANGE_VALUE: i32 = 1;
/// Largest tracking window reachable through adjustments.
pub const MAX_TRACKING_WINDOW: i32 = 127;
/// Upper bound for the high threshold.
pub const MAX_THRESHOLD: f32 = 255.0;

/// One parameter nudge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    RaiseHigh,
    LowerHigh,
    RaiseLow,
    LowerLow,
    IncreaseStep,
    DecreaseStep,
    WidenWindow,
    NarrowWindow,
}

/// Parameters plus the current threshold step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningState {
    pub params: CannyParams,
    pub change_value: i32,
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            params: CannyParams::default(),
            change_value: 10,
        }
    }
}

impl TuningState {
    pub fn new(params: CannyParams, change_value: i32) -> Self {
        Self {
            params,
            change_value: change_value.clamp(MIN_CHANGE_VALUE, MAX_CHANGE_VALUE),
        }
    }

    /// Apply `adj` in place and return the resulting parameters.
    pub fn apply(&mut self, adj: Adjustment) -> CannyParams {
        let step = self.change_value as f32;
        let p = &mut self.params;
        match adj {
            Adjustment::RaiseHigh => {
                p.high_threshold = (p.high_threshold + step).min(MAX_THRESHOLD);
            }
            Adjustment::LowerHigh => {
                p.high_threshold = (p.high_threshold - step).max(p.low_threshold + 1.0);
            }
            Adjustment::RaiseLow => {
                p.low_threshold = (p.low_threshold + step).min(p.high_threshold - 1.0);
            }
            Adjustment::LowerLow => {
                p.low_threshold = (p.low_threshold - step).max(0.0);
            }
            Adjustment::IncreaseStep => {
                self.change_value = (self.change_value + 1).min(MAX_CHANGE_VALUE);
            }
            Adjustment::DecreaseStep => {
                self.change_value = (self.change_value - 1).max(MIN_CHANGE_VALUE);
            }
            Adjustment::WidenWindow => {
                p.edge_tracking_window = (p.edge_tracking_window + 2).min(MAX_TRACKING_WINDOW);
            }
            Adjustment::NarrowWindow => {
                p.edge_tracking_window = (p.edge_tracking_window - 2).max(1);
            }
        }
        log::debug!(
            "{adj:?}: low={} high={} step={} window={}",
            self.params.low_threshold,
            self.params.high_threshold,
            self.change_value,
            self.params.edge_tracking_window
        );
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_threshold_is_capped_and_kept_above_low() {
        let mut state = TuningState::new(CannyParams::new(30.0, 250.0, 3), 10);
        assert_eq!(state.apply(Adjustment::RaiseHigh).high_threshold, 255.0);

        let mut state = TuningState::new(CannyParams::new(30.0, 35.0, 3), 10);
        assert_eq!(state.apply(Adjustment::LowerHigh).high_threshold, 31.0);
    }

    #[test]
    fn low_threshold_stays_between_zero_and_high() {
        let mut state = TuningState::new(CannyParams::new(5.0, 70.0, 3), 10);
        assert_eq!(state.apply(Adjustment::LowerLow).low_threshold, 0.0);

        let mut state = TuningState::new(CannyParams::new(65.0, 70.0, 3), 10);
        assert_eq!(state.apply(Adjustment::RaiseLow).low_threshold, 69.0);
    }

    #[test]
    fn step_is_bounded() {
        let mut state = TuningState::default();
        state.apply(Adjustment::IncreaseStep);
        assert_eq!(state.change_value, 10);
        for _ in 0..20 {
            state.apply(Adjustment::DecreaseStep);
        }
        assert_eq!(state.change_value, 1);
        state.apply(Adjustment::RaiseHigh);
        assert_eq!(state.params.high_threshold, 71.0);
    }

    #[test]
    fn window_moves_in_odd_steps_within_bounds() {
        let mut state = TuningState::default();
        assert_eq!(state.apply(Adjustment::WidenWindow).edge_tracking_window, 5);
        assert_eq!(state.apply(Adjustment::NarrowWindow).edge_tracking_window, 3);
        assert_eq!(state.apply(Adjustment::NarrowWindow).edge_tracking_window, 1);
        assert_eq!(state.apply(Adjustment::NarrowWindow).edge_tracking_window, 1);

        let mut state = TuningState::new(CannyParams::new(30.0, 70.0, 125), 10);
        assert_eq!(state.apply(Adjustment::WidenWindow).edge_tracking_window, 127);
        assert_eq!(state.apply(Adjustment::WidenWindow).edge_tracking_window, 127);
    }

    #[test]
    fn adjustments_parse_from_snake_case() {
        let adj: Vec<Adjustment> =
            serde_json::from_str(r#"["raise_high", "narrow_window", "decrease_step"]"#).unwrap();
        assert_eq!(
            adj,
            [
                Adjustment::RaiseHigh,
                Adjustment::NarrowWindow,
                Adjustment::DecreaseStep
            ]
        );
    }
}
