//! Double-threshold classification with connectivity-based promotion.
//!
//! 1. Every interior pixel is tested against both thresholds independently,
//!    giving a `weak` plane (`mag >= low`) and a `strong` plane (`mag >= high`).
//!    The one-pixel frame is never weak or strong.
//! 2. Strong pixels seed a FIFO frontier in row-major order.
//! 3. Each popped pixel scans the `(2d+1)²` window around it; any weak,
//!    not-yet-strong neighbor becomes strong and joins the frontier. A pixel
//!    enters the frontier at most once, so the traversal order does not change
//!    the final strong set.
//! 4. Strong renders as 255, remaining weak as 100, everything else as 0.
//!
//! Worst case O(W·H·d²).
use super::edge_map::{EdgeMap, EdgeState};
use super::grad::MagnitudeBuffer;
use crate::error::{ensure_same_dims, CannyError, Result};
use crate::image::ImageView;
use std::collections::VecDeque;

/// Neighborhood radius for a tracking window.
///
/// Positive odd windows give `(window - 1) / 2`; anything else falls back to
/// a radius of 1 (a 3×3 window). `window = 1` therefore disables promotion.
#[inline]
pub fn tracking_radius(window: i32) -> usize {
    if window > 0 && window % 2 == 1 {
        ((window - 1) / 2) as usize
    } else {
        1
    }
}

/// `true` when `window` is used as given rather than falling back.
#[inline]
pub fn is_valid_window(window: i32) -> bool {
    window > 0 && window % 2 == 1
}

/// Hysteresis stage parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HysteresisClassifier {
    /// Magnitudes at or above this are weak edges.
    pub low: f32,
    /// Magnitudes at or above this are strong edges.
    pub high: f32,
    /// Tracking window side length; see [`tracking_radius`].
    pub window: i32,
}

/// Independent threshold planes, row-major, `true` for interior pixels only.
struct ThresholdPlanes {
    w: usize,
    h: usize,
    weak: Vec<bool>,
    strong: Vec<bool>,
}

impl ThresholdPlanes {
    fn build(magnitude: &MagnitudeBuffer, low: f32, high: f32) -> Self {
        let (w, h) = magnitude.dims();
        let mut weak = vec![false; w * h];
        let mut strong = vec![false; w * h];
        if w >= 3 && h >= 3 {
            for y in 1..h - 1 {
                let row = magnitude.row(y);
                for x in 1..w - 1 {
                    let m = row[x] as f32;
                    weak[y * w + x] = m >= low;
                    strong[y * w + x] = m >= high;
                }
            }
        }
        Self { w, h, weak, strong }
    }

    fn render_into(&self, out: &mut EdgeMap) {
        for y in 0..self.h {
            for x in 0..self.w {
                let i = y * self.w + x;
                let state = if self.strong[i] {
                    EdgeState::Strong
                } else if self.weak[i] {
                    EdgeState::Weak
                } else {
                    EdgeState::None
                };
                out.set_state(x, y, state);
            }
        }
    }
}

impl HysteresisClassifier {
    pub fn new(low: f32, high: f32, window: i32) -> Self {
        Self { low, high, window }
    }

    /// Reject thresholds that cannot produce a meaningful map.
    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(CannyError::InvalidConfiguration(format!(
                "thresholds must be finite (low={}, high={})",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(CannyError::InvalidConfiguration(format!(
                "low threshold {} exceeds high threshold {}",
                self.low, self.high
            )));
        }
        Ok(())
    }

    /// Effective neighborhood radius after the window fallback.
    pub fn radius(&self) -> usize {
        tracking_radius(self.window)
    }

    /// Classify `magnitude` into a fresh edge map.
    pub fn classify(&self, magnitude: &MagnitudeBuffer) -> Result<EdgeMap> {
        let (w, h) = magnitude.dims();
        let mut out = EdgeMap::new(w, h);
        self.classify_into(magnitude, &mut out)?;
        Ok(out)
    }

    /// Classify `magnitude` into a caller-provided map of the same size.
    ///
    /// `out` is overwritten entirely; on error it is left as it was.
    pub fn classify_into(&self, magnitude: &MagnitudeBuffer, out: &mut EdgeMap) -> Result<()> {
        self.validate()?;
        ensure_same_dims("hysteresis", magnitude.dims(), out.dims())?;
        if !is_valid_window(self.window) {
            log::debug!(
                "edge tracking window {} is not a positive odd size, using radius 1",
                self.window
            );
        }

        let mut planes = ThresholdPlanes::build(magnitude, self.low, self.high);
        let seeds = planes.strong.iter().filter(|&&s| s).count();
        let promoted = promote_connected(&mut planes, self.radius());
        log::debug!(
            "hysteresis: {seeds} strong seeds, {promoted} weak pixels promoted (radius {})",
            self.radius()
        );

        planes.render_into(out);
        Ok(())
    }

    /// The double-threshold map before any promotion.
    pub fn threshold_preview(&self, magnitude: &MagnitudeBuffer) -> Result<EdgeMap> {
        self.validate()?;
        let (w, h) = magnitude.dims();
        let mut out = EdgeMap::new(w, h);
        ThresholdPlanes::build(magnitude, self.low, self.high).render_into(&mut out);
        Ok(out)
    }
}

/// Flood the strong plane through weak pixels within `radius`. Returns the
/// number of promotions.
fn promote_connected(planes: &mut ThresholdPlanes, radius: usize) -> usize {
    let (w, h) = (planes.w, planes.h);
    let mut frontier: VecDeque<(usize, usize)> = VecDeque::new();
    for y in 0..h {
        for x in 0..w {
            if planes.strong[y * w + x] {
                frontier.push_back((x, y));
            }
        }
    }

    let mut promoted = 0usize;
    while let Some((cx, cy)) = frontier.pop_front() {
        let y0 = cy.saturating_sub(radius);
        let y1 = (cy + radius).min(h - 1);
        let x0 = cx.saturating_sub(radius);
        let x1 = (cx + radius).min(w - 1);
        for ny in y0..=y1 {
            for nx in x0..=x1 {
                if nx == cx && ny == cy {
                    continue;
                }
                let i = ny * w + nx;
                if !planes.strong[i] && planes.weak[i] {
                    planes.strong[i] = true;
                    frontier.push_back((nx, ny));
                    promoted += 1;
                }
            }
        }
    }
    promoted
}
