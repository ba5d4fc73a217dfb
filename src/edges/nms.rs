//! Non-maximum suppression on the clamped gradient magnitude.
//!
//! Each interior pixel's angle picks one of four orientation buckets, and the
//! bucket names the two neighbors it is compared against. A pixel weaker than
//! either neighbor is zeroed; ties survive. Decisions are taken against a
//! snapshot of the input, so the result does not depend on scan order.
//!
//! Bucket ranges are open below and closed above, mirrored across 180°:
//!
//! | bucket            | degrees                          | neighbors                  |
//! |-------------------|----------------------------------|----------------------------|
//! | `DiagonalDown`    | (0,45] ∪ (180,225]               | (x-1,y-1), (x+1,y+1)       |
//! | `Vertical`        | (45,90] ∪ (225,270]              | (x-1,y-1), (x,y+1)         |
//! | `DiagonalUp`      | (90,135] ∪ (270,315]             | (x+1,y-1), (x-1,y+1)       |
//! | `Horizontal`      | 0 ∪ (135,180] ∪ (315,360]        | (x+1,y), (x-1,y)           |
//!
//! The `Vertical` pair is deliberately lopsided (upper-left against the pixel
//! below); edge outputs depend on it.
use super::grad::{AngleBuffer, MagnitudeBuffer};
use crate::error::{ensure_same_dims, Result};
use crate::image::{ImageView, ImageViewMut};

/// Quantized gradient orientation used to pick comparison neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrientationBucket {
    DiagonalDown,
    Vertical,
    DiagonalUp,
    Horizontal,
}

impl OrientationBucket {
    /// Classify a folded angle in degrees.
    ///
    /// Angles outside `[0, 360]` (never produced by `estimate_gradients`)
    /// fall back to `Horizontal`.
    pub fn from_degrees(angle: f32) -> Self {
        let in_range = |lo: f32, hi: f32| angle > lo && angle <= hi;
        if in_range(0.0, 45.0) || in_range(180.0, 225.0) {
            Self::DiagonalDown
        } else if in_range(45.0, 90.0) || in_range(225.0, 270.0) {
            Self::Vertical
        } else if in_range(90.0, 135.0) || in_range(270.0, 315.0) {
            Self::DiagonalUp
        } else {
            Self::Horizontal
        }
    }

    /// The two `(x, y)` neighbors compared against interior pixel `(x, y)`.
    #[inline]
    pub fn neighbors(self, x: usize, y: usize) -> [(usize, usize); 2] {
        match self {
            Self::DiagonalDown => [(x - 1, y - 1), (x + 1, y + 1)],
            Self::Vertical => [(x - 1, y - 1), (x, y + 1)],
            Self::DiagonalUp => [(x + 1, y - 1), (x - 1, y + 1)],
            Self::Horizontal => [(x + 1, y), (x - 1, y)],
        }
    }
}

/// Zero every interior magnitude that is smaller than one of its two
/// orientation neighbors. Mutates `magnitude` in place.
///
/// Fails before writing anything if the buffers differ in size.
pub fn suppress_non_maxima(magnitude: &mut MagnitudeBuffer, angle: &AngleBuffer) -> Result<()> {
    ensure_same_dims("non-maximum suppression", magnitude.dims(), angle.dims())?;
    let (w, h) = magnitude.dims();
    if w < 3 || h < 3 {
        return Ok(());
    }

    let snapshot = magnitude.clone();
    let mut suppressed = 0usize;
    for y in 1..h - 1 {
        let angle_row = angle.row(y);
        let out_row = magnitude.row_mut(y);
        for x in 1..w - 1 {
            let value = snapshot.get(x, y);
            if value == 0 {
                continue;
            }
            let [(ax, ay), (bx, by)] = OrientationBucket::from_degrees(angle_row[x]).neighbors(x, y);
            if value < snapshot.get(ax, ay) || value < snapshot.get(bx, by) {
                out_row[x] = 0;
                suppressed += 1;
            }
        }
    }
    log::trace!("non-maximum suppression zeroed {suppressed} pixels");
    Ok(())
}
