//! Sobel gradients on an 8-bit image: clamped magnitude plus bucketed angle.
//!
//! - Only interior pixels are evaluated; the one-pixel frame keeps magnitude
//!   0 and angle 0.
//! - Magnitude is `round(sqrt(gx^2 + gy^2))` saturated to `[0, 255]`.
//! - The angle is `atan2(gy, gx)` in degrees, shifted by `180 + 22.5` and then
//!   folded: values above 360 are kept, everything else loses 180. The fold is
//!   lopsided (it can yield negatives and values just above 360), so the result
//!   is finally wrapped into `[0, 360)` for the orientation buckets in `nms`.
//!
//! Complexity: O(W·H); memory: one byte plus one float per pixel.
use crate::image::{GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut};

/// Gradient strength per pixel, clamped to `[0, 255]`.
pub type MagnitudeBuffer = GrayImageU8;
/// Gradient direction per pixel in degrees, `[0, 360)`.
pub type AngleBuffer = ImageF32;

/// Horizontal (`x`) and vertical (`y`) Sobel weights, rows top to bottom.
type Kernel3 = [[i32; 3]; 3];

const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
// Positive when the top row is brighter than the bottom row.
const SOBEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

const ANGLE_SHIFT_DEG: f32 = 180.0 + 22.5;

/// Output of [`estimate_gradients`].
#[derive(Clone, Debug)]
pub struct GradientField {
    pub magnitude: MagnitudeBuffer,
    pub angle: AngleBuffer,
}

/// Raw kernel responses at column `x` of the middle row.
#[inline]
fn sobel_at(rows: [&[u8]; 3], x: usize) -> (i32, i32) {
    let mut gx = 0i32;
    let mut gy = 0i32;
    for (ky, row) in rows.iter().enumerate() {
        for kx in 0..3 {
            let p = row[x + kx - 1] as i32;
            gx += SOBEL_X[ky][kx] * p;
            gy += SOBEL_Y[ky][kx] * p;
        }
    }
    (gx, gy)
}

#[inline]
fn clamped_magnitude(gx: i32, gy: i32) -> u8 {
    let m = ((gx * gx + gy * gy) as f32).sqrt().round();
    m.min(255.0) as u8
}

/// Shift-and-fold a raw `atan2` result (degrees) and wrap it into `[0, 360)`.
#[inline]
pub fn fold_angle(raw_deg: f32) -> f32 {
    let mut fi = raw_deg + ANGLE_SHIFT_DEG;
    fi -= if fi > 360.0 { 0.0 } else { 180.0 };
    let wrapped = fi.rem_euclid(360.0);
    // rem_euclid of a tiny negative can round up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Compute clamped Sobel magnitude and folded direction for every interior pixel.
pub fn estimate_gradients(source: &ImageU8<'_>) -> GradientField {
    let (w, h) = (source.w, source.h);
    let mut magnitude = MagnitudeBuffer::new(w, h);
    let mut angle = AngleBuffer::new(w, h);
    if w < 3 || h < 3 {
        return GradientField { magnitude, angle };
    }

    for y in 1..h - 1 {
        let rows = [source.row(y - 1), source.row(y), source.row(y + 1)];
        let mag_row = magnitude.row_mut(y);
        let ang_row = angle.row_mut(y);
        for x in 1..w - 1 {
            let (gx, gy) = sobel_at(rows, x);
            mag_row[x] = clamped_magnitude(gx, gy);
            ang_row[x] = fold_angle((gy as f32).atan2(gx as f32).to_degrees());
        }
    }

    GradientField { magnitude, angle }
}
