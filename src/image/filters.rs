//! Separable smoothing applied by the tools before edge detection.
//!
//! The edge stages assume their input is already smoothed; this module is
//! the tool-side stand-in for that preprocessing. Borders clamp to the
//! image extents.
use super::{GrayImageU8, ImageF32, ImageU8, ImageView, ImageViewMut};

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        GAUSSIAN_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap Gaussian filter `[1, 4, 6, 4, 1] / 16`.
pub const GAUSSIAN_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.0625, 0.25, 0.375, 0.25, 0.0625]);

/// Blur an 8-bit image `passes` times with `filter`, rounding back to u8.
///
/// Zero passes returns an unmodified copy.
pub fn gaussian_blur_u8(
    gray: &ImageU8<'_>,
    filter: &dyn SeparableFilter,
    passes: usize,
) -> GrayImageU8 {
    if passes == 0 || gray.w == 0 || gray.h == 0 {
        return GrayImageU8::from_view(gray);
    }

    let mut plane = ImageF32::from_fn(gray.w, gray.h, |x, y| gray.get(x, y) as f32);
    let mut scratch = ImageF32::new(gray.w, gray.h);
    for _ in 0..passes {
        blur_horizontal(&plane, &mut scratch, filter.taps());
        blur_vertical(&scratch, &mut plane, filter.taps());
    }

    let mut out = GrayImageU8::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = plane.row(y);
        for (dst, &v) in out.row_mut(y).iter_mut().zip(src) {
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

fn blur_horizontal(src: &ImageF32, dst: &mut ImageF32, taps: &[f32]) {
    let radius = (taps.len() / 2) as isize;
    for y in 0..src.h {
        let src_row = src.row(y);
        let dst_row = dst.row_mut(y);
        for (x, dst_px) in dst_row.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let sx = clamp_index(x as isize + k as isize - radius, src.w);
                acc += tap * src_row[sx];
            }
            *dst_px = acc;
        }
    }
}

fn blur_vertical(src: &ImageF32, dst: &mut ImageF32, taps: &[f32]) {
    let radius = (taps.len() / 2) as isize;
    for y in 0..src.h {
        let dst_row = dst.row_mut(y);
        dst_row.fill(0.0);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius, src.h);
            for (dst_px, &v) in dst_row.iter_mut().zip(src.row(sy)) {
                *dst_px += tap * v;
            }
        }
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 || idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
