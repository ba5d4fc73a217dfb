//! Tri-state edge map produced by hysteresis tracking.
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use serde::Serialize;

/// Classification of a single pixel. The discriminant is the rendered value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum EdgeState {
    None = 0,
    Weak = 100,
    Strong = 255,
}

impl EdgeState {
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Map a rendered byte back to a state; unknown values read as `None`.
    #[inline]
    pub fn from_value(v: u8) -> Self {
        match v {
            255 => Self::Strong,
            100 => Self::Weak,
            _ => Self::None,
        }
    }
}

/// Pixel counts per state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCounts {
    pub none: usize,
    pub weak: usize,
    pub strong: usize,
}

/// Rendered edge map: every byte is 0, 100 or 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    pixels: GrayImageU8,
}

impl EdgeMap {
    /// All-`None` map of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: GrayImageU8::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn dims(&self) -> (usize, usize) {
        self.pixels.dims()
    }

    #[inline]
    pub fn state(&self, x: usize, y: usize) -> EdgeState {
        EdgeState::from_value(self.pixels.get(x, y))
    }

    #[inline]
    pub fn set_state(&mut self, x: usize, y: usize, state: EdgeState) {
        self.pixels.set(x, y, state.value());
    }

    /// Overwrite every pixel with `None`.
    pub fn clear(&mut self) {
        for y in 0..self.pixels.height() {
            self.pixels.row_mut(y).fill(EdgeState::None.value());
        }
    }

    pub fn counts(&self) -> EdgeCounts {
        let mut counts = EdgeCounts::default();
        for row in self.pixels.rows() {
            for &v in row {
                match EdgeState::from_value(v) {
                    EdgeState::None => counts.none += 1,
                    EdgeState::Weak => counts.weak += 1,
                    EdgeState::Strong => counts.strong += 1,
                }
            }
        }
        counts
    }

    /// Coordinates `(x, y)` of every pixel in `state`, row-major.
    pub fn pixels_in(&self, state: EdgeState) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for (y, row) in self.pixels.rows().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v == state.value() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Rendered bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.data()
    }

    /// Borrow the rendered map as an 8-bit image, e.g. for saving.
    pub fn as_image(&self) -> &GrayImageU8 {
        &self.pixels
    }

    pub fn into_image(self) -> GrayImageU8 {
        self.pixels
    }
}
