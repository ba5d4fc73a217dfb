//! Image containers and tool-side helpers.
//!
//! The edge stages only touch `ImageU8` (input), `GrayImageU8` (8-bit
//! outputs) and `ImageF32` (angles). `filters` and `io` serve the binaries.
pub mod f32;
pub mod filters;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{GrayImageU8, ImageU8};
