//! Errors raised by the edge pipeline stages.
//!
//! Every stage validates its inputs before touching any buffer, so a
//! returned error leaves caller-owned buffers exactly as they were.
use thiserror::Error;

/// Failures of the core pipeline. All of them are caller misuse.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CannyError {
    /// Two buffers handed to the same stage disagree in size.
    #[error("{stage}: dimension mismatch, expected {expected:?}, found {found:?}")]
    DimensionMismatch {
        /// Stage that rejected the input.
        stage: &'static str,
        /// `(width, height)` of the reference buffer.
        expected: (usize, usize),
        /// `(width, height)` of the offending buffer.
        found: (usize, usize),
    },

    /// Thresholds or window settings that cannot produce a meaningful result.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, CannyError>;

/// Fail with [`CannyError::DimensionMismatch`] unless both sizes agree.
pub(crate) fn ensure_same_dims(
    stage: &'static str,
    expected: (usize, usize),
    found: (usize, usize),
) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CannyError::DimensionMismatch {
            stage,
            expected,
            found,
        })
    }
}
