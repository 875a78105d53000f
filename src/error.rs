use std::path::PathBuf;

use thiserror::Error;

/// Error type for the segmentation, extraction and compositing stages
///
/// Every stage fails fast with one of these variants. An empty threshold
/// set is not an error and never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An input image could not be read or decoded
    ///
    /// Raised by the boundary loaders. No stage ever substitutes a blank
    /// image for a failed load.
    #[error("Unable to load image at {}: {reason}", path.display())]
    ResourceUnavailable {
        /// Path that was requested
        path: PathBuf,
        /// Decoder or I/O failure description
        reason: String,
    },

    /// Two inputs that must share spatial dimensions do not
    ///
    /// This error occurs when a background mask does not have the
    /// dimensions of the subject image it was computed from.
    #[error("Image and mask dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },

    /// The cut-out does not fit inside the target image
    ///
    /// The compositor rejects the call instead of clipping the cut-out.
    #[error("Cut-out {cutout:?} does not fit inside target {target:?}")]
    AnchorOutOfBounds {
        /// Cut-out dimensions (width, height)
        cutout: (u32, u32),
        /// Target dimensions (width, height)
        target: (u32, u32),
    },

    /// Invalid parameter provided to the operation
    ///
    /// Returned for malformed hue intervals and zero output sizes.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An input image has a zero dimension
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// A result image could not be encoded or written
    #[error("Unable to write image to {}: {reason}", path.display())]
    OutputUnwritable { path: PathBuf, reason: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
