use image::{Luma, Rgb, Rgba};
use imageproc::definitions::Image;

use crate::chromakey::alpha::{ApplyAlphaMask, SelectByMask};
use crate::chromakey::mask::InvertMask;
use crate::chromakey::resize::{resize_color, resize_nearest, ColorInterpolation, OutputSize};
use crate::error::Result;
use crate::utils::{validate_matching_dimensions, validate_non_empty_image};

/// Extracted subject with its own transparency
///
/// Alpha is `0` where the source pixel was background and `255` where it
/// was foreground.
pub type Cutout = Image<Rgba<u8>>;

/// Turns a subject and its background mask into a resized RGBA cut-out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CutoutExtractor {
    output_size: OutputSize,
    interpolation: ColorInterpolation,
}

impl CutoutExtractor {
    pub fn new(output_size: OutputSize) -> Self {
        Self {
            output_size,
            interpolation: ColorInterpolation::default(),
        }
    }

    /// Sets the interpolation used for the color channels.
    ///
    /// The alpha channel is always resized with nearest neighbour.
    pub fn with_interpolation(mut self, interpolation: ColorInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn output_size(&self) -> OutputSize {
        self.output_size
    }

    pub fn interpolation(&self) -> ColorInterpolation {
        self.interpolation
    }

    /// Extracts the foreground of `subject` as a cut-out of the configured size.
    ///
    /// `background_mask` selects background pixels, as returned by
    /// [`HueSegmenter::segment`](crate::HueSegmenter::segment). It is inverted
    /// here to obtain the foreground.
    ///
    /// # Errors
    ///
    /// * `Error::EmptyImage` - When the subject has a zero dimension
    /// * `Error::DimensionMismatch` - When mask and subject sizes differ
    pub fn extract(
        &self,
        subject: &Image<Rgb<u8>>,
        background_mask: &Image<Luma<u8>>,
    ) -> Result<Cutout> {
        validate_non_empty_image(subject.width(), subject.height())?;
        validate_matching_dimensions(subject.dimensions(), background_mask.dimensions())?;

        let foreground_mask = background_mask.invert_mask();
        let foreground = subject.select_by_mask(&foreground_mask)?;

        let color = resize_color(&foreground, self.output_size, self.interpolation)?;
        let alpha = resize_nearest(&foreground_mask, self.output_size)?;

        color.apply_alpha_mask(&alpha)
    }
}
