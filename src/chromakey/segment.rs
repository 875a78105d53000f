use image::{Luma, Rgb};
use imageproc::definitions::Image;
use imageproc::map::map_colors;

use crate::chromakey::hue::HueChannel;
use crate::chromakey::mask::InvertMask;
use crate::chromakey::threshold::ThresholdSet;

/// Mask value for pixels selected by a mask.
pub const MASK_ON: u8 = u8::MAX;

/// Mask value for pixels not selected by a mask.
pub const MASK_OFF: u8 = 0;

/// Which class of pixels a returned mask selects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaskPolarity {
    /// Selected pixels are those classified as background.
    #[default]
    Background,
    /// Selected pixels are those classified as foreground.
    Foreground,
}

/// Classifies pixels of a subject image as background by hue
///
/// The thresholds are owned by the segmenter and passed in by the caller;
/// there is no process-wide threshold configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HueSegmenter {
    thresholds: ThresholdSet,
    polarity: MaskPolarity,
}

impl HueSegmenter {
    pub fn new(thresholds: ThresholdSet) -> Self {
        Self {
            thresholds,
            polarity: MaskPolarity::Background,
        }
    }

    /// Sets the polarity used by [`HueSegmenter::segment_with_polarity`].
    pub fn with_polarity(mut self, polarity: MaskPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    pub fn polarity(&self) -> MaskPolarity {
        self.polarity
    }

    /// Computes the background mask of `subject`.
    ///
    /// A pixel is `255` when its hue lies in any threshold interval and `0`
    /// otherwise. The returned mask always selects background, whatever the
    /// configured polarity.
    pub fn segment(&self, subject: &Image<Rgb<u8>>) -> Image<Luma<u8>> {
        background_mask(&subject.hue_channel(), &self.thresholds)
    }

    /// Computes the mask of `subject` in the configured polarity.
    pub fn segment_with_polarity(&self, subject: &Image<Rgb<u8>>) -> Image<Luma<u8>> {
        let mask = self.segment(subject);
        match self.polarity {
            MaskPolarity::Background => mask,
            MaskPolarity::Foreground => mask.invert_mask(),
        }
    }
}

/// Builds a background mask from a hue channel.
///
/// Each interval selects the hues inside it (inclusive); the per-interval
/// selections are merged with a logical OR. An empty set selects nothing.
pub fn background_mask(hue: &Image<Luma<u8>>, thresholds: &ThresholdSet) -> Image<Luma<u8>> {
    let table = thresholds.lookup_table();
    map_colors(hue, |Luma([h])| {
        Luma([if table[usize::from(h)] { MASK_ON } else { MASK_OFF }])
    })
}
