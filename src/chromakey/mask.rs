use image::{Luma, Primitive};
use imageproc::definitions::Image;
use imageproc::map::map_colors;

/// Trait for inverting single-channel masks
///
/// A mask computed by the segmenter marks background pixels. Consumers that
/// need the foreground invert it explicitly with this trait.
pub trait InvertMask {
    /// Returns a new mask with every value `v` replaced by `max - v`.
    ///
    /// For binary masks this swaps `0` and `max`, so inverting twice gives
    /// back the original mask.
    ///
    /// # Returns
    ///
    /// A new mask of the same size; `self` is left untouched.
    fn invert_mask(&self) -> Self;

    /// Inverts the mask in-place.
    ///
    /// # Returns
    ///
    /// A mutable reference to `self` for method chaining.
    fn invert_mask_mut(&mut self) -> &mut Self;
}

impl<S> InvertMask for Image<Luma<S>>
where
    Luma<S>: image::Pixel<Subpixel = S>,
    S: Primitive + 'static,
{
    fn invert_mask(&self) -> Self {
        map_colors(self, |Luma([value])| Luma([S::DEFAULT_MAX_VALUE - value]))
    }

    fn invert_mask_mut(&mut self) -> &mut Self {
        self.iter_mut()
            .for_each(|value| *value = S::DEFAULT_MAX_VALUE - *value);
        self
    }
}

/// Returns `true` when every mask value is either zero or the type maximum.
pub fn is_binary_mask<S>(mask: &Image<Luma<S>>) -> bool
where
    Luma<S>: image::Pixel<Subpixel = S>,
    S: Primitive + 'static,
{
    mask.iter()
        .all(|&value| value == S::DEFAULT_MIN_VALUE || value == S::DEFAULT_MAX_VALUE)
}
