use image::{GenericImageView, Luma, Pixel, Primitive, Rgb, Rgba};
use imageproc::{
    definitions::Image,
    map::{map_colors, map_colors2},
};

use crate::error::Result;
use crate::utils::validate_matching_dimensions;

/// Trait providing functionality to attach a mask as alpha channel
///
/// This trait merges a grayscale mask into an RGB image to produce an RGBA
/// image. This consumes the original image.
pub trait ApplyAlphaMask {
    type Mask: GenericImageView<Pixel = Luma<Self::Subpixel>>;
    type Subpixel: Primitive;

    /// Applies the specified mask as the alpha channel of the image
    ///
    /// # Arguments
    ///
    /// * `mask` - The alpha mask to apply (grayscale image)
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` - When image and mask dimensions don't match
    ///
    /// # Examples
    ///
    /// ```
    /// use chromakey_ops::{ApplyAlphaMask, Image};
    /// use image::{Luma, Rgb, Rgba};
    ///
    /// let color: Image<Rgb<u8>> = Image::from_pixel(2, 2, Rgb([10, 20, 30]));
    /// let mask: Image<Luma<u8>> = Image::from_pixel(2, 2, Luma([255]));
    ///
    /// let rgba = color.apply_alpha_mask(&mask).unwrap();
    /// assert_eq!(rgba.get_pixel(1, 1), &Rgba([10, 20, 30, 255]));
    /// ```
    fn apply_alpha_mask(self, mask: &Self::Mask) -> Result<Image<Rgba<Self::Subpixel>>>
    where
        Rgba<Self::Subpixel>: Pixel<Subpixel = Self::Subpixel>;
}

impl<S> ApplyAlphaMask for Image<Rgb<S>>
where
    Rgb<S>: Pixel<Subpixel = S>,
    Luma<S>: Pixel<Subpixel = S>,
    S: Primitive,
{
    type Mask = Image<Luma<S>>;
    type Subpixel = S;

    fn apply_alpha_mask(self, mask: &Self::Mask) -> Result<Image<Rgba<Self::Subpixel>>>
    where
        Rgba<Self::Subpixel>: Pixel<Subpixel = Self::Subpixel>,
    {
        validate_matching_dimensions(self.dimensions(), mask.dimensions())?;

        Ok(map_colors2(
            &self,
            mask,
            |Rgb([red, green, blue]), Luma([alpha])| Rgba([red, green, blue, alpha]),
        ))
    }
}

/// Trait for selecting the pixels of an image covered by a mask
pub trait SelectByMask {
    type Mask;

    /// Keeps the color of every pixel whose mask value is non-zero and sets
    /// all other pixels to zero.
    ///
    /// # Arguments
    ///
    /// * `mask` - Selection mask with the same dimensions as the image
    ///
    /// # Errors
    ///
    /// * `Error::DimensionMismatch` - When image and mask dimensions don't match
    fn select_by_mask(&self, mask: &Self::Mask) -> Result<Self>
    where
        Self: Sized;
}

impl<S> SelectByMask for Image<Rgb<S>>
where
    Rgb<S>: Pixel<Subpixel = S>,
    Luma<S>: Pixel<Subpixel = S>,
    S: Primitive,
{
    type Mask = Image<Luma<S>>;

    fn select_by_mask(&self, mask: &Self::Mask) -> Result<Self> {
        validate_matching_dimensions(self.dimensions(), mask.dimensions())?;

        let zero = S::DEFAULT_MIN_VALUE;
        Ok(map_colors2(self, mask, |pixel, Luma([selector])| {
            if selector == zero {
                Rgb([zero; 3])
            } else {
                pixel
            }
        }))
    }
}

/// Trait for lifting an image to four channels
///
/// RGB images gain a fully opaque alpha channel. RGBA images keep the alpha
/// they already carry.
pub trait PromoteAlpha {
    /// Returns a four-channel copy of the image.
    ///
    /// # Returns
    ///
    /// An RGBA image of the same size. The source image is not modified.
    fn promote_alpha(&self) -> Image<Rgba<u8>>;
}

impl PromoteAlpha for Image<Rgb<u8>> {
    fn promote_alpha(&self) -> Image<Rgba<u8>> {
        map_colors(self, |Rgb([red, green, blue])| {
            Rgba([red, green, blue, u8::MAX])
        })
    }
}

impl PromoteAlpha for Image<Rgba<u8>> {
    fn promote_alpha(&self) -> Image<Rgba<u8>> {
        self.clone()
    }
}

/// Trait for flattening an RGBA image for display by dropping alpha
///
/// The color channels are kept as-is; no premultiplication takes place.
pub trait DropAlpha {
    fn drop_alpha(&self) -> Image<Rgb<u8>>;
}

impl DropAlpha for Image<Rgba<u8>> {
    fn drop_alpha(&self) -> Image<Rgb<u8>> {
        map_colors(self, |Rgba([red, green, blue, _])| Rgb([red, green, blue]))
    }
}
