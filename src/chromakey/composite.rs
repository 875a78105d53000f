use image::Rgba;
use imageproc::definitions::Image;
use itertools::iproduct;

use crate::chromakey::alpha::PromoteAlpha;
use crate::chromakey::anchor::{Anchor, AnchorRect};
use crate::chromakey::cutout::Cutout;
use crate::error::Result;
use crate::utils::{clamp_f32_to_primitive, normalize_alpha_with_max, validate_non_empty_image};

/// Blends a cut-out into a target image at an anchor position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compositor {
    anchor: Anchor,
}

impl Compositor {
    pub fn new(anchor: Anchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Returns the rectangle `cutout` would occupy inside `target`.
    pub fn anchor_rect<T>(&self, target: &T, cutout: &Cutout) -> Result<AnchorRect>
    where
        T: image::GenericImageView,
    {
        AnchorRect::compute(target.dimensions(), cutout.dimensions(), self.anchor)
    }

    /// Alpha-blends `cutout` over `target` and returns the result as a new
    /// RGBA image with the target's dimensions.
    ///
    /// Inside the anchor rectangle each color channel becomes
    /// `a * cutout + (1 - a) * target` with `a = cutout.alpha / 255`, and alpha
    /// becomes the larger of the two alphas. Every other pixel is copied
    /// from the target.
    ///
    /// # Arguments
    ///
    /// * `target` - RGB or RGBA image to draw onto; it is not modified
    /// * `cutout` - RGBA cut-out, usually from [`crate::CutoutExtractor`]
    ///
    /// # Errors
    ///
    /// * `Error::EmptyImage` - When the cut-out has a zero side
    /// * `Error::AnchorOutOfBounds` - When the cut-out is wider or taller
    ///   than the target. Nothing is blended in that case.
    pub fn composite<T>(&self, target: &T, cutout: &Cutout) -> Result<Image<Rgba<u8>>>
    where
        T: PromoteAlpha + image::GenericImageView,
    {
        validate_non_empty_image(cutout.width(), cutout.height())?;
        let rect = self.anchor_rect(target, cutout)?;
        let mut result = target.promote_alpha();

        iproduct!(0..rect.height, 0..rect.width).for_each(|(dy, dx)| {
            let foreground = cutout.get_pixel(dx, dy);
            let background = result.get_pixel_mut(rect.x + dx, rect.y + dy);
            *background = blend(*foreground, *background);
        });

        Ok(result)
    }
}

/// Blends one foreground pixel over one background pixel.
#[inline]
pub fn blend(foreground: Rgba<u8>, background: Rgba<u8>) -> Rgba<u8> {
    let Rgba([fr, fg, fb, fa]) = foreground;
    let Rgba([br, bg, bb, ba]) = background;

    let alpha = normalize_alpha_with_max(fa, f32::from(u8::MAX));
    let mix = |front: u8, back: u8| -> u8 {
        clamp_f32_to_primitive(alpha * f32::from(front) + (1.0 - alpha) * f32::from(back))
    };

    Rgba([mix(fr, br), mix(fg, bg), mix(fb, bb), fa.max(ba)])
}
