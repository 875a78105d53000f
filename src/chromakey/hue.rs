use image::{Luma, Rgb};
use imageproc::definitions::Image;
use imageproc::map::map_colors;
use imageproc::stats::histogram;

/// Number of distinct hue values in the half-circle encoding (`0..=179`).
pub const HUE_BINS: usize = 180;

/// Largest hue value produced by [`rgb_to_hue`].
pub const MAX_HUE: u8 = (HUE_BINS - 1) as u8;

/// Converts a color to its hue in the half-circle encoding.
///
/// Hue angles in degrees are halved and rounded so that they fit a `u8`;
/// 360 degrees wraps back to 0. Achromatic colors (all channels equal)
/// have hue 0.
#[inline]
pub fn rgb_to_hue(Rgb([red, green, blue]): Rgb<u8>) -> u8 {
    let (r, g, b) = (f32::from(red), f32::from(green), f32::from(blue));
    let value = r.max(g).max(b);
    let chroma = value - r.min(g).min(b);

    if chroma == 0.0 {
        return 0;
    }

    let degrees = if value == r {
        60.0 * (g - b) / chroma
    } else if value == g {
        120.0 + 60.0 * (b - r) / chroma
    } else {
        240.0 + 60.0 * (r - g) / chroma
    };
    let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };

    ((degrees / 2.0).round() as u32 % HUE_BINS as u32) as u8
}

/// Trait for deriving the hue channel of a color image
pub trait HueChannel {
    /// Returns a single-channel image holding the hue of every pixel.
    ///
    /// The source image is left untouched.
    fn hue_channel(&self) -> Image<Luma<u8>>;
}

impl HueChannel for Image<Rgb<u8>> {
    fn hue_channel(&self) -> Image<Luma<u8>> {
        map_colors(self, |pixel| Luma([rgb_to_hue(pixel)]))
    }
}

/// Counts how many pixels fall into each hue value.
///
/// Useful for choosing threshold intervals: a uniform backdrop shows up
/// as a single dominant peak.
///
/// # Arguments
///
/// * `hue` - A hue channel as produced by [`HueChannel::hue_channel`]
///
/// # Returns
///
/// One count per hue value. Values above [`MAX_HUE`] are counted in the
/// last bin, so the counts always sum to the pixel count.
pub fn hue_histogram(hue: &Image<Luma<u8>>) -> [u32; HUE_BINS] {
    let counts = &histogram(hue).channels[0];
    let mut bins = [0u32; HUE_BINS];
    bins.copy_from_slice(&counts[..HUE_BINS]);
    bins[HUE_BINS - 1] += counts[HUE_BINS..].iter().sum::<u32>();
    bins
}

/// Stretches hue values over the full `u8` range for viewing.
///
/// # Arguments
///
/// * `hue` - A hue channel as produced by [`HueChannel::hue_channel`].
///   Values above [`MAX_HUE`] saturate at 255.
pub fn visualize_hue(hue: &Image<Luma<u8>>) -> Image<Luma<u8>> {
    map_colors(hue, |Luma([h])| {
        let stretched = u32::from(h.min(MAX_HUE)) * 255 / u32::from(MAX_HUE);
        Luma([u8::try_from(stretched).unwrap_or(u8::MAX)])
    })
}
