use image::imageops::{self, FilterType};
use image::{GenericImageView, ImageBuffer, Pixel};
use imageproc::definitions::Image;

use crate::error::{Error, Result};
use crate::utils::{clamp_f32_to_primitive, validate_non_empty_image};

/// Interpolation policy used when resizing the color part of a cut-out
///
/// Masks are never resized with these policies; they always go through
/// [`resize_nearest`] so that alpha stays binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorInterpolation {
    /// Bilinear (triangle) filtering.
    #[default]
    Linear,
    /// Pixel-area averaging when shrinking, bilinear when enlarging.
    Area,
}

/// Target size of a resized cut-out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    width: u32,
    height: u32,
}

impl OutputSize {
    /// Cut-out size used when the caller does not pick one.
    pub const DEFAULT: Self = Self {
        width: 300,
        height: 400,
    };

    /// Creates a new size.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidParameter` - When either side is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "output size must be positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Default for OutputSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::str::FromStr for OutputSize {
    type Err = Error;

    /// Parses `"WIDTHxHEIGHT"`, for example `"300x400"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidParameter(format!("'{s}' is not a WIDTHxHEIGHT size"));
        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;
        Self::new(width, height)
    }
}

/// Resizes an image by picking, for every destination pixel, the source
/// pixel whose footprint contains it.
///
/// No new values are ever created, so a binary mask stays binary at every
/// scale factor.
pub fn resize_nearest<I, P>(src: &I, size: OutputSize) -> Result<Image<P>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel,
{
    let (src_width, src_height) = src.dimensions();
    validate_non_empty_image(src_width, src_height)?;

    let OutputSize { width, height } = size;
    let source_index =
        |dst: u32, src_len: u32, dst_len: u32| (u64::from(dst) * u64::from(src_len) / u64::from(dst_len)) as u32;

    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        src.get_pixel(
            source_index(x, src_width, width),
            source_index(y, src_height, height),
        )
    }))
}

/// Resizes a color image with the given interpolation policy.
pub fn resize_color<P>(
    src: &Image<P>,
    size: OutputSize,
    interpolation: ColorInterpolation,
) -> Result<Image<P>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (src_width, src_height) = src.dimensions();
    validate_non_empty_image(src_width, src_height)?;

    if (src_width, src_height) == size.dimensions() {
        return Ok(src.clone());
    }

    let enlarging = size.width > src_width || size.height > src_height;
    match interpolation {
        ColorInterpolation::Area if !enlarging => Ok(resize_area(src, size)),
        _ => Ok(imageops::resize(
            src,
            size.width,
            size.height,
            FilterType::Triangle,
        )),
    }
}

/// Share of one source pixel inside the footprint of a destination pixel
#[derive(Debug, Clone, Copy)]
struct AreaWeight {
    source: u32,
    weight: f32,
}

/// Computes, per destination index, the overlapping source indices and
/// their normalized coverage.
fn area_weights(src_len: u32, dst_len: u32) -> Vec<Vec<AreaWeight>> {
    let scale = src_len as f64 / dst_len as f64;

    (0..dst_len)
        .map(|dst| {
            let start = dst as f64 * scale;
            let end = (start + scale).min(src_len as f64);
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src_len);

            (first..last)
                .filter_map(|source| {
                    let overlap = end.min(f64::from(source + 1)) - start.max(f64::from(source));
                    (overlap > 1e-9).then(|| AreaWeight {
                        source,
                        weight: (overlap / scale) as f32,
                    })
                })
                .collect()
        })
        .collect()
}

/// Shrinks an image by averaging every source pixel covered by each
/// destination pixel, weighted by covered area.
fn resize_area<P>(src: &Image<P>, size: OutputSize) -> Image<P>
where
    P: Pixel<Subpixel = u8>,
{
    let (src_width, src_height) = src.dimensions();
    let channels = usize::from(P::CHANNEL_COUNT);
    let columns = area_weights(src_width, size.width);
    let rows = area_weights(src_height, size.height);

    // Horizontal pass: one row of `size.width` accumulated pixels per source row.
    let mut horizontal = vec![0.0f32; src_height as usize * size.width as usize * channels];
    for (sy, row) in horizontal
        .chunks_exact_mut(size.width as usize * channels)
        .enumerate()
    {
        for (dx, weights) in columns.iter().enumerate() {
            let out = &mut row[dx * channels..(dx + 1) * channels];
            for &AreaWeight { source, weight } in weights {
                let pixel = src.get_pixel(source, sy as u32);
                for (acc, &value) in out.iter_mut().zip(pixel.channels()) {
                    *acc += f32::from(value) * weight;
                }
            }
        }
    }

    let mut output: Image<P> = ImageBuffer::new(size.width, size.height);
    let row_len = size.width as usize * channels;
    for (dy, weights) in rows.iter().enumerate() {
        let mut sum = vec![0.0f32; row_len];
        for &AreaWeight { source, weight } in weights {
            let start = source as usize * row_len;
            for (acc, &value) in sum.iter_mut().zip(&horizontal[start..start + row_len]) {
                *acc += value * weight;
            }
        }

        for (dx, values) in sum.chunks_exact(channels).enumerate() {
            let pixel = output.get_pixel_mut(dx as u32, dy as u32);
            for (channel, &value) in pixel.channels_mut().iter_mut().zip(values) {
                *channel = clamp_f32_to_primitive(value.round());
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromakey::mask::is_binary_mask;
    use image::{Luma, Rgb};
    use imageproc::gray_image;

    #[test]
    fn output_size_new_rejects_zero() {
        assert!(matches!(
            OutputSize::new(0, 10),
            Err(Error::InvalidParameter(_))
        ));
        assert!(OutputSize::new(1, 1).is_ok());
    }

    #[test]
    fn output_size_accessors_report_validated_sides() {
        let size = OutputSize::new(3, 7).unwrap();
        assert_eq!((size.width(), size.height()), (3, 7));
        assert_eq!(size.dimensions(), (3, 7));
        assert_eq!(OutputSize::default().dimensions(), (300, 400));
    }

    #[test]
    fn output_size_parses_width_by_height() {
        assert_eq!("300x400".parse::<OutputSize>().unwrap(), OutputSize::DEFAULT);
        assert_eq!(
            " 4X2 ".parse::<OutputSize>().unwrap(),
            OutputSize::new(4, 2).unwrap()
        );
        assert!("300".parse::<OutputSize>().is_err());
        assert!("0x4".parse::<OutputSize>().is_err());
    }

    #[test]
    fn area_weights_sum_to_one_for_each_destination() {
        for (src, dst) in [(4, 2), (7, 3), (10, 10), (3, 7)] {
            for weights in area_weights(src, dst) {
                let total: f32 = weights.iter().map(|w| w.weight).sum();
                assert!((total - 1.0).abs() < 1e-5, "{src}->{dst}: {total}");
            }
        }
    }

    #[test]
    fn resize_nearest_with_same_size_is_identity() {
        let mask = gray_image!(
            0, 255, 0;
            255, 0, 255);
        let resized = resize_nearest(&mask, OutputSize::new(3, 2).unwrap()).unwrap();
        assert_eq!(resized, mask);
    }

    #[test]
    fn resize_nearest_upscale_repeats_pixels() {
        let mask = gray_image!(0, 255);
        let resized = resize_nearest(&mask, OutputSize::new(4, 1).unwrap()).unwrap();
        assert_eq!(resized.into_raw(), vec![0, 0, 255, 255]);
    }

    #[test]
    fn resize_nearest_keeps_mask_binary_on_odd_scales() {
        let mask: Image<Luma<u8>> =
            ImageBuffer::from_fn(13, 7, |x, y| Luma([if (x * 3 + y) % 5 < 2 { 255 } else { 0 }]));
        for (w, h) in [(5, 3), (29, 17), (1, 1), (13, 40)] {
            let resized = resize_nearest(&mask, OutputSize::new(w, h).unwrap()).unwrap();
            assert_eq!(resized.dimensions(), (w, h));
            assert!(is_binary_mask(&resized));
        }
    }

    #[test]
    fn resize_nearest_rejects_empty_source() {
        let empty: Image<Luma<u8>> = ImageBuffer::new(0, 3);
        assert!(matches!(
            resize_nearest(&empty, OutputSize::new(2, 2).unwrap()),
            Err(Error::EmptyImage { .. })
        ));
    }

    #[test]
    fn resize_area_averages_two_by_two_blocks() {
        let src: Image<Rgb<u8>> = ImageBuffer::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgb([100, 0, 0])
            } else {
                Rgb([0, 200, 50])
            }
        });

        let result = resize_color(&src, OutputSize::new(2, 1).unwrap(), ColorInterpolation::Area)
            .unwrap();

        assert_eq!(result.get_pixel(0, 0), &Rgb([100, 0, 0]));
        assert_eq!(result.get_pixel(1, 0), &Rgb([0, 200, 50]));
    }

    #[test]
    fn resize_area_keeps_uniform_color_on_fractional_scale() {
        let src: Image<Rgb<u8>> = ImageBuffer::from_pixel(7, 5, Rgb([12, 34, 56]));
        let result = resize_color(&src, OutputSize::new(3, 2).unwrap(), ColorInterpolation::Area)
            .unwrap();
        assert!(result.pixels().all(|p| *p == Rgb([12, 34, 56])));
    }

    #[test]
    fn resize_color_produces_requested_size_for_both_policies() {
        let src: Image<Rgb<u8>> =
            ImageBuffer::from_fn(9, 6, |x, y| Rgb([(x * 20) as u8, (y * 30) as u8, 90]));
        for interpolation in [ColorInterpolation::Linear, ColorInterpolation::Area] {
            for (w, h) in [(3, 2), (18, 12), (5, 9)] {
                let out = resize_color(&src, OutputSize::new(w, h).unwrap(), interpolation).unwrap();
                assert_eq!(out.dimensions(), (w, h));
            }
        }
    }
}
