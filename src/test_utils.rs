//! Test utilities for chromakey-ops
//!
//! Shared fixtures for the unit tests. Only compiled when running tests.

use image::{Luma, Rgb, Rgba};
use imageproc::definitions::Image;

/// Pure green, hue 60: inside the default green screen band.
pub const SCREEN_GREEN: Rgb<u8> = Rgb([0, 255, 0]);

/// Pure red, hue 0: outside the default green screen band.
pub const SUBJECT_RED: Rgb<u8> = Rgb([255, 0, 0]);

/// Creates a 2x2 RGB image with known pixel values:
/// - (0,0): [200, 150, 100]
/// - (1,0): [100, 200, 150]
/// - (0,1): [150, 100, 200]
/// - (1,1): [50, 75, 25]
pub fn create_test_rgb_image() -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgb([200, 150, 100]));
    image.put_pixel(1, 0, Rgb([100, 200, 150]));
    image.put_pixel(0, 1, Rgb([150, 100, 200]));
    image.put_pixel(1, 1, Rgb([50, 75, 25]));
    image
}

/// Creates a 2x2 RGBA image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates a 2x2 alpha mask with varying transparency levels:
/// - (0,0): [255]
/// - (1,0): [192]
/// - (0,1): [128]
/// - (1,1): [64]
pub fn create_test_alpha_mask() -> Image<Luma<u8>> {
    let mut mask: Image<Luma<u8>> = Image::new(2, 2);
    mask.put_pixel(0, 0, Luma([255]));
    mask.put_pixel(1, 0, Luma([192]));
    mask.put_pixel(0, 1, Luma([128]));
    mask.put_pixel(1, 1, Luma([64]));
    mask
}

/// Creates a green screen subject: a red rectangle `subject` (x, y, w, h)
/// on a pure green backdrop.
pub fn create_keyed_subject(width: u32, height: u32, subject: (u32, u32, u32, u32)) -> Image<Rgb<u8>> {
    let (sx, sy, sw, sh) = subject;
    Image::from_fn(width, height, |x, y| {
        if (sx..sx + sw).contains(&x) && (sy..sy + sh).contains(&y) {
            SUBJECT_RED
        } else {
            SCREEN_GREEN
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgb_image_with_valid_input_creates_image() {
        let image = create_test_rgb_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgb([200, 150, 100]));
        assert_eq!(image.get_pixel(1, 1), &Rgb([50, 75, 25]));
    }

    #[test]
    fn create_keyed_subject_places_subject_rectangle() {
        let image = create_keyed_subject(6, 4, (1, 1, 2, 2));
        assert_eq!(image.get_pixel(0, 0), &SCREEN_GREEN);
        assert_eq!(image.get_pixel(1, 1), &SUBJECT_RED);
        assert_eq!(image.get_pixel(2, 2), &SUBJECT_RED);
        assert_eq!(image.get_pixel(3, 2), &SCREEN_GREEN);
    }
}
