//! Internal helpers shared by the pipeline stages.

use image::Primitive;
use imageproc::definitions::Clamp;

use crate::error::{Error, Result};

/// Clamps a floating-point value into the range of a primitive type.
///
/// Fractions are truncated, matching a plain `as` cast after clamping.
#[inline]
pub fn clamp_f32_to_primitive<T: Primitive + Clamp<f32>>(value: f32) -> T {
    T::clamp(value)
}

/// Normalizes an alpha value using a pre-computed max value.
///
/// # Returns
///
/// The alpha value scaled into `[0, 1]`
#[inline]
pub fn normalize_alpha_with_max<S>(alpha: S, max_value: f32) -> f32
where
    S: Into<f32> + Primitive,
{
    alpha.into() / max_value
}

/// Validates that an image has non-zero dimensions.
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        Err(Error::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Validates that two images have matching dimensions.
///
/// `expected` is the reference image (usually the subject), `actual` the
/// image that has to follow it (usually a mask).
pub fn validate_matching_dimensions(expected: (u32, u32), actual: (u32, u32)) -> Result<()> {
    if expected != actual {
        Err(Error::DimensionMismatch { expected, actual })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_alpha_with_max() {
        assert_eq!(normalize_alpha_with_max(0u8, 255.0), 0.0);
        assert_eq!(normalize_alpha_with_max(127u8, 255.0), 127.0 / 255.0);
        assert_eq!(normalize_alpha_with_max(255u8, 255.0), 1.0);
    }

    #[test]
    fn test_clamp_f32_to_primitive() {
        assert_eq!(clamp_f32_to_primitive::<u8>(-10.0), 0);
        assert_eq!(clamp_f32_to_primitive::<u8>(127.5), 127);
        assert_eq!(clamp_f32_to_primitive::<u8>(255.0), 255);
        assert_eq!(clamp_f32_to_primitive::<u8>(300.0), 255);
    }

    #[test]
    fn test_validate_non_empty_image() {
        assert!(validate_non_empty_image(1, 1).is_ok());
        assert_eq!(
            validate_non_empty_image(0, 100),
            Err(Error::EmptyImage {
                width: 0,
                height: 100
            })
        );
        assert!(validate_non_empty_image(100, 0).is_err());
    }

    #[test]
    fn test_validate_matching_dimensions() {
        assert!(validate_matching_dimensions((50, 75), (50, 75)).is_ok());
        assert_eq!(
            validate_matching_dimensions((10, 10), (5, 10)),
            Err(Error::DimensionMismatch {
                expected: (10, 10),
                actual: (5, 10)
            })
        );
    }
}
