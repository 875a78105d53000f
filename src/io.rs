//! Loading and saving images at the pipeline boundary.
//!
//! Decoded images are converted to an explicit channel layout here, so the
//! stages only ever see typed buffers.

use std::path::Path;

use image::{DynamicImage, Pixel, PixelWithColorType, Rgb, Rgba};
use imageproc::definitions::Image;
use tracing::debug;

use crate::chromakey::alpha::PromoteAlpha;
use crate::error::{Error, Result};
use crate::utils::validate_non_empty_image;

fn open(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|err| Error::ResourceUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    validate_non_empty_image(image.width(), image.height())?;

    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );
    Ok(image)
}

/// Loads a subject image as three-channel color.
///
/// Any alpha channel in the file is discarded.
///
/// # Errors
///
/// * `Error::ResourceUnavailable` - When the file cannot be read or decoded
/// * `Error::EmptyImage` - When the decoded image has a zero dimension
pub fn load_subject(path: impl AsRef<Path>) -> Result<Image<Rgb<u8>>> {
    open(path.as_ref()).map(|image| image.to_rgb8())
}

/// Loads a target image as four-channel color.
///
/// Files without alpha get a fully opaque alpha channel; files with alpha
/// keep it.
///
/// # Errors
///
/// * `Error::ResourceUnavailable` - When the file cannot be read or decoded
/// * `Error::EmptyImage` - When the decoded image has a zero dimension
pub fn load_target(path: impl AsRef<Path>) -> Result<Image<Rgba<u8>>> {
    let image = open(path.as_ref())?;
    Ok(if image.color().has_alpha() {
        image.to_rgba8()
    } else {
        image.to_rgb8().promote_alpha()
    })
}

/// Encodes `image` to `path`, picking the format from the file extension.
///
/// # Errors
///
/// * `Error::OutputUnwritable` - When encoding or writing fails
pub fn save_image<P>(path: impl AsRef<Path>, image: &Image<P>) -> Result<()>
where
    P: Pixel<Subpixel = u8> + PixelWithColorType,
{
    let path = path.as_ref();
    image
        .save(path)
        .map_err(|err| Error::OutputUnwritable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
    debug!(path = %path.display(), "wrote image");
    Ok(())
}
