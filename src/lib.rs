mod chromakey;
mod error;
pub mod io;
#[cfg(test)]
mod test_utils;
mod utils;

use image::{ImageBuffer, Pixel};

pub use chromakey::alpha::{ApplyAlphaMask, DropAlpha, PromoteAlpha, SelectByMask};
pub use chromakey::anchor::{Anchor, AnchorRect};
pub use chromakey::composite::{blend, Compositor};
pub use chromakey::cutout::{Cutout, CutoutExtractor};
pub use chromakey::hue::{hue_histogram, rgb_to_hue, visualize_hue, HueChannel, HUE_BINS, MAX_HUE};
pub use chromakey::mask::{is_binary_mask, InvertMask};
pub use chromakey::pipeline::{ChromaKeyPipeline, PipelineConfig, PipelineOutput};
pub use chromakey::resize::{resize_color, resize_nearest, ColorInterpolation, OutputSize};
pub use chromakey::segment::{background_mask, HueSegmenter, MaskPolarity, MASK_OFF, MASK_ON};
pub use chromakey::threshold::{HueRange, ThresholdSet};
pub use error::{Error, Result};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
