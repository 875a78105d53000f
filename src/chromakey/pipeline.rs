use std::path::Path;

use image::{Luma, Rgb, Rgba};
use imageproc::definitions::Image;
use tracing::{debug, debug_span};

use crate::chromakey::alpha::PromoteAlpha;
use crate::chromakey::anchor::Anchor;
use crate::chromakey::composite::Compositor;
use crate::chromakey::cutout::{Cutout, CutoutExtractor};
use crate::chromakey::mask::InvertMask;
use crate::chromakey::resize::{ColorInterpolation, OutputSize};
use crate::chromakey::segment::{HueSegmenter, MaskPolarity};
use crate::chromakey::threshold::ThresholdSet;
use crate::error::Result;
use crate::io::{load_subject, load_target};

/// Settings for a full segmentation, extraction and compositing run
///
/// The defaults describe a green screen subject placed bottom-center as a
/// 300x400 cut-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub thresholds: ThresholdSet,
    pub polarity: MaskPolarity,
    pub output_size: OutputSize,
    pub interpolation: ColorInterpolation,
    pub anchor: Anchor,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdSet::green_screen(),
            polarity: MaskPolarity::Background,
            output_size: OutputSize::DEFAULT,
            interpolation: ColorInterpolation::Linear,
            anchor: Anchor::BottomCenter,
        }
    }
}

impl PipelineConfig {
    pub fn with_thresholds(mut self, thresholds: ThresholdSet) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_polarity(mut self, polarity: MaskPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_output_size(mut self, output_size: OutputSize) -> Self {
        self.output_size = output_size;
        self
    }

    pub fn with_interpolation(mut self, interpolation: ColorInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Everything a pipeline run produces
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Mask in the configured polarity, for diagnostics
    pub mask: Image<Luma<u8>>,
    pub cutout: Cutout,
    pub composite: Image<Rgba<u8>>,
}

/// Segmenter, extractor and compositor wired together
#[derive(Debug, Clone)]
pub struct ChromaKeyPipeline {
    segmenter: HueSegmenter,
    extractor: CutoutExtractor,
    compositor: Compositor,
}

impl Default for ChromaKeyPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl ChromaKeyPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            segmenter: HueSegmenter::new(config.thresholds).with_polarity(config.polarity),
            extractor: CutoutExtractor::new(config.output_size)
                .with_interpolation(config.interpolation),
            compositor: Compositor::new(config.anchor),
        }
    }

    pub fn segmenter(&self) -> &HueSegmenter {
        &self.segmenter
    }

    pub fn extractor(&self) -> &CutoutExtractor {
        &self.extractor
    }

    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Runs all three stages on in-memory images.
    ///
    /// # Errors
    ///
    /// Any stage error, returned as soon as it happens
    pub fn run<T>(&self, subject: &Image<Rgb<u8>>, target: &T) -> Result<PipelineOutput>
    where
        T: PromoteAlpha + image::GenericImageView,
    {
        let span = debug_span!(
            "chromakey",
            subject = ?subject.dimensions(),
            target = ?target.dimensions()
        );
        let _enter = span.enter();

        let background = self.segmenter.segment(subject);
        debug!(
            thresholds = %self.segmenter.thresholds(),
            background_pixels = background.iter().filter(|&&v| v != 0).count(),
            "segmented subject"
        );

        let cutout = self.extractor.extract(subject, &background)?;
        debug!(size = ?cutout.dimensions(), "extracted cut-out");

        let composite = self.compositor.composite(target, &cutout)?;
        debug!(anchor = ?self.compositor.anchor(), "composited cut-out");

        let mask = match self.segmenter.polarity() {
            MaskPolarity::Background => background,
            MaskPolarity::Foreground => background.invert_mask(),
        };

        Ok(PipelineOutput {
            mask,
            cutout,
            composite,
        })
    }

    /// Loads both images from disk and runs the pipeline.
    ///
    /// # Errors
    ///
    /// * `Error::ResourceUnavailable` - When either image cannot be loaded;
    ///   no stage runs in that case
    pub fn run_paths(
        &self,
        subject_path: impl AsRef<Path>,
        target_path: impl AsRef<Path>,
    ) -> Result<PipelineOutput> {
        let subject = load_subject(subject_path)?;
        let target = load_target(target_path)?;
        self.run(&subject, &target)
    }

    /// Runs the pipeline over independent (subject, target) pairs.
    ///
    /// Results keep the order of the input pairs. With the `rayon` feature
    /// the pairs are processed in parallel.
    pub fn run_batch<T>(&self, pairs: &[(Image<Rgb<u8>>, T)]) -> Vec<Result<PipelineOutput>>
    where
        T: PromoteAlpha + image::GenericImageView + Sync,
    {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(subject, target)| self.run(subject, target))
                .collect()
        }

        #[cfg(not(feature = "rayon"))]
        {
            pairs
                .iter()
                .map(|(subject, target)| self.run(subject, target))
                .collect()
        }
    }
}
