use std::path::PathBuf;

use anyhow::{Context, Result};
use chromakey_ops::io::{load_subject, load_target, save_image};
use chromakey_ops::{
    hue_histogram, visualize_hue, Anchor, ChromaKeyPipeline, ColorInterpolation, DropAlpha,
    HueChannel, HueSegmenter, MaskPolarity, OutputSize, PipelineConfig, ThresholdSet,
};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "Green screen keying and compositing", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the hue channel of a subject image
    Hue {
        subject: PathBuf,
        /// Output path for the hue visualization
        #[arg(short, long, default_value = "hue.png")]
        output: PathBuf,
    },
    /// Print a 180-bin histogram of subject hue values
    Histogram {
        subject: PathBuf,
        /// Only print bins with at least one pixel
        #[arg(long)]
        non_zero: bool,
    },
    /// Write the segmentation mask of a subject image
    Mask {
        subject: PathBuf,
        #[command(flatten)]
        keying: KeyingArgs,
        /// Write the foreground mask instead of the background mask
        #[arg(long)]
        foreground: bool,
        #[arg(short, long, default_value = "mask.png")]
        output: PathBuf,
    },
    /// Cut the subject out and blend it onto the target image
    Composite {
        subject: PathBuf,
        target: PathBuf,
        #[command(flatten)]
        keying: KeyingArgs,
        /// Cut-out size as WIDTHxHEIGHT
        #[arg(long, default_value = "300x400")]
        size: OutputSize,
        /// Placement of the cut-out inside the target
        #[arg(long, default_value = "bottom-center")]
        anchor: Anchor,
        #[arg(long, value_enum, default_value_t = Interpolation::Linear)]
        interpolation: Interpolation,
        /// Also write the background mask here
        #[arg(long)]
        mask_output: Option<PathBuf>,
        #[arg(short, long, default_value = "composite.png")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct KeyingArgs {
    /// Background hue intervals, e.g. "59-75,80-90" (hue range 0-179)
    #[arg(short, long, default_value = "59-75")]
    thresholds: ThresholdSet,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Interpolation {
    Linear,
    Area,
}

impl From<Interpolation> for ColorInterpolation {
    fn from(value: Interpolation) -> Self {
        match value {
            Interpolation::Linear => Self::Linear,
            Interpolation::Area => Self::Area,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Command::Hue { subject, output } => {
            let subject = load_subject(&subject).context("loading subject")?;
            save_image(&output, &visualize_hue(&subject.hue_channel()))?;
            tracing::info!("Hue channel written to {}", output.display());
        }
        Command::Histogram { subject, non_zero } => {
            let subject = load_subject(&subject).context("loading subject")?;
            let bins = hue_histogram(&subject.hue_channel());
            for (hue, count) in bins.iter().enumerate() {
                if !non_zero || *count > 0 {
                    println!("{hue:3} {count}");
                }
            }
        }
        Command::Mask {
            subject,
            keying,
            foreground,
            output,
        } => {
            let subject = load_subject(&subject).context("loading subject")?;
            let polarity = if foreground {
                MaskPolarity::Foreground
            } else {
                MaskPolarity::Background
            };
            tracing::info!("Thresholds: {}", keying.thresholds);
            let mask = HueSegmenter::new(keying.thresholds)
                .with_polarity(polarity)
                .segment_with_polarity(&subject);
            save_image(&output, &mask)?;
            tracing::info!("{:?} mask written to {}", polarity, output.display());
        }
        Command::Composite {
            subject,
            target,
            keying,
            size,
            anchor,
            interpolation,
            mask_output,
            output,
        } => {
            let config = PipelineConfig::default()
                .with_thresholds(keying.thresholds)
                .with_output_size(size)
                .with_anchor(anchor)
                .with_interpolation(interpolation.into());
            tracing::info!("Thresholds: {}", config.thresholds);
            tracing::info!("Cut-out: {}x{}", size.width(), size.height());

            let subject = load_subject(&subject).context("loading subject")?;
            let target = load_target(&target).context("loading target")?;
            let result = ChromaKeyPipeline::new(config)
                .run(&subject, &target)
                .context("compositing")?;

            if let Some(mask_output) = mask_output {
                save_image(&mask_output, &result.mask)?;
            }
            save_image(&output, &result.composite.drop_alpha())?;
            tracing::info!("Composite written to {}", output.display());
        }
    }

    Ok(())
}
