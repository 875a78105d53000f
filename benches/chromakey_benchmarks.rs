//! Performance benchmarks for chromakey-ops
//!
//! Measures each pipeline stage and the full run on green screen inputs of
//! increasing size.

use criterion::*;
use chromakey_ops::{
    ChromaKeyPipeline, ColorInterpolation, Compositor, Cutout, CutoutExtractor, HueChannel,
    HueSegmenter, Image, OutputSize, PipelineConfig, ThresholdSet,
};
use image::{Rgb, Rgba};
use itertools::iproduct;
use std::hint::black_box;

/// Green screen with a red ellipse standing on the bottom edge
fn create_subject(width: u32, height: u32) -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(width, height);
    let center_x = width as f32 / 2.0;
    let radius_x = width as f32 / 4.0;
    let radius_y = height as f32 / 2.0;

    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let dx = (x as f32 - center_x) / radius_x;
        let dy = (y as f32 - height as f32) / radius_y;
        let pixel = if dx * dx + dy * dy <= 1.0 {
            Rgb([200, (x % 64) as u8, 30])
        } else {
            Rgb([20, 230, (y % 40) as u8])
        };
        image.put_pixel(x, y, pixel);
    });

    image
}

fn create_target(width: u32, height: u32) -> Image<Rgb<u8>> {
    let mut image: Image<Rgb<u8>> = Image::new(width, height);
    iproduct!(0..height, 0..width).for_each(|(y, x)| {
        let r = ((x * 255) / width) as u8;
        let g = ((y * 255) / height) as u8;
        image.put_pixel(x, y, Rgb([r, g, 128]));
    });
    image
}

fn bench_segment(c: &mut Criterion) {
    let sizes = vec![(320, 240), (640, 480), (1280, 720), (1920, 1080)];
    let segmenter = HueSegmenter::new(ThresholdSet::green_screen());

    let mut group = c.benchmark_group("segment");
    group.sample_size(10);

    for (width, height) in sizes {
        let subject = create_subject(width, height);
        group.throughput(Throughput::Elements(u64::from(width * height)));

        group.bench_with_input(
            BenchmarkId::new("hue_channel", format!("{width}x{height}")),
            &subject,
            |b, subject| b.iter(|| black_box(subject.hue_channel())),
        );
        group.bench_with_input(
            BenchmarkId::new("background_mask", format!("{width}x{height}")),
            &subject,
            |b, subject| b.iter(|| black_box(segmenter.segment(subject))),
        );
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let subject = create_subject(1280, 720);
    let mask = HueSegmenter::new(ThresholdSet::green_screen()).segment(&subject);

    let mut group = c.benchmark_group("extract");
    group.sample_size(10);

    for interpolation in [ColorInterpolation::Linear, ColorInterpolation::Area] {
        let extractor = CutoutExtractor::new(OutputSize::DEFAULT).with_interpolation(interpolation);
        group.bench_function(format!("{interpolation:?}"), |b| {
            b.iter(|| black_box(extractor.extract(&subject, &mask).unwrap()))
        });
    }

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let target = create_target(1920, 1080);
    let cutout: Cutout = Image::from_fn(300, 400, |x, y| {
        Rgba([255, 0, 0, if (x + y) % 3 == 0 { 0 } else { 255 }])
    });
    let compositor = Compositor::default();

    c.bench_function("composite_300x400_into_1920x1080", |b| {
        b.iter(|| black_box(compositor.composite(&target, &cutout).unwrap()))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let subject = create_subject(1280, 720);
    let target = create_target(1920, 1080);
    let pipeline = ChromaKeyPipeline::new(PipelineConfig::default());

    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);
    group.bench_function("run_1280x720_onto_1920x1080", |b| {
        b.iter(|| black_box(pipeline.run(&subject, &target).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_segment,
    bench_extract,
    bench_composite,
    bench_pipeline
);
criterion_main!(benches);
