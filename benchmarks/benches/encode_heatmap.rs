/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use cinder_core::options::RenderOptions;
use cinder_heatmap::HeatMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn render_cinder(map: &HeatMap, options: RenderOptions) -> Vec<u8> {
    let mut sink = Vec::new();

    map.encode(options, &mut sink).unwrap();

    sink
}

fn encode_png_crate(indices: &[u8], palette: &[u8], width: u32, height: u32) -> Vec<u8> {
    let mut out = Vec::new();

    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(palette.to_vec());

    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(indices).unwrap();
    writer.finish().unwrap();

    out
}

fn render_test_identity(c: &mut Criterion) {
    let map = HeatMap::from_fn(512, 512, |x, y| (x + y) as f64 / 1022.0);
    let options = map.render_options();

    // the same raster shaped for the png crate, indexed eight bit
    let indices: Vec<u8> = (0..512 * 512)
        .map(|i| (((i % 512) + (i / 512)) * 255 / 1022) as u8)
        .collect();
    let palette: Vec<u8> = (0..=255_u8).flat_map(|i| [i, i, i]).collect();

    let mut group = c.benchmark_group("heatmap: 512x512 render, one pixel per cell");
    group.throughput(Throughput::Bytes((512 * 512) as u64));

    group.bench_function("cinder-heatmap", |b| {
        b.iter(|| black_box(render_cinder(&map, options)))
    });

    group.bench_function("png, pre quantized", |b| {
        b.iter(|| black_box(encode_png_crate(&indices, &palette, 512, 512)))
    });
}

fn render_test_upscale(c: &mut Criterion) {
    let map = HeatMap::from_fn(64, 64, |x, y| (x + y) as f64 / 126.0);
    let options = RenderOptions::new(512, 512);

    let mut group = c.benchmark_group("heatmap: 64x64 grid resampled to 512x512");
    group.throughput(Throughput::Bytes((512 * 512) as u64));

    group.bench_function("cinder-heatmap", |b| {
        b.iter(|| black_box(render_cinder(&map, options)))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(10))
      };
    targets=render_test_identity,render_test_upscale);

criterion_main!(benches);
