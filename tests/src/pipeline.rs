/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use cinder_core::options::RenderOptions;
use cinder_heatmap::HeatMap;

use crate::{decode_indices, gradient_map, split_chunks};

fn encode(map: &HeatMap, options: RenderOptions) -> Vec<u8> {
    let mut sink = Vec::new();

    map.encode(options, &mut sink).unwrap();

    sink
}

#[test]
fn test_gradient_rows_step_monotonically() {
    let map = gradient_map(64, 48);
    let indices = decode_indices(&encode(&map, map.render_options()));

    assert_eq!(indices[0], 0);
    assert_eq!(*indices.last().unwrap(), 255);

    for (y, row) in indices.chunks_exact(64).enumerate() {
        for (x, pair) in row.windows(2).enumerate() {
            // the dither carry may dip a step by one, never more
            assert!(
                i16::from(pair[1]) + 1 >= i16::from(pair[0]),
                "row {y} falls back at {x}: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_chunk_layout_is_fixed() {
    let map = gradient_map(20, 15);
    let file = encode(&map, map.render_options());

    let chunks = split_chunks(&file);
    let tags: Vec<&str> = chunks.iter().map(|(tag, _)| tag.as_str()).collect();

    assert_eq!(tags, ["IHDR", "PLTE", "IDAT", "IEND"]);

    assert_eq!(chunks[0].1.len(), 13);
    assert_eq!(chunks[1].1.len(), 768);
    assert!(chunks[3].1.is_empty());
}

#[test]
fn test_idat_holds_one_zlib_stream_of_filtered_rows() {
    let (width, height) = (40, 25);

    let map = gradient_map(width, height);
    let file = encode(&map, map.render_options());

    let chunks = split_chunks(&file);
    let idat: Vec<&(String, Vec<u8>)> =
        chunks.iter().filter(|(tag, _)| tag == "IDAT").collect();

    // the whole stream lives in a single chunk
    assert_eq!(idat.len(), 1);

    let mut filtered = Vec::new();
    flate2::read::ZlibDecoder::new(idat[0].1.as_slice())
        .read_to_end(&mut filtered)
        .unwrap();

    assert_eq!(filtered.len(), height * (width + 1));

    for row in filtered.chunks_exact(width + 1) {
        assert_eq!(row[0], 3, "every scanline uses the average filter");
    }
}

#[test]
fn test_many_raster_sizes_decode() {
    let map = gradient_map(31, 17);

    for (width, height) in [(1, 1), (1, 64), (200, 3), (97, 61), (31, 17)] {
        let file = encode(&map, RenderOptions::new(width, height));
        let indices = decode_indices(&file);

        assert_eq!(indices.len(), width * height, "broken at {width}x{height}");
    }
}

#[test]
fn test_non_finite_values_saturate() {
    let mut map = HeatMap::new(3, 1);

    map.set(0, 0, f64::INFINITY);
    map.set(1, 0, f64::NEG_INFINITY);
    map.set(2, 0, f64::NAN);

    let indices = decode_indices(&encode(&map, map.render_options()));

    assert_eq!(indices, [255, 0, 255]);
}
