/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use cinder_heatmap::HeatMap;
use png::Transformations;

mod pipeline;
mod sinks;

/// Decode a png into its raw palette indices
pub fn decode_indices(data: &[u8]) -> Vec<u8> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(Transformations::IDENTITY);

    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    buf
}

/// A diagonal gradient covering the whole colour range
pub fn gradient_map(width: usize, height: usize) -> HeatMap {
    let peak = (width + height - 2) as f64;

    HeatMap::from_fn(width, height, move |x, y| (x + y) as f64 / peak)
}

/// Split a png byte stream into its chunks as (tag, body) pairs
pub fn split_chunks(file: &[u8]) -> Vec<(String, Vec<u8>)> {
    assert_eq!(
        &file[..8],
        &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]
    );

    let mut chunks = Vec::new();
    let mut offset = 8;

    while offset < file.len() {
        let length = u32::from_be_bytes(file[offset..offset + 4].try_into().unwrap()) as usize;
        let tag = std::str::from_utf8(&file[offset + 4..offset + 8])
            .unwrap()
            .to_string();
        let body = file[offset + 8..offset + 8 + length].to_vec();

        chunks.push((tag, body));

        // length, tag and crc surround the body
        offset += length + 12;
    }
    chunks
}
