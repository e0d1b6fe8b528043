/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufWriter;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use cinder_heatmap::{HeatMap, HeatMapEncodeErrors};
use cinder_png::PngEncodeErrors;
use nanorand::{Rng, WyRand};

fn noise_map() -> HeatMap {
    let mut rng = WyRand::new_seed(0x5EED_CAFE);
    let mut map = HeatMap::new(16, 16);

    for value in map.values_mut() {
        *value = f64::from(rng.generate::<u8>()) / 255.0;
    }
    map
}

#[test]
fn test_every_sink_yields_identical_bytes() {
    let map = noise_map();
    let options = map.render_options();

    let mut reference = Vec::new();
    let written = map.encode(options, &mut reference).unwrap();

    assert_eq!(written, reference.len());

    // fixed slice of exactly the right size
    let mut fixed = vec![0_u8; reference.len()];
    let written = map.encode(options, &mut fixed[..]).unwrap();

    assert_eq!(written, reference.len());
    assert_eq!(fixed, reference);

    // buffered file
    let path = std::env::temp_dir().join("cinder_tests_sink_equiv.png");
    let mut writer = BufWriter::new(File::create(&path).unwrap());

    map.encode(options, &mut writer).unwrap();
    drop(writer);

    let from_disk = std::fs::read(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(from_disk, reference);

    // data url carries the same bytes
    let url = map.data_url().unwrap();
    let body = url.strip_prefix("data:image/png;base64,").unwrap();

    assert_eq!(STANDARD.decode(body).unwrap(), reference);
}

#[test]
fn test_short_sink_reports_not_enough_buffer() {
    let map = noise_map();

    let mut tiny = [0_u8; 16];
    let error = map.encode(map.render_options(), &mut tiny[..]).unwrap_err();

    assert!(matches!(
        error,
        HeatMapEncodeErrors::PngErrors(PngEncodeErrors::IoErrors(_))
    ));
}
