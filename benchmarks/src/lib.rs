/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Build `height` scanlines the shape the png encoder feeds the
/// compressor, a filter byte followed by `width` low entropy bytes
pub fn filtered_scanlines(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(height * (width + 1));

    for y in 0..height {
        data.push(3);

        for x in 0..width {
            data.push(((x * 7 + y * 3) & 63) as u8);
        }
    }
    data
}
