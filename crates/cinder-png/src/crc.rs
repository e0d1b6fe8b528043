/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! CRC-32 routines
//!
//! Every png chunk ends with a CRC-32 over its type and data bytes,
//! computed with the reversed polynomial and inverted in and out.

const CRC_POLYNOMIAL: u32 = 0xEDB8_8320;

const fn make_crc_table() -> [u32; 256] {
    let mut table = [0_u32; 256];
    let mut i = 0;

    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;

        while bit < 8 {
            if crc & 1 == 1 {
                crc = CRC_POLYNOMIAL ^ (crc >> 1);
            } else {
                crc >>= 1;
            }
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

static CRC_TABLE: [u32; 256] = make_crc_table();

/// Update a running crc with `data`
///
/// The value passed in and returned stays un-inverted, start from
/// `u32::MAX` and invert the final result to get the checksum
pub(crate) fn calc_crc_with_bytes(data: &[u8], mut crc: u32) -> u32 {
    for byte in data {
        crc = CRC_TABLE[usize::from((crc as u8) ^ byte)] ^ (crc >> 8);
    }
    crc
}

/// Calculate the crc of `data` in one shot
pub(crate) fn calc_crc(data: &[u8]) -> u32 {
    !calc_crc_with_bytes(data, u32::MAX)
}
