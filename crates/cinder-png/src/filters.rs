/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline filtering
//!
//! Palette images carry one byte per pixel and every scanline is
//! prefixed with a filter type byte. This encoder always uses the
//! Average filter, each emitted byte is the difference from the
//! rounded down mean of its left and above neighbours.

/// Filter type byte prefixed to every scanline
pub(crate) const FILTER_AVERAGE: u8 = 3;

/// Filter `current` into `output` using the Average filter
///
/// `previous` holds the unfiltered bytes of the row above and is
/// empty for the first row. `output` is one byte longer than
/// `current`, the leading byte carries the filter type.
///
/// Neighbours are the actual scanline bytes, not the filtered ones,
/// missing neighbours at the boundaries count as zero
pub(crate) fn filter_scanline(current: &[u8], previous: &[u8], output: &mut [u8]) {
    debug_assert_eq!(output.len(), current.len() + 1);

    output[0] = FILTER_AVERAGE;

    let mut left = 0_u16;

    for (i, (byte, out)) in current.iter().zip(&mut output[1..]).enumerate() {
        let above = u16::from(previous.get(i).copied().unwrap_or(0));
        let predicted = ((left + above) / 2) as u8;

        *out = byte.wrapping_sub(predicted);
        left = u16::from(*byte);
    }
}

#[cfg(test)]
mod tests {
    use crate::filters::{filter_scanline, FILTER_AVERAGE};

    // undo the average filter, mirroring what any png reader does
    fn unfilter_scanline(filtered: &[u8], previous: &[u8]) -> Vec<u8> {
        assert_eq!(filtered[0], FILTER_AVERAGE);

        let mut output = Vec::with_capacity(filtered.len() - 1);
        let mut left = 0_u16;

        for (i, byte) in filtered[1..].iter().enumerate() {
            let above = u16::from(previous.get(i).copied().unwrap_or(0));
            let value = byte.wrapping_add(((left + above) / 2) as u8);

            output.push(value);
            left = u16::from(value);
        }
        output
    }

    #[test]
    fn test_filter_is_reversible() {
        let first_row = [10_u8, 250, 13, 0, 255, 7, 128];
        let second_row = [9_u8, 1, 200, 200, 3, 80, 127];

        let mut filtered_first = [0_u8; 8];
        let mut filtered_second = [0_u8; 8];

        filter_scanline(&first_row, &[], &mut filtered_first);
        filter_scanline(&second_row, &first_row, &mut filtered_second);

        assert_eq!(unfilter_scanline(&filtered_first, &[]), first_row);
        assert_eq!(unfilter_scanline(&filtered_second, &first_row), second_row);
    }

    #[test]
    fn test_first_pixel_of_first_row_passes_through() {
        // both neighbours are zero there, so the prediction is zero
        let row = [77_u8, 77, 77];
        let mut filtered = [0_u8; 4];

        filter_scanline(&row, &[], &mut filtered);

        assert_eq!(filtered[1], 77);
    }

    #[test]
    fn test_constant_row_shrinks_after_first_byte() {
        let row = [100_u8; 16];
        let mut filtered = [0_u8; 17];

        filter_scanline(&row, &[], &mut filtered);

        // after the first byte the prediction stays at half the value
        assert_eq!(filtered[0], FILTER_AVERAGE);
        assert_eq!(filtered[1], 100);
        assert!(filtered[2..].iter().all(|b| *b == 50));
    }

    #[test]
    fn test_row_below_equal_row_filters_to_zero() {
        // with identical rows and a flat value the prediction is exact
        let row = [40_u8; 8];
        let mut filtered = [0_u8; 9];

        filter_scanline(&row, &row, &mut filtered);

        assert_eq!(filtered[1], 20);
        assert!(filtered[2..].iter().all(|b| *b == 0));
    }
}
