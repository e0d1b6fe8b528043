/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Adler-32 checksum routines
//!
//! The zlib wrapper carries an Adler-32 checksum of the uncompressed
//! bytes after the last deflate block. The hasher here is streaming,
//! the encoder feeds it block by block as bytes go through.

/// Largest prime smaller than 2^16
const ADLER_MODULUS: u32 = 65521;

/// Largest n such that n unreduced rounds keep both sums below 2^32
const NMAX: usize = 5552;

/// A streaming Adler-32 hasher
///
/// Bytes may be pushed over any number of [`update`](Adler32::update)
/// calls, the result is identical to hashing them in one go
#[derive(Copy, Clone, Debug)]
pub struct Adler32 {
    a: u32,
    b: u32
}

impl Adler32 {
    /// Create a new hasher in the starting state
    pub const fn new() -> Adler32 {
        Adler32 { a: 1, b: 0 }
    }

    /// Add `data` to the running checksum
    pub fn update(&mut self, data: &[u8]) {
        // the modulo is deferred to every NMAX bytes, within that
        // window neither sum can overflow a u32
        for chunk in data.chunks(NMAX) {
            for byte in chunk {
                self.a += u32::from(*byte);
                self.b += self.a;
            }
            self.a %= ADLER_MODULUS;
            self.b %= ADLER_MODULUS;
        }
    }

    /// Return the checksum of every byte seen so far
    pub const fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Adler32::new()
    }
}

/// Calculate the adler hash of `data` in one shot
pub fn calc_adler_hash(data: &[u8]) -> u32 {
    let mut hash = Adler32::new();
    hash.update(data);
    hash.finish()
}

#[cfg(test)]
mod tests {
    use crate::adler::{calc_adler_hash, Adler32};

    #[test]
    fn test_empty_input_hashes_to_one() {
        assert_eq!(calc_adler_hash(&[]), 1);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(calc_adler_hash(b"Wikipedia"), 0x11E6_0398);
        assert_eq!(calc_adler_hash(&[0x00]), 0x0001_0001);
        assert_eq!(calc_adler_hash(&[0xFF]), 0x0100_0100);
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data: Vec<u8> = (0..=255).cycle().take(40_000).collect();

        let mut streaming = Adler32::new();

        for chunk in data.chunks(977) {
            streaming.update(chunk);
        }
        assert_eq!(streaming.finish(), calc_adler_hash(&data));
    }

    #[test]
    fn test_long_runs_of_high_bytes() {
        // worst case input for the deferred modulo
        let data = vec![0xFF_u8; 100_000];

        let mut reference_a: u64 = 1;
        let mut reference_b: u64 = 0;

        for byte in &data {
            reference_a = (reference_a + u64::from(*byte)) % 65521;
            reference_b = (reference_b + reference_a) % 65521;
        }
        let reference = ((reference_b as u32) << 16) | (reference_a as u32);

        assert_eq!(calc_adler_hash(&data), reference);
    }
}
