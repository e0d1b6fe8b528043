/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The fixed huffman deflate encoder
//!
//! Every block is emitted with the fixed huffman tables, so no table
//! ever has to be described in the stream. The match searcher only
//! looks four bytes back, which keeps the length and distance
//! alphabets down to the handful of codes written here and still
//! picks up the short periodic runs the inputs we care about contain.

use crate::adler::Adler32;
use crate::bit_writer::BitWriter;
use crate::constants::{DEFLATE_BLOCKTYPE_FIXED, MAX_MATCH, MAX_MATCH_DISTANCE, MIN_MATCH};

/// A zlib encoder restricted to fixed huffman blocks
///
/// The input is split into blocks of a caller chosen size, each block
/// compressed independently, matches never cross a block boundary.
pub struct DeflateEncoder<'a> {
    data:       &'a [u8],
    block_size: usize,
    bit_writer: BitWriter,
    hash:       Adler32
}

impl<'a> DeflateEncoder<'a> {
    /// Create a new deflate encoder that compresses `data`
    /// as a single block
    pub fn new(data: &'a [u8]) -> DeflateEncoder<'a> {
        DeflateEncoder::new_with_block_size(data, data.len().max(1))
    }

    /// Create a new deflate encoder that splits `data` into blocks of
    /// `block_size` bytes, each emitted as its own deflate block
    ///
    /// The last block may be shorter when the input length is not a
    /// multiple of `block_size`
    ///
    /// # Panics
    /// If `block_size` is zero
    pub fn new_with_block_size(data: &'a [u8], block_size: usize) -> DeflateEncoder<'a> {
        assert_ne!(block_size, 0);

        DeflateEncoder {
            data,
            block_size,
            bit_writer: BitWriter::with_capacity(data.len() + data.len() / 8 + 64),
            hash: Adler32::new()
        }
    }

    fn write_zlib_header(&mut self) {
        const ZLIB_CM_DEFLATE: u16 = 8;
        const ZLIB_CINFO_32K_WINDOW: u16 = 7;

        // level hint stays zero, bits 6..8 advertise the fastest level
        let mut hdr = (ZLIB_CM_DEFLATE << 8) | (ZLIB_CINFO_32K_WINDOW << 12);
        hdr |= 31 - (hdr % 31);

        self.bit_writer.dest.extend_from_slice(&hdr.to_be_bytes());
    }

    /// Encode the whole input, returning the zlib stream
    ///
    /// The encoder is spent after this call, a second call returns
    /// a stream of zero bytes
    pub fn encode_zlib(&mut self) -> Vec<u8> {
        self.write_zlib_header();

        let data = self.data;

        if data.is_empty() {
            // a zero length input still needs one final block for the
            // output to be a valid stream
            self.encode_block(&[], true);
        } else {
            let blocks = data.chunks(self.block_size);
            let num_blocks = blocks.len();

            for (i, block) in blocks.enumerate() {
                self.encode_block(block, i + 1 == num_blocks);
            }
        }
        self.bit_writer.zero_pad();
        self.bit_writer.flush();

        // adler hash of the uncompressed bytes closes the stream
        let hash = self.hash.finish();
        self.bit_writer.dest.extend_from_slice(&hash.to_be_bytes());

        core::mem::take(&mut self.bit_writer.dest)
    }

    /// Encode one block of input as a fixed huffman block
    fn encode_block(&mut self, block: &[u8], is_final: bool) {
        self.hash.update(block);

        // three bit block header, BFINAL enters the stream first
        self.bit_writer
            .put_bits(3, u64::from(is_final) | (DEFLATE_BLOCKTYPE_FIXED << 1));

        let mut write_index = 0;

        while write_index < block.len() {
            let (distance, length) = longest_match(block, write_index);

            if length >= MIN_MATCH {
                self.write_match(distance, length);
                write_index += length;
            } else {
                self.write_literal(block[write_index]);
                write_index += 1;
            }
        }
        // end of block, symbol 256 is the all zero seven bit code
        self.bit_writer.put_code(0, 7);
    }

    /// Write a literal byte using the fixed huffman table
    fn write_literal(&mut self, literal: u8) {
        if literal < 144 {
            // 0..=143 take eight bit codes starting at 0b0011_0000
            self.bit_writer.put_code(u16::from(literal) + 48, 8);
        } else {
            // 144..=255 take nine bit codes starting at 0b1_1001_0000
            self.bit_writer.put_code(u16::from(literal) + 0x100, 9);
        }
    }

    /// Write a length-distance pair
    ///
    /// Lengths map to the seven bit codes of symbols 257 to 268,
    /// lengths 11 and up carry one extra bit. Distances are the plain
    /// five bit codes that take no extra bits
    fn write_match(&mut self, distance: usize, length: usize) {
        debug_assert!((MIN_MATCH..=MAX_MATCH).contains(&length));
        debug_assert!((1..=MAX_MATCH_DISTANCE).contains(&distance));

        if length <= 10 {
            // lengths 3..=10, symbols 257..=264
            self.bit_writer.put_code((length - 2) as u16, 7);
        } else {
            // lengths 11..=18, symbols 265..=268, one extra bit each
            let extra = (length - 11) as u64;

            self.bit_writer.put_code((9 + extra / 2) as u16, 7);
            self.bit_writer.put_bits(1, extra & 1);
        }
        self.bit_writer.put_code((distance - 1) as u16, 5);
    }
}

/// Search for the longest back reference at `write_index` within
/// the current block
///
/// Returns a (distance, length) pair, ties keep the smallest
/// distance. Matches repeat with a period of `distance`, so the
/// lookback cycles inside the already written bytes
fn longest_match(block: &[u8], write_index: usize) -> (usize, usize) {
    let mut best_distance = 0;
    let mut best_length = 1;

    let max_length = (block.len() - write_index).min(MAX_MATCH);

    for distance in 1..=MAX_MATCH_DISTANCE.min(write_index) {
        let mut length = 0;

        while length < max_length
            && block[write_index - distance + (length % distance)] == block[write_index + length]
        {
            length += 1;
        }
        if length > best_length {
            best_length = length;
            best_distance = distance;
        }
    }
    (best_distance, best_length)
}
