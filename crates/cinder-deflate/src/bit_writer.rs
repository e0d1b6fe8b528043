/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bit I/O functionalities
//!
//! Deflate streams pack bits least significant first, while huffman
//! codes enter the stream most significant bit first. The writer
//! exposes both orders, [`put_bits`](BitWriter::put_bits) for raw
//! fields and [`put_code`](BitWriter::put_code) for huffman codes.

/// A bit writer accumulating bits least significant first
/// and appending whole bytes to its output
#[derive(Clone, Debug)]
pub struct BitWriter {
    pub bits_in_buffer: u8,
    pub buffer:         u64,
    pub dest:           Vec<u8>
}

impl BitWriter {
    /// Construct a new bit-writer
    pub fn new() -> BitWriter {
        BitWriter {
            bits_in_buffer: 0,
            buffer:         0,
            dest:           vec![]
        }
    }

    /// Construct a new bit-writer whose output starts with
    /// room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> BitWriter {
        BitWriter {
            bits_in_buffer: 0,
            buffer:         0,
            dest:           Vec::with_capacity(capacity)
        }
    }

    /// Write pending whole bytes into the output buffer
    ///
    /// This may leave between 0-7 bits remaining in the bit buffer
    pub fn flush(&mut self) {
        let buf = self.buffer.to_le_bytes();
        // full bytes only
        let bits_written = self.bits_in_buffer & 56;
        let bytes_written = usize::from(bits_written >> 3);

        self.dest.extend_from_slice(&buf[..bytes_written]);

        // remove those bits we wrote.
        self.buffer >>= bits_written;
        self.bits_in_buffer &= 7;
    }

    /// Put some bits to the buffer
    /// And periodically flush to output when necessary
    ///
    /// # Arguments
    /// - nbits: Number of bits to store in the buffer
    /// - bit: The bits in the buffer
    pub fn put_bits(&mut self, nbits: u8, bit: u64) {
        debug_assert!(nbits <= 56);

        if self.bits_in_buffer + nbits > 56 {
            self.flush();
        }
        // still check, because I don't trust myself
        debug_assert!(nbits + self.bits_in_buffer < 64);

        let mask = (1 << nbits) - 1;

        // add to the top of the bit buffer
        self.buffer |= (mask & bit) << self.bits_in_buffer;
        self.bits_in_buffer += nbits;
    }

    /// Put a huffman code to the buffer
    ///
    /// The code is bit reversed before packing so that its most
    /// significant bit enters the stream first
    ///
    /// # Arguments
    /// - code: The huffman code, at most `nbits` wide
    /// - nbits: Width of the code, between 1 and 16
    pub fn put_code(&mut self, code: u16, nbits: u8) {
        debug_assert!((1..=16).contains(&nbits));

        let reversed = code.reverse_bits() >> (16 - nbits);

        self.put_bits(nbits, u64::from(reversed));
    }

    /// Pad output to be zero aligned
    pub fn zero_pad(&mut self) {
        // flush output first
        self.flush();

        if self.bits_in_buffer != 0 {
            self.put_bits(8 - self.bits_in_buffer, 0);
        }
    }
}
