/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A restricted zlib encoder.
//!
//! This crate features a deflate/zlib encoder that only ever emits
//! fixed huffman blocks with back references no further than four
//! bytes away. It trades compression ratio for a very small and fully
//! auditable implementation.
//!
//! Use it if
//! - You want to emit valid zlib streams without pulling in a full
//!   compression library
//! - You control both producer and consumer and care about simple,
//!   deterministic output
//! - You want a 100% safe, pure rust implementation with the above.
//!
//! Any conformant inflate implementation can decode the streams this
//! encoder produces.
//!
//! # Usage
//!
//! Encoding zlib data
//!
//! ```
//! use cinder_deflate::DeflateEncoder;
//! let data = b"deterministic and small";
//! let mut encoder = DeflateEncoder::new(data);
//!
//! let compressed = encoder.encode_zlib();
//! ```
//!
//! Encoding with explicit block boundaries
//! ```
//! use cinder_deflate::DeflateEncoder;
//! let data = [0_u8; 64];
//! let mut encoder = DeflateEncoder::new_with_block_size(&data, 16);
//!
//! let compressed = encoder.encode_zlib();
//! ```
#![forbid(unsafe_code)]

pub use crate::adler::{calc_adler_hash, Adler32};
pub use crate::bit_writer::BitWriter;
pub use crate::encoder::DeflateEncoder;

mod adler;
mod bit_writer;
mod constants;
mod encoder;
