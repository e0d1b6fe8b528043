/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A write-only bytestream with endian aware writes
//!
//! This module exposes [`ByteWriter`], an endian aware writer that
//! counts the bytes it has written, and [`ByteWriterTrait`], the sink
//! trait the writer drives.
//!
//! Sinks are implemented for in memory vectors, fixed slices and
//! buffered files, encoders stay generic over the destination.

pub use errors::*;
pub use traits::*;
pub use writer::*;

mod errors;
mod traits;
mod writer;
