/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use cinder_core::bytestream::ByteIoError;

/// PNG encoding errors
pub enum PngEncodeErrors {
    /// Width or height of the output raster is zero
    ZeroDimensions(usize, usize),
    /// A dimension does not fit in the 31 bits the format allows
    TooLargeDimensions(&'static str, usize),
    /// The index buffer length does not match width times height
    WrongInputSize(usize, usize),
    /// Generic message
    Static(&'static str),
    IoErrors(ByteIoError)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PngEncodeErrors::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Zero is not a valid raster size, found width {width}, height {height}"
                )
            }
            PngEncodeErrors::TooLargeDimensions(dimension, found) => {
                writeln!(
                    f,
                    "Too large {dimension} for png, {found} exceeds 2147483647"
                )
            }
            PngEncodeErrors::WrongInputSize(expected, found) => {
                writeln!(f, "Input array length {found} doesn't match {expected}")
            }
            PngEncodeErrors::Static(err) => writeln!(f, "{}", err),
            PngEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<&'static str> for PngEncodeErrors {
    fn from(value: &'static str) -> Self {
        PngEncodeErrors::Static(value)
    }
}

impl From<ByteIoError> for PngEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        PngEncodeErrors::IoErrors(value)
    }
}
