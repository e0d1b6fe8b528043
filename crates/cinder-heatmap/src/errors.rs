/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use cinder_core::bytestream::ByteIoError;
use cinder_png::PngEncodeErrors;

/// Heat-map rendering errors
pub enum HeatMapEncodeErrors {
    /// Width or height of the output raster is zero
    ZeroDimensions(usize, usize),
    /// Generic message
    Static(&'static str),
    PngErrors(PngEncodeErrors),
    IoErrors(ByteIoError)
}

impl Debug for HeatMapEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            HeatMapEncodeErrors::ZeroDimensions(width, height) => {
                writeln!(
                    f,
                    "Zero is not a valid raster size, found width {width}, height {height}"
                )
            }
            HeatMapEncodeErrors::Static(err) => writeln!(f, "{}", err),
            HeatMapEncodeErrors::PngErrors(err) => writeln!(f, "Png encoding failed: {:?}", err),
            HeatMapEncodeErrors::IoErrors(err) => writeln!(f, "I/O error {:?}", err)
        }
    }
}

impl Display for HeatMapEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for HeatMapEncodeErrors {}

impl From<&'static str> for HeatMapEncodeErrors {
    fn from(value: &'static str) -> Self {
        HeatMapEncodeErrors::Static(value)
    }
}

impl From<PngEncodeErrors> for HeatMapEncodeErrors {
    fn from(value: PngEncodeErrors) -> Self {
        HeatMapEncodeErrors::PngErrors(value)
    }
}

impl From<ByteIoError> for HeatMapEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        HeatMapEncodeErrors::IoErrors(value)
    }
}

impl From<std::io::Error> for HeatMapEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        HeatMapEncodeErrors::IoErrors(ByteIoError::StdIoError(value))
    }
}
