/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use cinder_core::bytestream::ByteWriterTrait;
use cinder_core::options::RenderOptions;
use cinder_png::PngEncoder;
use log::trace;

use crate::colormap::derive_palette;
use crate::errors::HeatMapEncodeErrors;
use crate::heatmap::HeatMap;
use crate::resample::Resampler;

/// Rendering entry points
impl HeatMap {
    /// Render the grid and encode it as a png into `sink`
    ///
    /// The sink can be a `&mut Vec<u8>`, a fixed `&mut [u8]` or a
    /// `&mut BufWriter<File>`. Returns the number of bytes written.
    ///
    /// Rendering the same grid with the same options twice produces
    /// byte-identical output.
    pub fn encode<T: ByteWriterTrait>(
        &self, options: RenderOptions, sink: T
    ) -> Result<usize, HeatMapEncodeErrors> {
        let out_width = options.width();
        let out_height = options.height();

        if out_width == 0 || out_height == 0 {
            return Err(HeatMapEncodeErrors::ZeroDimensions(out_width, out_height));
        }
        let out_size = out_width
            .checked_mul(out_height)
            .ok_or(HeatMapEncodeErrors::Static("width * height overflows"))?;

        trace!(
            "rendering a {}x{} grid to a {out_width}x{out_height} raster",
            self.width(),
            self.height()
        );

        let palette = derive_palette(self.colormap(), options.light());
        let resampler = Resampler::new(self, out_width, out_height);

        let mut indices = vec![0_u8; out_size];

        for (y, row) in indices.chunks_exact_mut(out_width).enumerate() {
            let sample_y = if options.flipped_y() {
                out_height - 1 - y
            } else {
                y
            };
            dither_row(&resampler, sample_y, row);
        }

        let bytes_written = PngEncoder::new(&indices, &palette, options).encode(sink)?;

        Ok(bytes_written)
    }

    /// Render to a file, one pixel per grid cell
    ///
    /// The file is created or truncated.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), HeatMapEncodeErrors> {
        self.save_with_options(path, self.render_options())
    }

    /// Render to a file with explicit options
    pub fn save_with_options<P: AsRef<Path>>(
        &self, path: P, options: RenderOptions
    ) -> Result<(), HeatMapEncodeErrors> {
        let mut file = std::io::BufWriter::new(
            std::fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?
        );
        self.encode(options, &mut file)?;

        Ok(())
    }

    /// Render to a `data:image/png;base64,` URL, one pixel per grid cell
    pub fn data_url(&self) -> Result<String, HeatMapEncodeErrors> {
        self.data_url_with_options(self.render_options())
    }

    /// Render to a `data:image/png;base64,` URL with explicit options
    pub fn data_url_with_options(
        &self, options: RenderOptions
    ) -> Result<String, HeatMapEncodeErrors> {
        let mut png = Vec::new();

        self.encode(options, &mut png)?;

        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&png)))
    }
}

/// Quantize one output row to palette indices, carrying the rounding
/// remainder to the next pixel
///
/// The carry resets at every row start so rows quantize independently.
fn dither_row(resampler: &Resampler, sample_y: usize, row: &mut [u8]) {
    let mut remainder = 0.0;

    for (x, index) in row.iter_mut().enumerate() {
        let value = resampler.sample(x, sample_y) * 255.0 + remainder;
        let rounded = value.round();

        remainder = value - rounded;
        *index = (rounded as i32).clamp(0, 255) as u8;
    }
}
