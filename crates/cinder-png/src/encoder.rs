/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use cinder_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};
use cinder_core::options::RenderOptions;
use cinder_deflate::DeflateEncoder;
use log::trace;

use crate::chunks::{write_chunk, write_chunk_fn, write_iend, write_ihdr, write_plte, write_trns};
use crate::constants::{MAX_DIMENSIONS, PNG_SIGNATURE};
use crate::errors::PngEncodeErrors;
use crate::filters::filter_scanline;

/// An encoder for eight bit indexed png images
///
/// The encoder takes one palette index per pixel plus the 256 entry
/// RGBA palette the indices point into, and writes a non interlaced
/// palette image. Alpha values below 255 anywhere in the palette
/// cause a `tRNS` chunk to be written
pub struct PngEncoder<'a> {
    pub(crate) options:         RenderOptions,
    pub(crate) data:            &'a [u8],
    pub(crate) palette:         &'a [[u8; 4]; 256],
    pub(crate) encoded_chunks:  Vec<u8>,
    pub(crate) filter_scanline: Vec<u8>
}

impl<'a> PngEncoder<'a> {
    /// Create a new encoder that encodes the palette indices in
    /// `data` into a PNG image
    ///
    /// `data` is expected to hold exactly `options.width() * options.height()`
    /// bytes in row major order
    pub fn new(
        data: &'a [u8], palette: &'a [[u8; 4]; 256], options: RenderOptions
    ) -> PngEncoder<'a> {
        PngEncoder {
            options,
            data,
            palette,
            encoded_chunks: vec![],
            filter_scanline: vec![]
        }
    }

    pub(crate) fn encode_headers<T: ByteWriterTrait>(
        &self, writer: &mut ByteWriter<T>
    ) -> Result<(), ByteIoError> {
        // write signature
        writer.write_u64_be(PNG_SIGNATURE);
        // write ihdr
        write_chunk_fn(self, writer, b"IHDR", write_ihdr)?;
        // the palette always carries all 256 entries
        write_chunk_fn(self, writer, b"PLTE", write_plte)?;

        if self.has_alpha() {
            trace!("palette has translucent entries, writing tRNS");
            write_chunk_fn(self, writer, b"tRNS", write_trns)?;
        }
        Ok(())
    }

    /// Encode the image, writing the whole file into `sink`
    ///
    /// Returns the number of bytes written on success
    pub fn encode<T: ByteWriterTrait>(&mut self, sink: T) -> Result<usize, PngEncodeErrors> {
        let width = self.options.width();
        let height = self.options.height();

        if width == 0 || height == 0 {
            return Err(PngEncodeErrors::ZeroDimensions(width, height));
        }
        if width > MAX_DIMENSIONS {
            return Err(PngEncodeErrors::TooLargeDimensions("width", width));
        }
        if height > MAX_DIMENSIONS {
            return Err(PngEncodeErrors::TooLargeDimensions("height", height));
        }
        let expected_data_size = width
            .checked_mul(height)
            .ok_or(PngEncodeErrors::Static("width * height overflows"))?;

        if self.data.len() != expected_data_size {
            return Err(PngEncodeErrors::WrongInputSize(
                expected_data_size,
                self.data.len()
            ));
        }
        let mut writer = ByteWriter::new(sink);

        self.encode_headers(&mut writer)?;

        // encode filters
        self.add_filters();

        // the whole zlib stream goes into a single idat chunk
        write_chunk(b"IDAT", &self.encoded_chunks, &mut writer)?;

        write_chunk_fn(self, &mut writer, b"IEND", write_iend)?;

        writer.flush()?;

        Ok(writer.bytes_written())
    }

    const fn calculate_scanline_size(&self) -> usize {
        // one palette index per pixel
        self.options.width()
    }

    fn has_alpha(&self) -> bool {
        self.palette.iter().any(|color| color[3] != 255)
    }

    fn add_filters(&mut self) {
        let scanline_size = self.calculate_scanline_size();
        let scanline_length = (scanline_size + 1)
            .checked_mul(self.options.height())
            .unwrap();

        // allocate space for filtered scanlines
        self.filter_scanline.resize(scanline_length, 0);

        // one row above the current processing row
        let mut previous_scanline: &[u8] = &[];

        for (i, filter_s) in self
            .filter_scanline
            .chunks_exact_mut(scanline_size + 1)
            .take(self.options.height())
            .enumerate()
        {
            let (previous, current) = self.data.split_at(i * scanline_size);

            if i > 0 {
                // previous row now becomes defined
                previous_scanline = &previous[(i - 1) * scanline_size..];
            }
            let current_scanline = &current[0..scanline_size];

            filter_scanline(current_scanline, previous_scanline, filter_s);
        }
        // compress, one deflate block per filtered scanline so block
        // boundaries and row boundaries coincide
        self.encoded_chunks =
            DeflateEncoder::new_with_block_size(&self.filter_scanline, scanline_size + 1)
                .encode_zlib();
    }
}

#[test]
fn test_simple_write() {
    use cinder_core::options::RenderOptions;

    let width = 40;
    let height = 10;
    let data = vec![100_u8; width * height];
    let mut palette = [[0_u8; 4]; 256];

    for (i, entry) in palette.iter_mut().enumerate() {
        *entry = [i as u8, i as u8, i as u8, 255];
    }
    let options = RenderOptions::new(width, height);
    let mut encoder = PngEncoder::new(&data, &palette, options);
    let mut sink = vec![];

    let _ = encoder.encode(&mut sink).unwrap();

    let mut decoder = png::Decoder::new(&sink[..]);
    decoder.set_transformations(png::Transformations::IDENTITY);

    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    assert_eq!(&data, &buf);
}
