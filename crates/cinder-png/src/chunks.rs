/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Png chunk framing
//!
//! A chunk is a big endian length, a four byte type, the data and a
//! crc over type and data. The length is only known once a body has
//! been written, so bodies are staged in a scratch buffer, the length
//! patched in and the finished chunk committed to the sink in one go.

use cinder_core::bytestream::{ByteIoError, ByteWriter, ByteWriterTrait};

use crate::crc::{calc_crc, calc_crc_with_bytes};
use crate::encoder::PngEncoder;

pub(crate) fn write_ihdr(ctx: &PngEncoder, output: &mut ByteWriter<&mut Vec<u8>>) {
    // write width and height
    output.write_u32_be(ctx.options.width() as u32);
    output.write_u32_be(ctx.options.height() as u32);
    // eight bit palette indices
    output.write_u8(8);
    // color type 3, indexed
    output.write_u8(3);
    // compression method
    output.write_u8(0);
    // filter method
    output.write_u8(0);
    // interlace method, always standard
    output.write_u8(0);
}

pub(crate) fn write_plte(ctx: &PngEncoder, output: &mut ByteWriter<&mut Vec<u8>>) {
    for color in ctx.palette {
        output.write_u8(color[0]);
        output.write_u8(color[1]);
        output.write_u8(color[2]);
    }
}

pub(crate) fn write_trns(ctx: &PngEncoder, output: &mut ByteWriter<&mut Vec<u8>>) {
    for color in ctx.palette {
        output.write_u8(color[3]);
    }
}

// iend is a no-op
pub(crate) fn write_iend(_: &PngEncoder, _: &mut ByteWriter<&mut Vec<u8>>) {}

/// write_chunk_fn writes the boilerplate for each png chunk
///
/// It writes the length, chunk type, calls a function to write the
/// data and then calculates the CRC chunk for that png and writes it.
///
/// This should be called with the appropriate inner function to write data
pub(crate) fn write_chunk_fn<T, F>(
    v: &PngEncoder, writer: &mut ByteWriter<T>, name: &[u8; 4], func: F
) -> Result<(), ByteIoError>
where
    T: ByteWriterTrait,
    F: Fn(&PngEncoder, &mut ByteWriter<&mut Vec<u8>>)
{
    // format
    // length - chunk type - [data] -  crc chunk
    let mut temp_space = Vec::with_capacity(10);
    // space for length
    temp_space.extend_from_slice(&[0; 4]);

    let mut local_writer = ByteWriter::new(&mut temp_space);
    // write the type
    local_writer.write_all(name).unwrap();
    // call underlying function
    (func)(v, &mut local_writer);
    // get bytes written;
    let bytes_written = local_writer.bytes_written();
    // write length less the chunk name
    temp_space[0..4].copy_from_slice(&(bytes_written as u32 - 4).to_be_bytes());
    // write crc, ignore the length
    let c = calc_crc(&temp_space[4..]);
    temp_space.extend_from_slice(&c.to_be_bytes());

    writer.write_all(&temp_space)
}

/// Write a chunk whose body already exists as a byte slice
pub(crate) fn write_chunk<T: ByteWriterTrait>(
    name: &[u8; 4], data: &[u8], writer: &mut ByteWriter<T>
) -> Result<(), ByteIoError> {
    // write length
    writer.write_u32_be_err(data.len() as u32)?;
    // write chunk name
    writer.write_all(name)?;
    // write chunk data
    writer.write_all(data)?;
    // crc is a continuous function, so first crc the chunk name
    // and then crc that with the chunk bytes passing in the previous crc

    // equal to crc((name + data), u32::MAX)
    let crc = calc_crc_with_bytes(name, u32::MAX);
    let crc = !calc_crc_with_bytes(data, crc);
    writer.write_u32_be_err(crc)?;
    Ok(())
}
