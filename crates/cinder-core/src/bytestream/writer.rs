/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use core::mem::size_of;

use crate::bytestream::{ByteIoError, ByteWriterTrait};

mod sinks;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// The writer tracks how many bytes it has pushed into the sink,
/// sinks only ever see plain byte slices.
pub struct ByteWriter<T: ByteWriterTrait> {
    inner:         T,
    bytes_written: usize
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    /// Create a new writer that writes to `sink`
    ///
    /// # Example
    /// ```
    /// use cinder_core::bytestream::ByteWriter;
    /// let mut sink = Vec::new();
    /// let mut writer = ByteWriter::new(&mut sink);
    /// writer.write_u8(34);
    /// assert_eq!(writer.bytes_written(), 1);
    /// ```
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            inner:         sink,
            bytes_written: 0
        }
    }

    /// Return the number of bytes the writer has written so far
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Destroy the writer returning the sink it wrote to
    pub fn consume(self) -> T {
        self.inner
    }

    /// Write a single byte into the sink or don't write
    /// anything if the sink cannot support the write
    pub fn write_u8(&mut self, byte: u8) {
        let _ = self.write_u8_err(byte);
    }

    /// Write a single byte into the sink or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use cinder_core::bytestream::ByteWriter;
    /// let mut sink = [0_u8; 0];
    /// let mut writer = ByteWriter::new(&mut sink[..]);
    /// assert!(writer.write_u8_err(32).is_err());
    /// ```
    pub fn write_u8_err(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.inner.write_const_bytes(&[byte])?;
        self.bytes_written += 1;
        Ok(())
    }

    /// Write all bytes in `data` into the sink, erroring
    /// out if the sink cannot hold all of them
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), ByteIoError> {
        self.inner.write_all_bytes(data)?;
        self.bytes_written += data.len();
        Ok(())
    }

    /// Hint to the sink that the writer expects to push about
    /// `size` more bytes into it
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.inner.reserve_capacity(size)
    }

    /// Ensure bytes written so far reach the underlying storage
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.inner.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$name4:tt,$name5:tt,$name6:tt,$int_type:tt) => {
        impl<T: ByteWriterTrait> ByteWriter<T> {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: Mode) -> Result<(), ByteIoError> {
                const SIZE: usize = size_of::<$int_type>();

                // get bits, depending on mode.
                // This should be inlined and not visible in
                // the generated binary since mode is a compile
                // time constant.
                let bytes = match mode {
                    Mode::BE => byte.to_be_bytes(),
                    Mode::LE => byte.to_le_bytes()
                };
                self.inner.write_const_bytes(&bytes)?;
                self.bytes_written += SIZE;

                Ok(())
            }
            #[inline(always)]
            fn $name2(&mut self, byte: $int_type, mode: Mode) {
                let _ = self.$name(byte, mode);
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name4(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.$name(byte, Mode::LE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Or don't write anything if the sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name5(&mut self, byte: $int_type) {
                self.$name2(byte, Mode::BE)
            }
            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Or don't write anything if the sink cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name6(&mut self, byte: $int_type) {
                self.$name2(byte, Mode::LE)
            }
        }
    };
}

write_single_type!(
    write_u64_inner_or_die,
    write_u64_inner_or_none,
    write_u64_be_err,
    write_u64_le_err,
    write_u64_be,
    write_u64_le,
    u64
);

write_single_type!(
    write_u32_inner_or_die,
    write_u32_inner_or_none,
    write_u32_be_err,
    write_u32_le_err,
    write_u32_be,
    write_u32_le,
    u32
);

write_single_type!(
    write_u16_inner_or_die,
    write_u16_inner_or_none,
    write_u16_be_err,
    write_u16_le_err,
    write_u16_be,
    write_u16_le,
    u16
);
