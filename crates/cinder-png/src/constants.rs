/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
/// The eight png signature bytes as one big endian integer
pub(crate) const PNG_SIGNATURE: u64 = 0x8950_4E47_0D0A_1A0A;

/// Largest width or height the format can express, 2^31 - 1
pub(crate) const MAX_DIMENSIONS: usize = (1 << 31) - 1;
