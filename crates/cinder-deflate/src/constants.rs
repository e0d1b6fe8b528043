/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
/// Smallest match length the format can represent
pub(crate) const MIN_MATCH: usize = 3;

/// Longest match this encoder will emit
///
/// Lengths up to 18 fit in the reduced run length scheme of
/// one seven bit code plus at most one extra bit
pub(crate) const MAX_MATCH: usize = 18;

/// Farthest the match searcher looks back
///
/// Distances 1 to 4 map to the four five bit distance codes
/// that carry no extra bits
pub(crate) const MAX_MATCH_DISTANCE: usize = 4;

/// Deflate block type for blocks using the fixed huffman tables
pub(crate) const DEFLATE_BLOCKTYPE_FIXED: u64 = 1;
