//! A png encoder
//!
//! This features a small PNG writer in Rust producing valid
//! ISO/IEC 15948:2003 (E) images from 8 bit palette indices
//!
//! It only writes the one shape of image its callers need, eight bit
//! indexed colour, non interlaced, every scanline filtered with the
//! Average filter and compressed with the restricted zlib encoder
//! from `cinder-deflate`. The optional `tRNS` chunk is written when
//! the palette carries any translucent entry.
//!
//! # Usage
//!
//! ```
//! use cinder_core::options::RenderOptions;
//! use cinder_png::PngEncoder;
//!
//! let indices = vec![0_u8; 16 * 16];
//! let mut palette = [[0_u8; 4]; 256];
//!
//! for (i, entry) in palette.iter_mut().enumerate() {
//!     *entry = [i as u8, i as u8, i as u8, 255];
//! }
//!
//! let options = RenderOptions::new(16, 16);
//! let mut sink = Vec::new();
//!
//! PngEncoder::new(&indices, &palette, options)
//!     .encode(&mut sink)
//!     .unwrap();
//! ```
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate
//!
#![forbid(unsafe_code)]

pub use cinder_core;
pub use encoder::PngEncoder;
pub use errors::PngEncodeErrors;

mod chunks;
mod constants;
mod crc;
mod encoder;
mod errors;
mod filters;
