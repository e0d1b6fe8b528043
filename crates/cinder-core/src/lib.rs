//! Core routines shared by all libraries
//!
//! This crate provides a set of core routines shared
//! by the encoders under the `cinder` umbrella
//!
//! It currently contains
//!
//! - A bytestream writer with endian aware writes and pluggable sinks
//! - Render options controlling the output raster
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![forbid(unsafe_code)]

pub mod bytestream;
pub mod options;
pub mod serde;
