//! Scalar grids rendered to png heat-maps
//!
//! A [`HeatMap`] is a caller-owned grid of `f64` values. Rendering maps
//! every value through a [`Scale`] to a colour position, resamples the
//! grid to the requested raster size, quantizes to a 256 entry palette
//! drawn from a [`ColorMap`] and writes an indexed png through
//! `cinder-png`. Output goes to any byte sink, a file path or a Base64
//! data URL.
//!
//! The whole render is one synchronous pass and the same grid with the
//! same options always produces byte-identical output.
//!
//! # Usage
//!
//! ```
//! use cinder_heatmap::{HeatMap, Scale};
//!
//! let mut map = HeatMap::from_fn(64, 64, |x, y| (x + y) as f64);
//! map.set_scale(Scale::linear(0.0, 126.0));
//!
//! let url = map.data_url().unwrap();
//! assert!(url.starts_with("data:image/png;base64,"));
//! ```
//!
//! Rendering to a file at a different raster size:
//!
//! ```no_run
//! use cinder_core::options::RenderOptions;
//! use cinder_heatmap::HeatMap;
//!
//! let map = HeatMap::from_fn(32, 32, |x, _| x as f64 / 31.0);
//! let options = RenderOptions::new(320, 320).set_flip_y(true);
//!
//! map.save_with_options("ramp.png", options).unwrap();
//! ```
#![forbid(unsafe_code)]

pub use cinder_core;
pub use cinder_png;
pub use colormap::{ColorMap, Grayscale};
pub use errors::HeatMapEncodeErrors;
pub use heatmap::HeatMap;
pub use scale::Scale;

mod colormap;
mod errors;
mod heatmap;
mod render;
mod resample;
mod scale;
