/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Options controlling how a grid is rendered into a raster

/// Options shared by the encoders in the `cinder-`
/// family of image crates
///
/// The options carry the output raster dimensions, which may differ
/// from the source grid dimensions, and the flags changing how the
/// palette is sampled and how rows are laid out
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the output raster in pixels
    ///
    /// - Default value: 0, rejected at encode time
    width:  usize,
    /// Height of the output raster in pixels
    ///
    /// - Default value: 0, rejected at encode time
    height: usize,
    /// Whether the colour map is sampled in the inverted
    /// direction, producing the light theme variant
    ///
    /// - Default value: false
    light:  bool,
    /// Whether rows are written bottom to top
    ///
    /// - Default value: false
    flip_y: bool
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width:  0,
            height: 0,
            light:  false,
            flip_y: false
        }
    }
}

impl RenderOptions {
    /// Create render options with an output raster size
    /// and both flags turned off
    pub fn new(width: usize, height: usize) -> RenderOptions {
        RenderOptions::default().set_width(width).set_height(height)
    }

    /// Get the width of the output raster
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the output raster
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return true if the colour map will be sampled in the
    /// inverted direction
    pub const fn light(&self) -> bool {
        self.light
    }

    /// Return true if rows will be written bottom to top
    pub const fn flipped_y(&self) -> bool {
        self.flip_y
    }

    /// Set the width of the output raster
    pub fn set_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height of the output raster
    pub fn set_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set whether the colour map is sampled in the inverted direction
    pub fn set_light(mut self, light: bool) -> Self {
        self.light = light;
        self
    }

    /// Set whether rows are written bottom to top
    pub fn set_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }
}
