/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use cinder_core::options::RenderOptions;

use crate::colormap::{ColorMap, Grayscale};
use crate::scale::Scale;

/// A caller-owned grid of scalar values that renders to an indexed png
///
/// Values live in row-major order, `(x, y)` with `y` counting from the
/// top. They carry no unit of their own, the attached [`Scale`] maps them
/// to colour positions at render time and the attached [`ColorMap`] turns
/// those into pixels.
pub struct HeatMap {
    width:    usize,
    height:   usize,
    values:   Vec<f64>,
    discard:  f64,
    scale:    Scale,
    colormap: Box<dyn ColorMap>
}

impl HeatMap {
    /// Create a zero-filled grid
    ///
    /// # Panics
    /// If `width` or `height` is zero, or `width * height` overflows.
    pub fn new(width: usize, height: usize) -> HeatMap {
        assert_ne!(width, 0, "width cannot be zero");
        assert_ne!(height, 0, "height cannot be zero");
        assert!(
            width.checked_mul(height).is_some(),
            "width * height overflows"
        );

        HeatMap {
            width,
            height,
            values: vec![0.0; width * height],
            discard: 0.0,
            scale: Scale::default(),
            colormap: Box::new(Grayscale)
        }
    }

    /// Create a grid filled from a function of `(x, y)`
    ///
    /// # Panics
    /// See [`HeatMap::new`].
    pub fn from_fn<F>(width: usize, height: usize, func: F) -> HeatMap
    where
        F: Fn(usize, usize) -> f64
    {
        let mut map = HeatMap::new(width, height);

        for y in 0..height {
            for x in 0..width {
                map.values[y * width + x] = (func)(x, y);
            }
        }
        map
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(x, y)`
    ///
    /// Out-of-range coordinates read the discard cell instead of failing,
    /// its value is whatever the last out-of-range write put there.
    pub fn get(&self, x: isize, y: isize) -> f64 {
        match self.index_of(x, y) {
            Some(index) => self.values[index],
            None => self.discard
        }
    }

    /// Write the cell at `(x, y)`
    ///
    /// Out-of-range coordinates write to the discard cell, the grid is
    /// untouched.
    pub fn set(&mut self, x: isize, y: isize, value: f64) {
        match self.index_of(x, y) {
            Some(index) => self.values[index] = value,
            None => self.discard = value
        }
    }

    fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// All cells in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable view of all cells in row-major order, for bulk fills
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Reverse the grid rows in place
    ///
    /// This flips the stored data. To flip at render time instead, leave
    /// the grid alone and set the flip flag on [`RenderOptions`].
    pub fn flip_y(&mut self) {
        for y in 0..self.height / 2 {
            let top = y * self.width;
            let bottom = (self.height - 1 - y) * self.width;

            for x in 0..self.width {
                self.values.swap(top + x, bottom + x);
            }
        }
    }

    /// Replace the value scale
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    /// The scale applied to values at render time
    pub const fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Replace the colour map
    pub fn set_colormap(&mut self, colormap: impl ColorMap + 'static) {
        self.colormap = Box::new(colormap);
    }

    pub(crate) fn colormap(&self) -> &dyn ColorMap {
        self.colormap.as_ref()
    }

    /// Default render options for this grid, one pixel per cell and both
    /// flags off
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.width, self.height)
    }
}
