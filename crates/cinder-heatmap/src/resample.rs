/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grid resampling
//!
//! Maps output pixel coordinates to blended source-grid values so a grid
//! can render at any raster size. Each output pixel takes a
//! smoothstep-weighted mean over the source cells within one kernel span
//! of its projected position, which degrades to selecting the matching
//! cell exactly when the sizes agree.

use crate::colormap::clamp_unit;
use crate::heatmap::HeatMap;

pub(crate) struct Resampler<'a> {
    map:     &'a HeatMap,
    scale_x: f64,
    scale_y: f64,
    span_x:  f64,
    span_y:  f64
}

impl<'a> Resampler<'a> {
    pub(crate) fn new(map: &'a HeatMap, out_width: usize, out_height: usize) -> Resampler<'a> {
        let scale_x = axis_scale(map.width(), out_width);
        let scale_y = axis_scale(map.height(), out_height);

        Resampler {
            map,
            scale_x,
            scale_y,
            span_x: scale_x.max(1.0),
            span_y: scale_y.max(1.0)
        }
    }

    /// Blend the source cells around the projection of `(out_x, out_y)`
    /// into a single value in `[0,1]`
    ///
    /// The grid's scale is applied to every touched cell and the result
    /// clamped before it enters the mean, values outside the colour range
    /// saturate instead of skewing their neighbours.
    pub(crate) fn sample(&self, out_x: usize, out_y: usize) -> f64 {
        let in_x = out_x as f64 * self.scale_x;
        let in_y = out_y as f64 * self.scale_y;

        let (x_low, x_high) = axis_bounds(in_x, self.span_x, self.map.width());
        let (y_low, y_high) = axis_bounds(in_y, self.span_y, self.map.height());

        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for x in x_low..=x_high {
            let wx = smoothstep(1.0 - (x as f64 - in_x).abs() / self.span_x);

            for y in y_low..=y_high {
                let wy = smoothstep(1.0 - (y as f64 - in_y).abs() / self.span_y);
                let weight = wx * wy;

                let value = self.map.scale().map(self.map.get(x as isize, y as isize));

                weighted_sum += clamp_unit(value) * weight;
                total_weight += weight;
            }
        }
        // span >= 1 keeps the cell nearest the projection inside the
        // bounds with positive weight, the mean is always defined
        weighted_sum / total_weight
    }
}

/// Source cells stepped per output pixel, `(in - 1)/(out - 1)` so both
/// ends of the axes line up
fn axis_scale(in_dim: usize, out_dim: usize) -> f64 {
    if out_dim > 1 {
        (in_dim as f64 - 1.0) / (out_dim as f64 - 1.0)
    } else {
        in_dim as f64 - 1.0
    }
}

/// Inclusive range of source cells within `span` of `center`, clamped to
/// the axis
fn axis_bounds(center: f64, span: f64, dim: usize) -> (usize, usize) {
    let low = (center - span).ceil().max(0.0) as usize;
    let high = ((center + span).floor() as usize).min(dim - 1);

    (low, high)
}

fn smoothstep(w: f64) -> f64 {
    w * w * (3.0 - 2.0 * w)
}
