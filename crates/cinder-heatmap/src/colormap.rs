/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Colour maps
//!
//! A colour map turns a colour position in `[0,1]` into rgba channels,
//! each in `[0,1]`. The renderer samples it at the 256 positions `i/255`
//! to build the png palette, so a map is never called with anything else.

/// Maps a colour position to rgba channels
///
/// Any `Fn(f64) -> [f64; 4]` closure is a colour map, so inline maps work
/// without a wrapper type:
///
/// ```
/// use cinder_heatmap::HeatMap;
///
/// let mut map = HeatMap::new(8, 8);
/// map.set_colormap(|v: f64| [v, 0.0, 1.0 - v, 1.0]);
/// ```
pub trait ColorMap {
    /// Map a colour position in `[0,1]` to `[r, g, b, a]`, each in `[0,1]`
    fn map(&self, value: f64) -> [f64; 4];
}

impl<F> ColorMap for F
where
    F: Fn(f64) -> [f64; 4]
{
    fn map(&self, value: f64) -> [f64; 4] {
        self(value)
    }
}

/// The default colour map, an opaque ramp from black to white
#[derive(Copy, Clone, Debug, Default)]
pub struct Grayscale;

impl ColorMap for Grayscale {
    fn map(&self, value: f64) -> [f64; 4] {
        [value, value, value, 1.0]
    }
}

/// Clamp a value to the unit interval
///
/// NaN maps to the top of the range, infinities to the nearest bound.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(0.0, 1.0)
}

/// Sample the colour map at every palette position and quantize the
/// channels to bytes.
///
/// The `light` flag reverses the sampling direction, index 0 then carries
/// the colour of the highest value.
pub(crate) fn derive_palette(colormap: &dyn ColorMap, light: bool) -> [[u8; 4]; 256] {
    let mut palette = [[0_u8; 4]; 256];

    for (i, entry) in palette.iter_mut().enumerate() {
        let mut v = (i as f64) / 255.0;

        if light {
            v = 1.0 - v;
        }
        let rgba = colormap.map(v);

        for (channel, value) in entry.iter_mut().zip(rgba) {
            *channel = (clamp_unit(value) * 255.0).round() as u8;
        }
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::{clamp_unit, derive_palette, ColorMap, Grayscale};

    #[test]
    fn test_grayscale_palette_is_a_ramp() {
        let palette = derive_palette(&Grayscale, false);

        for (i, entry) in palette.iter().enumerate() {
            let gray = i as u8;

            assert_eq!(entry, &[gray, gray, gray, 255]);
        }
    }

    #[test]
    fn test_light_palette_is_the_reversed_ramp() {
        let palette = derive_palette(&Grayscale, true);

        for (i, entry) in palette.iter().enumerate() {
            let gray = (255 - i) as u8;

            assert_eq!(entry, &[gray, gray, gray, 255]);
        }
    }

    #[test]
    fn test_closures_are_colour_maps() {
        let map = |v: f64| [v, 0.0, 1.0 - v, 1.0];
        let palette = derive_palette(&map, false);

        assert_eq!(palette[0], [0, 0, 255, 255]);
        assert_eq!(palette[255], [255, 0, 0, 255]);
        assert_eq!(palette[100], [100, 0, 155, 255]);
    }

    #[test]
    fn test_out_of_range_channels_clamp() {
        let map = |v: f64| [v * 4.0 - 1.0, -0.5, 2.0, 1.0];
        let palette = derive_palette(&map, false);

        assert_eq!(palette[0], [0, 0, 255, 255]);
        assert_eq!(palette[255], [255, 0, 255, 255]);
    }

    #[test]
    fn test_nan_channels_quantize_to_full() {
        let map = |_: f64| [f64::NAN, 0.0, 0.0, 1.0];
        let palette = derive_palette(&map, false);

        assert!(palette.iter().all(|entry| entry[0] == 255));
    }

    #[test]
    fn test_translucent_alpha_survives_rounding() {
        let map = |v: f64| [v, v, v, 0.5];
        let palette = derive_palette(&map, false);

        assert!(palette.iter().all(|entry| entry[3] == 128));
    }

    #[test]
    fn test_clamp_unit_policy() {
        assert_eq!(clamp_unit(0.25), 0.25);
        assert_eq!(clamp_unit(-3.0), 0.0);
        assert_eq!(clamp_unit(17.0), 1.0);
        assert_eq!(clamp_unit(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_unit(f64::INFINITY), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 1.0);
    }

    #[test]
    fn test_struct_maps_and_closure_maps_agree() {
        let as_closure = |v: f64| [v, v, v, 1.0];

        for i in 0..=255 {
            let v = f64::from(i) / 255.0;

            assert_eq!(Grayscale.map(v), as_closure(v));
        }
    }
}
