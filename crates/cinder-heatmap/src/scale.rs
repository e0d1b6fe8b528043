/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Value scales
//!
//! A [`Scale`] maps raw grid values to colour positions in the unit
//! interval. The renderer applies it to every grid value before the
//! result is clamped and quantized to a palette index.

/// Mapping from raw values to the `[0,1]` colour range
///
/// The default scale is [`Scale::linear`] over `(0, 1)`, which leaves
/// already-normalized values untouched.
pub struct Scale {
    value_to_unit: Box<dyn Fn(f64) -> f64>
}

impl Scale {
    /// Linear mapping sending `low` to 0 and `high` to 1
    pub fn linear(low: f64, high: f64) -> Scale {
        Scale::range(move |v| (v - low) / (high - low))
    }

    /// Arbitrary mapping, the closure must produce unit-range values itself
    pub fn range<F>(value_to_unit: F) -> Scale
    where
        F: Fn(f64) -> f64 + 'static
    {
        Scale {
            value_to_unit: Box::new(value_to_unit)
        }
    }

    /// Normalize an arbitrary mapping so that `low` lands on 0 and `high`
    /// lands on 1
    ///
    /// This is the usual way to get logarithmic colour ranges, e.g.
    /// `Scale::range_between(f64::log10, 1.0, 1000.0)`.
    pub fn range_between<F>(value_to_unit: F, low: f64, high: f64) -> Scale
    where
        F: Fn(f64) -> f64 + 'static
    {
        let low_mapped = value_to_unit(low);
        let high_mapped = value_to_unit(high);

        Scale::range(move |v| (value_to_unit(v) - low_mapped) / (high_mapped - low_mapped))
    }

    /// Map a raw value to its colour position
    ///
    /// The result is not clamped here, values outside the scale's range
    /// land outside `[0,1]`.
    pub fn map(&self, value: f64) -> f64 {
        (self.value_to_unit)(value)
    }
}

impl Default for Scale {
    fn default() -> Scale {
        Scale::linear(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Scale;

    #[test]
    fn test_linear_endpoints_and_midpoint() {
        let scale = Scale::linear(-10.0, 10.0);

        assert_eq!(scale.map(-10.0), 0.0);
        assert_eq!(scale.map(10.0), 1.0);
        assert_eq!(scale.map(0.0), 0.5);
        assert_eq!(scale.map(5.0), 0.75);
    }

    #[test]
    fn test_default_is_identity_on_unit_values() {
        let scale = Scale::default();

        for value in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(scale.map(value), value);
        }
    }

    #[test]
    fn test_range_applies_the_closure() {
        let scale = Scale::range(|v| v * 0.125);

        assert_eq!(scale.map(4.0), 0.5);
    }

    #[test]
    fn test_range_between_normalizes_the_endpoints() {
        let scale = Scale::range_between(|v| v * v, 0.0, 10.0);

        assert_eq!(scale.map(0.0), 0.0);
        assert_eq!(scale.map(10.0), 1.0);
        assert_eq!(scale.map(5.0), 0.25);
    }

    #[test]
    fn test_out_of_range_values_leave_the_unit_interval() {
        let scale = Scale::linear(0.0, 10.0);

        assert_eq!(scale.map(20.0), 2.0);
        assert_eq!(scale.map(-10.0), -1.0);
    }
}
