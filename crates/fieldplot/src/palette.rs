//! Scalar field to palette index mapping.
//!
//! A palette has [`PALETTE_SIZE`] entries. Index 0 marks missing (NaN)
//! samples, and valid samples spread linearly over `1..=255` between the
//! smallest and largest valid value.

use ndarray::{Array3, ArrayView3};

pub const PALETTE_SIZE: usize = 256;
pub const MISSING_INDEX: u8 = 0;
/// Index used for every valid sample when the valid values span no range.
pub const MIDPOINT_INDEX: u8 = 128;

const INDEX_SPAN: f64 = 254.0;

/// Min and max over the non-NaN entries, `None` when every entry is NaN.
fn valid_range(field: &ArrayView3<f64>) -> Option<(f64, f64)> {
    field
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Map a scalar field to palette indices of the same shape.
///
/// With `min`/`max` taken over valid samples, a value `v` maps to
/// `floor((v - min) / (max - min) * 254) + 1`, so `min` lands on 1 and `max`
/// on 255. If all valid samples are equal they map to [`MIDPOINT_INDEX`].
/// NaN samples map to [`MISSING_INDEX`], and an all-NaN field maps to zeros.
pub fn palette_indices(field: ArrayView3<f64>) -> Array3<u8> {
    let Some((min_value, max_value)) = valid_range(&field) else {
        log::warn!(
            target: "fieldplot",
            "scalar field {:?} has no valid samples; every palette index is {MISSING_INDEX}",
            field.shape()
        );
        return Array3::from_elem(field.raw_dim(), MISSING_INDEX);
    };

    let value_range = max_value - min_value;
    if value_range == 0.0 {
        log::debug!(
            target: "fieldplot",
            "scalar field is uniform ({min_value}); using midpoint palette index"
        );
    }

    // Finite extremes far apart can overflow the difference; halving both
    // sides is exact and keeps the ratio.
    let fraction = |v: f64| {
        if value_range.is_finite() {
            (v - min_value) / value_range
        } else {
            (v / 2.0 - min_value / 2.0) / (max_value / 2.0 - min_value / 2.0)
        }
    };

    field.mapv(|v| {
        if v.is_nan() {
            MISSING_INDEX
        } else if value_range == 0.0 {
            MIDPOINT_INDEX
        } else {
            // The float-to-int cast truncates toward zero and saturates, which
            // keeps infinities from overflowing.
            let scaled = (fraction(v) * INDEX_SPAN) as u8;
            scaled.saturating_add(1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn field(shape: (usize, usize, usize), values: Vec<f64>) -> Array3<f64> {
        Array3::from_shape_vec(shape, values).unwrap()
    }

    #[test]
    fn two_values_hit_both_ends() {
        let f = field((1, 1, 2), vec![1.0, 5.0]);
        let idx = palette_indices(f.view());
        assert_eq!(idx.shape(), &[1, 1, 2]);
        assert_eq!(idx[[0, 0, 0]], 1);
        assert_eq!(idx[[0, 0, 1]], 255);
    }

    #[test]
    fn single_valid_value_maps_to_midpoint() {
        let f = field((1, 1, 2), vec![3.0, f64::NAN]);
        let idx = palette_indices(f.view());
        assert_eq!(idx[[0, 0, 0]], MIDPOINT_INDEX);
        assert_eq!(idx[[0, 0, 1]], MISSING_INDEX);
    }

    #[test]
    fn uniform_field_maps_to_midpoint_regardless_of_magnitude() {
        for value in [-1e12, 0.0, 42.0] {
            let f = Array3::from_elem((2, 2, 2), value);
            assert!(palette_indices(f.view()).iter().all(|&i| i == MIDPOINT_INDEX));
        }
    }

    #[test]
    fn all_missing_field_maps_to_zeros() {
        let f = Array3::from_elem((2, 3, 1), f64::NAN);
        let idx = palette_indices(f.view());
        assert_eq!(idx.shape(), &[2, 3, 1]);
        assert!(idx.iter().all(|&i| i == MISSING_INDEX));
    }

    #[test]
    fn empty_field_maps_to_empty_indices() {
        let f = Array3::<f64>::zeros((0, 4, 4));
        assert_eq!(palette_indices(f.view()).shape(), &[0, 4, 4]);
    }

    #[test]
    fn scaled_values_truncate_rather_than_round() {
        // 0.999 / 1 * 254 = 253.746 -> 253 -> 254; rounding would give 255.
        let f = field((1, 1, 3), vec![0.0, 0.999, 1.0]);
        let idx = palette_indices(f.view());
        assert_eq!(idx.as_slice().unwrap(), &[1, 254, 255]);
    }

    #[test]
    fn extreme_finite_range_still_spans_the_palette() {
        let f = field((1, 1, 3), vec![-1e308, 0.0, 1e308]);
        let idx = palette_indices(f.view());
        assert_eq!(idx.as_slice().unwrap(), &[1, 128, 255]);

        let f = field((1, 1, 2), vec![-f64::MAX, f64::MAX]);
        assert_eq!(palette_indices(f.view()).as_slice().unwrap(), &[1, 255]);
    }

    #[test]
    fn missing_samples_override_and_are_ignored_by_range() {
        let f = field((1, 2, 2), vec![f64::NAN, 10.0, 20.0, f64::NAN]);
        let idx = palette_indices(f.view());
        assert_eq!(idx.as_slice().unwrap(), &[0, 1, 255, 0]);
    }

    #[test]
    fn evenly_spaced_values_are_monotonic_and_in_range() {
        let values: Vec<f64> = (0..60).map(|i| i as f64 * 0.25 - 3.0).collect();
        let f = field((3, 4, 5), values);
        let idx = palette_indices(f.view());
        let flat = idx.as_slice().unwrap();
        assert!(flat.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(flat[0], 1);
        assert_eq!(flat[59], 255);
        assert!(flat.iter().all(|&i| i >= 1));
    }

    #[test]
    fn remapping_output_is_stable() {
        let values: Vec<f64> = (0..27).map(|i| ((i * 7) % 11) as f64).collect();
        let mut f = field((3, 3, 3), values);
        f[[1, 1, 1]] = f64::NAN;
        let first = palette_indices(f.view());

        // Feed the indices back in, treating 0 as missing.
        let again = first.mapv(|i| if i == 0 { f64::NAN } else { i as f64 });
        let second = palette_indices(again.view());
        assert_eq!(first, second);
    }
}
