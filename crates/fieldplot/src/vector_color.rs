//! Colors for vector glyphs.
//!
//! Only the first component of each vector picks its color: the component is
//! rescaled to `[0, 1]` over the samples being colored and passed through a
//! colormap. Magnitude and direction do not affect the color.

use fieldplot_scene::{pack_rgb, ColorMap};
use ndarray::ArrayView2;

use crate::error::PlotError;

/// One packed `0xRRGGBB` color per row of `vectors` (shape `(n, c)`, `c >= 1`).
///
/// When every first component is equal there is no range to rescale over,
/// and all samples take the colormap midpoint. NaN components do the same.
pub fn vector_colors(vectors: ArrayView2<f64>, colormap: ColorMap) -> Result<Vec<u32>, PlotError> {
    if vectors.ncols() == 0 {
        return Err(PlotError::shape(format!(
            "vector samples need at least one component, got shape {:?}",
            vectors.shape()
        )));
    }

    let first = vectors.column(0);
    let (min, max) = first
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let range = max - min;
    let degenerate = !(range.is_finite() && range > 0.0);
    if degenerate && !first.is_empty() {
        log::warn!(
            target: "fieldplot",
            "first vector component spans no range over {} samples; using colormap midpoint",
            first.len()
        );
    }

    let colors = first
        .iter()
        .map(|&v| {
            let t = if degenerate || v.is_nan() {
                0.5
            } else {
                ((v - min) / range) as f32
            };
            pack_rgb(colormap.map_value(t))
        })
        .collect();
    Ok(colors)
}

/// Repeat every color twice so both endpoints of a glyph's segment share it.
pub fn segment_colors(colors: &[u32]) -> Vec<u32> {
    colors.iter().flat_map(|&c| [c, c]).collect()
}
