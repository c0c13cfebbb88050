//! Voxel grid object.
//!
//! Each cell holds a palette index. Zero is an empty cell; a non-zero value
//! `v` is drawn with `color_map[v - 1]`.

use ndarray::Array3;

use crate::bounds::Bounds;
use crate::error::SceneError;

#[derive(Debug, Clone, PartialEq)]
pub struct Voxels {
    pub voxels: Array3<u8>,
    pub color_map: Vec<u32>,
    pub bounds: Bounds,
    pub outlines: bool,
    pub opacity: f32,
}

impl Voxels {
    pub fn new(
        voxels: Array3<u8>,
        color_map: Vec<u32>,
        bounds: Bounds,
    ) -> Result<Self, SceneError> {
        if color_map.is_empty() {
            return Err(SceneError::InvalidObject(
                "voxel color map must contain at least one color".to_string(),
            ));
        }
        if !bounds.is_valid() {
            return Err(SceneError::InvalidObject(format!(
                "voxel bounds must satisfy min < max on every axis (got {bounds:?})"
            )));
        }
        Ok(Self {
            voxels,
            color_map,
            bounds,
            outlines: true,
            opacity: 1.0,
        })
    }

    pub fn with_outlines(mut self, outlines: bool) -> Self {
        self.outlines = outlines;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Number of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.voxels.iter().filter(|&&v| v != 0).count()
    }

    /// Color a non-empty cell value resolves to; `None` for empty cells and
    /// values past the end of the color map.
    pub fn color_of(&self, value: u8) -> Option<u32> {
        match value {
            0 => None,
            v => self.color_map.get(v as usize - 1).copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn color_lookup_is_one_based() {
        let grid = Array3::from_shape_vec((1, 1, 3), vec![0, 1, 2]).unwrap();
        let voxels = Voxels::new(grid, vec![0x99bbff, 0xff4d4d], Bounds::unit()).unwrap();
        assert_eq!(voxels.filled_count(), 2);
        assert_eq!(voxels.color_of(0), None);
        assert_eq!(voxels.color_of(1), Some(0x99bbff));
        assert_eq!(voxels.color_of(2), Some(0xff4d4d));
        assert_eq!(voxels.color_of(3), None);
    }

    #[test]
    fn rejects_empty_color_map_and_flat_bounds() {
        let grid = Array3::<u8>::zeros((2, 2, 2));
        assert!(Voxels::new(grid.clone(), Vec::new(), Bounds::unit()).is_err());
        let flat = Bounds::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
        assert!(Voxels::new(grid, vec![0xffffff], flat).is_err());
    }
}
