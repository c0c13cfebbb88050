//! Isosurface object. Surface extraction happens in the viewer; the object
//! only carries the sampled field and the level to extract.

use ndarray::Array3;

use crate::bounds::Bounds;
use crate::error::SceneError;

#[derive(Debug, Clone, PartialEq)]
pub struct MarchingCubes {
    pub scalar_field: Array3<f32>,
    pub level: f32,
    pub bounds: Bounds,
    pub color: u32,
    pub wireframe: bool,
    pub opacity: f32,
}

impl MarchingCubes {
    pub const DEFAULT_COLOR: u32 = 0x99bbff;

    pub fn new(scalar_field: Array3<f32>, level: f32, bounds: Bounds) -> Result<Self, SceneError> {
        if !level.is_finite() {
            return Err(SceneError::InvalidObject(format!(
                "isosurface level must be finite (got {level})"
            )));
        }
        if !bounds.is_valid() {
            return Err(SceneError::InvalidObject(format!(
                "isosurface bounds must satisfy min < max on every axis (got {bounds:?})"
            )));
        }
        Ok(Self {
            scalar_field,
            level,
            bounds,
            color: Self::DEFAULT_COLOR,
            wireframe: false,
            opacity: 1.0,
        })
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color & 0xff_ffff;
        self
    }

    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Whether the level lies inside the sampled range, i.e. whether the
    /// surface can be non-empty.
    pub fn level_in_range(&self) -> bool {
        let (min, max) = self
            .scalar_field
            .iter()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        min <= self.level && self.level <= max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_range_check() {
        let field = Array3::from_shape_fn((2, 2, 2), |(i, j, k)| (i + j + k) as f32);
        let mc = MarchingCubes::new(field.clone(), 1.5, Bounds::unit()).unwrap();
        assert!(mc.level_in_range());
        let mc = MarchingCubes::new(field, 10.0, Bounds::unit()).unwrap();
        assert!(!mc.level_in_range());
    }

    #[test]
    fn rejects_non_finite_level() {
        let field = Array3::<f32>::zeros((1, 1, 1));
        assert!(MarchingCubes::new(field, f32::NAN, Bounds::unit()).is_err());
    }
}
