//! Point cloud object.

use ndarray::Array2;

use crate::error::SceneError;

/// Fixed-size, single-color point cloud. `positions` has shape `(n, 3)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    pub positions: Array2<f32>,
    pub point_size: f32,
    pub color: u32,
    pub opacity: f32,
}

impl Points {
    pub const DEFAULT_POINT_SIZE: f32 = 0.15;
    pub const DEFAULT_COLOR: u32 = 0x99bbff;

    pub fn new(positions: Array2<f32>) -> Result<Self, SceneError> {
        if positions.ncols() != 3 {
            return Err(SceneError::InvalidObject(format!(
                "point positions must have 3 columns (got {})",
                positions.ncols()
            )));
        }
        Ok(Self {
            positions,
            point_size: Self::DEFAULT_POINT_SIZE,
            color: Self::DEFAULT_COLOR,
            opacity: 1.0,
        })
    }

    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size.max(0.0);
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color & 0xff_ffff;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn len(&self) -> usize {
        self.positions.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
