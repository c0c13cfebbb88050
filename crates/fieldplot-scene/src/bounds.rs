use glam::Vec3;

/// Axis-aligned region a plot object occupies in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Unit cube anchored at the origin.
    pub fn unit() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// True when `min` is strictly below `max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.cmplt(self.max).all() && self.min.is_finite() && self.max.is_finite()
    }

    /// Flattened `[xmin, xmax, ymin, ymax, zmin, zmax]`, the layout scene
    /// consumers expect.
    pub fn to_extent(&self) -> [f32; 6] {
        [
            self.min.x, self.max.x, self.min.y, self.max.y, self.min.z, self.max.z,
        ]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unit()
    }
}
