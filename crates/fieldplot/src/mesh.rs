use fieldplot_scene::Bounds;
use glam::DVec3;

use crate::error::PlotError;

/// Physical extent a field occupies: minimum corner `pmin`, maximum corner
/// `pmax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mesh {
    pub pmin: DVec3,
    pub pmax: DVec3,
}

impl Mesh {
    pub fn new(pmin: impl Into<DVec3>, pmax: impl Into<DVec3>) -> Result<Self, PlotError> {
        let (pmin, pmax) = (pmin.into(), pmax.into());
        if !(pmin.is_finite() && pmax.is_finite()) {
            return Err(PlotError::InvalidMesh(format!(
                "mesh corners must be finite (pmin={pmin}, pmax={pmax})"
            )));
        }
        if !pmin.cmplt(pmax).all() {
            return Err(PlotError::InvalidMesh(format!(
                "pmin must be below pmax on every axis (pmin={pmin}, pmax={pmax})"
            )));
        }
        Ok(Self { pmin, pmax })
    }

    pub fn edges(&self) -> DVec3 {
        self.pmax - self.pmin
    }

    /// Bounds in the single-precision world coordinates plot objects use.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pmin.as_vec3(), self.pmax.as_vec3())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nanometre_scale_extents() {
        let mesh = Mesh::new([-5e-9, -5e-9, 0.0], [5e-9, 5e-9, 3e-9]).unwrap();
        assert_eq!(mesh.edges(), DVec3::new(1e-8, 1e-8, 3e-9));
        assert!(mesh.bounds().is_valid());
    }

    #[test]
    fn rejects_inverted_or_flat_corners() {
        assert!(matches!(
            Mesh::new([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            Err(PlotError::InvalidMesh(_))
        ));
        assert!(Mesh::new([1.0, 0.0, 0.0], [0.0, 1.0, 1.0]).is_err());
        assert!(Mesh::new([0.0, 0.0, 0.0], [1.0, f64::INFINITY, 1.0]).is_err());
    }
}
