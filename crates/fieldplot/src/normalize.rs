//! Element-type casts applied before arrays are handed to plot objects.
//!
//! Plot objects store single-precision coordinates and byte-sized voxel
//! values; these helpers only change precision, never meaning.

use ndarray::{Array2, Array3, ArrayView2, ArrayView3, ArrayView4, Axis};

use crate::error::PlotError;

fn require_xyz_columns(array: &ArrayView2<f64>, what: &str) -> Result<(), PlotError> {
    if array.ncols() != 3 {
        return Err(PlotError::shape(format!(
            "{what} must have shape (n, 3), got {:?}",
            array.shape()
        )));
    }
    Ok(())
}

/// Point coordinates of shape `(n, 3)` as `f32`.
pub fn points_f32(points: ArrayView2<f64>) -> Result<Array2<f32>, PlotError> {
    require_xyz_columns(&points, "point coordinates")?;
    Ok(points.mapv(|v| v as f32))
}

/// Vector samples of shape `(n, 3)` as `f32`.
pub fn vectors_f32(vectors: ArrayView2<f64>) -> Result<Array2<f32>, PlotError> {
    require_xyz_columns(&vectors, "vector samples")?;
    Ok(vectors.mapv(|v| v as f32))
}

/// Occupancy flags as voxel values: occupied cells become 1, empty cells 0.
pub fn occupancy_u8(occupancy: ArrayView3<bool>) -> Array3<u8> {
    occupancy.mapv(u8::from)
}

pub fn field_f32(field: ArrayView3<f64>) -> Array3<f32> {
    field.mapv(|v| v as f32)
}

/// Pointwise sum of squared components of a `(nx, ny, nz, c)` vector field.
pub fn sum_of_squares(field: ArrayView4<f64>) -> Result<Array3<f64>, PlotError> {
    if field.len_of(Axis(3)) == 0 {
        return Err(PlotError::shape(
            "vector field must have at least one component",
        ));
    }
    Ok(field.map_axis(Axis(3), |components| {
        components.iter().map(|c| c * c).sum::<f64>()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array4};

    #[test]
    fn points_keep_values_and_shape() {
        let pts = array![[0.5, -1.0, 2.0], [3.0, 4.0, 5.0]];
        let cast = points_f32(pts.view()).unwrap();
        assert_eq!(cast, array![[0.5f32, -1.0, 2.0], [3.0, 4.0, 5.0]]);
    }

    #[test]
    fn points_require_three_columns() {
        let err = points_f32(array![[1.0, 2.0]].view()).unwrap_err();
        assert!(matches!(err, PlotError::Shape(_)));
    }

    #[test]
    fn occupancy_maps_to_zero_and_one() {
        let occ = Array3::from_shape_vec((1, 2, 2), vec![true, false, false, true]).unwrap();
        let voxels = occupancy_u8(occ.view());
        assert_eq!(voxels.as_slice().unwrap(), &[1, 0, 0, 1]);
    }

    #[test]
    fn sum_of_squares_reduces_component_axis() {
        let mut field = Array4::<f64>::zeros((2, 1, 1, 3));
        field[[0, 0, 0, 0]] = 1.0;
        field[[0, 0, 0, 1]] = 2.0;
        field[[0, 0, 0, 2]] = 2.0;
        field[[1, 0, 0, 2]] = -3.0;
        let norm = sum_of_squares(field.view()).unwrap();
        assert_eq!(norm.shape(), &[2, 1, 1]);
        assert_eq!(norm[[0, 0, 0]], 9.0);
        assert_eq!(norm[[1, 0, 0]], 9.0);
    }

    #[test]
    fn sum_of_squares_rejects_empty_component_axis() {
        let field = Array4::<f64>::zeros((2, 2, 2, 0));
        assert!(sum_of_squares(field.view()).is_err());
    }
}
