//! Serializable snapshot of a plot, handed to display backends.

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::objects::PlotObject;

pub const SCENE_SCHEMA_VERSION: u32 = 1;

/// Full payload capable of reconstructing every object on a plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotScene {
    pub schema_version: u32,
    pub plot_id: u32,
    pub objects: Vec<SceneObject>,
}

/// One plot object. Arrays are flattened in row-major order next to their
/// `shape`; bounds are `[xmin, xmax, ymin, ymax, zmin, zmax]`.
///
/// Non-finite samples in the float arrays are written as `null` and read
/// back as NaN, so infinities do not survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneObject {
    Points {
        #[serde(with = "samples")]
        positions: Vec<f32>,
        shape: Vec<usize>,
        point_size: f32,
        color: u32,
        opacity: f32,
    },
    Voxels {
        voxels: Vec<u8>,
        shape: Vec<usize>,
        color_map: Vec<u32>,
        bounds: [f32; 6],
        outlines: bool,
        opacity: f32,
    },
    Vectors {
        #[serde(with = "samples")]
        origins: Vec<f32>,
        #[serde(with = "samples")]
        vectors: Vec<f32>,
        shape: Vec<usize>,
        colors: Vec<u32>,
        head_size: f32,
        line_width: f32,
        use_head: bool,
    },
    MarchingCubes {
        #[serde(with = "samples")]
        scalar_field: Vec<f32>,
        shape: Vec<usize>,
        level: f32,
        bounds: [f32; 6],
        color: u32,
        wireframe: bool,
        opacity: f32,
    },
}

mod samples {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[f32], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.is_finite().then_some(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f32>, D::Error> {
        let values = Vec::<Option<f32>>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.unwrap_or(f32::NAN)).collect())
    }
}

fn flatten<S, D>(array: &ArrayBase<S, D>) -> (Vec<S::Elem>, Vec<usize>)
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    (array.iter().cloned().collect(), array.shape().to_vec())
}

impl From<&PlotObject> for SceneObject {
    fn from(object: &PlotObject) -> Self {
        match object {
            PlotObject::Points(p) => {
                let (positions, shape) = flatten(&p.positions);
                SceneObject::Points {
                    positions,
                    shape,
                    point_size: p.point_size,
                    color: p.color,
                    opacity: p.opacity,
                }
            }
            PlotObject::Voxels(v) => {
                let (voxels, shape) = flatten(&v.voxels);
                SceneObject::Voxels {
                    voxels,
                    shape,
                    color_map: v.color_map.clone(),
                    bounds: v.bounds.to_extent(),
                    outlines: v.outlines,
                    opacity: v.opacity,
                }
            }
            PlotObject::Vectors(v) => {
                let (origins, shape) = flatten(&v.origins);
                let (vectors, _) = flatten(&v.vectors);
                SceneObject::Vectors {
                    origins,
                    vectors,
                    shape,
                    colors: v.colors.clone(),
                    head_size: v.head_size,
                    line_width: v.line_width,
                    use_head: v.use_head,
                }
            }
            PlotObject::MarchingCubes(mc) => {
                let (scalar_field, shape) = flatten(&mc.scalar_field);
                SceneObject::MarchingCubes {
                    scalar_field,
                    shape,
                    level: mc.level,
                    bounds: mc.bounds.to_extent(),
                    color: mc.color,
                    wireframe: mc.wireframe,
                    opacity: mc.opacity,
                }
            }
        }
    }
}

impl PlotScene {
    pub fn new(plot_id: u32, objects: &[PlotObject]) -> Self {
        Self {
            schema_version: SCENE_SCHEMA_VERSION,
            plot_id,
            objects: objects.iter().map(SceneObject::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;
    use crate::objects::{MarchingCubes, Points, Voxels};
    use ndarray::{array, Array3};

    #[test]
    fn objects_serialize_with_kind_tag() {
        let points = Points::new(array![[1.0, 2.0, 3.0]]).unwrap();
        let grid = Array3::from_shape_vec((1, 2, 1), vec![1u8, 0]).unwrap();
        let voxels = Voxels::new(grid, vec![0x99bbff], Bounds::unit()).unwrap();
        let scene = PlotScene::new(7, &[points.into(), voxels.into()]);

        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["schemaVersion"], SCENE_SCHEMA_VERSION);
        assert_eq!(json["plotId"], 7);
        assert_eq!(json["objects"][0]["kind"], "points");
        assert_eq!(json["objects"][0]["shape"], serde_json::json!([1, 3]));
        assert_eq!(json["objects"][1]["kind"], "voxels");
        assert_eq!(
            json["objects"][1]["bounds"],
            serde_json::json!([0.0, 1.0, 0.0, 1.0, 0.0, 1.0])
        );

        let back: PlotScene = serde_json::from_value(json).unwrap();
        assert_eq!(back, scene);
    }

    #[test]
    fn flattening_is_row_major() {
        let grid = Array3::from_shape_fn((2, 1, 2), |(i, _, k)| (10 * i + k) as u8);
        let voxels = Voxels::new(grid, vec![0xffffff], Bounds::unit()).unwrap();
        match SceneObject::from(&PlotObject::from(voxels)) {
            SceneObject::Voxels { voxels, shape, .. } => {
                assert_eq!(shape, vec![2, 1, 2]);
                assert_eq!(voxels, vec![0, 1, 10, 11]);
            }
            other => panic!("unexpected scene object {other:?}"),
        }
    }

    #[test]
    fn non_finite_samples_read_back_as_nan() {
        let field = Array3::from_shape_vec((1, 1, 3), vec![1.0, f32::NAN, f32::INFINITY]).unwrap();
        let surface = MarchingCubes::new(field, 0.5, Bounds::unit()).unwrap();
        let scene = PlotScene::new(3, &[surface.into()]);

        let line = serde_json::to_string(&scene).unwrap();
        assert!(line.contains("[1.0,null,null]"));

        let back: PlotScene = serde_json::from_str(&line).unwrap();
        match &back.objects[0] {
            SceneObject::MarchingCubes { scalar_field, .. } => {
                assert_eq!(scalar_field[0], 1.0);
                assert!(scalar_field[1].is_nan());
                assert!(scalar_field[2].is_nan());
            }
            other => panic!("unexpected scene object {other:?}"),
        }
    }
}
