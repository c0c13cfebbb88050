//! Plot object types a [`crate::Plot`] can hold.

pub mod marching_cubes;
pub mod points;
pub mod vectors;
pub mod voxels;

pub use marching_cubes::MarchingCubes;
pub use points::Points;
pub use vectors::Vectors;
pub use voxels::Voxels;

/// Any object that can be appended to a plot.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotObject {
    Points(Points),
    Voxels(Voxels),
    Vectors(Vectors),
    MarchingCubes(MarchingCubes),
}

impl PlotObject {
    pub fn kind(&self) -> &'static str {
        match self {
            PlotObject::Points(_) => "points",
            PlotObject::Voxels(_) => "voxels",
            PlotObject::Vectors(_) => "vectors",
            PlotObject::MarchingCubes(_) => "marching_cubes",
        }
    }
}

impl From<Points> for PlotObject {
    fn from(points: Points) -> Self {
        PlotObject::Points(points)
    }
}

impl From<Voxels> for PlotObject {
    fn from(voxels: Voxels) -> Self {
        PlotObject::Voxels(voxels)
    }
}

impl From<Vectors> for PlotObject {
    fn from(vectors: Vectors) -> Self {
        PlotObject::Vectors(vectors)
    }
}

impl From<MarchingCubes> for PlotObject {
    fn from(mc: MarchingCubes) -> Self {
        PlotObject::MarchingCubes(mc)
    }
}
