//! Adapters from in-memory field arrays to interactive 3D plot objects.
//!
//! Every adapter checks that a display backend is available, casts its input
//! to the element type the plot object stores, maps values to colors where
//! needed and appends one object to a [`Plot`]. Handles are passed in
//! explicitly and handed back, so callers decide which plot receives what.

pub mod adapters;
pub mod config;
pub mod error;
pub mod guard;
pub mod mesh;
pub mod normalize;
pub mod palette;
pub mod vector_color;

pub use adapters::{isosurface, points, scalar_voxels, vectors, voxels};
pub use config::{
    AdapterConfig, IsosurfaceOptions, PointsOptions, ScalarVoxelOptions, VectorOptions,
    VoxelOptions,
};
pub use error::PlotError;
pub use guard::ensure_backend;
pub use mesh::Mesh;
pub use palette::{palette_indices, MIDPOINT_INDEX, MISSING_INDEX, PALETTE_SIZE};
pub use vector_color::{segment_colors, vector_colors};

pub use fieldplot_scene::{ColorMap, Plot};
