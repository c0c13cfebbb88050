//! Plotting engine for fieldplot.
//!
//! A [`Plot`] is a shared, ordered list of plot objects (points, voxels,
//! vector glyphs and marching-cubes isosurfaces). Once displayed, every change
//! to the plot is pushed to a [`PlotBackend`] as a serializable
//! [`PlotScene`] snapshot.

pub mod backend;
pub mod bounds;
pub mod colormap;
pub mod error;
pub mod objects;
pub mod plot;
pub mod scene;

pub use backend::{
    backend, install_backend, install_backend_from_env, JsonBackend, PlotBackend, PlotEvent,
    PlotEventKind, SCENE_OUT_ENV,
};
pub use bounds::Bounds;
pub use colormap::{hex_to_packed, pack_rgb, rgb_to_hex, unpack_rgb, ColorMap};
pub use error::SceneError;
pub use objects::{MarchingCubes, PlotObject, Points, Vectors, Voxels};
pub use plot::Plot;
pub use scene::{PlotScene, SceneObject, SCENE_SCHEMA_VERSION};
