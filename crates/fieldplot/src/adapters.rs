//! Field-to-plot adapters.
//!
//! Each adapter runs the availability guard first, then validates and casts
//! its input and builds the plot object(s). Only when everything is built
//! does it touch the plot: either the supplied handle, or a new plot that is
//! displayed on the installed backend. The handle used is returned.

use std::sync::Arc;

use fieldplot_scene::{MarchingCubes, Plot, PlotBackend, PlotObject, Points, Vectors, Voxels};
use ndarray::{ArrayView2, ArrayView3, ArrayView4};

use crate::config::{
    IsosurfaceOptions, PointsOptions, ScalarVoxelOptions, VectorOptions, VoxelOptions,
};
use crate::error::PlotError;
use crate::guard::ensure_backend;
use crate::mesh::Mesh;
use crate::normalize::{field_f32, occupancy_u8, points_f32, sum_of_squares, vectors_f32};
use crate::palette::{palette_indices, PALETTE_SIZE};
use crate::vector_color::{segment_colors, vector_colors};

fn attach(
    plot: Option<&Plot>,
    backend: Arc<dyn PlotBackend>,
    objects: Vec<PlotObject>,
) -> Result<Plot, PlotError> {
    let plot = match plot {
        Some(plot) => plot.clone(),
        None => {
            let plot = Plot::new();
            plot.display_with(backend)?;
            log::debug!(target: "fieldplot", "created plot {}", plot.id());
            plot
        }
    };
    plot.extend(objects)?;
    Ok(plot)
}

/// Add a point cloud of shape `(n, 3)`.
pub fn points(
    data: ArrayView2<f64>,
    plot: Option<&Plot>,
    options: &PointsOptions,
) -> Result<Plot, PlotError> {
    let backend = ensure_backend()?;
    let cloud = Points::new(points_f32(data)?)?
        .with_point_size(options.point_size)
        .with_color(options.color);
    log::debug!(target: "fieldplot", "points: {} samples", cloud.len());
    attach(plot, backend, vec![cloud.into()])
}

/// Add occupancy voxels within the mesh bounds. Occupied cells are drawn
/// with `options.color_map[0]`.
pub fn voxels(
    occupancy: ArrayView3<bool>,
    mesh: &Mesh,
    plot: Option<&Plot>,
    options: &VoxelOptions,
) -> Result<Plot, PlotError> {
    let backend = ensure_backend()?;
    let grid = Voxels::new(
        occupancy_u8(occupancy),
        options.color_map.clone(),
        mesh.bounds(),
    )?
    .with_outlines(options.outlines)
    .with_opacity(options.opacity);
    log::debug!(
        target: "fieldplot",
        "voxels: shape {:?}, {} occupied",
        grid.voxels.shape(),
        grid.filled_count()
    );
    attach(plot, backend, vec![grid.into()])
}

/// Add a scalar field as voxels colored through the named colormap sampled
/// at 256 levels. Missing samples become empty cells.
pub fn scalar_voxels(
    field: ArrayView3<f64>,
    mesh: &Mesh,
    plot: Option<&Plot>,
    options: &ScalarVoxelOptions,
) -> Result<Plot, PlotError> {
    let backend = ensure_backend()?;
    let colormap = options.colormap()?;
    let grid = Voxels::new(
        palette_indices(field),
        colormap.sample(PALETTE_SIZE),
        mesh.bounds(),
    )?
    .with_outlines(options.outlines)
    .with_opacity(options.opacity);
    log::debug!(
        target: "fieldplot",
        "scalar voxels: shape {:?}, colormap {}, {} valid samples",
        grid.voxels.shape(),
        colormap.name(),
        grid.filled_count()
    );
    attach(plot, backend, vec![grid.into()])
}

/// Add the isosurface of the squared magnitude of a `(nx, ny, nz, c)` vector
/// field at `options.level`.
pub fn isosurface(
    field: ArrayView4<f64>,
    mesh: &Mesh,
    plot: Option<&Plot>,
    options: &IsosurfaceOptions,
) -> Result<Plot, PlotError> {
    let backend = ensure_backend()?;
    let magnitude = field_f32(sum_of_squares(field)?.view());
    let surface = MarchingCubes::new(magnitude, options.level as f32, mesh.bounds())?
        .with_color(options.color)
        .with_wireframe(options.wireframe)
        .with_opacity(options.opacity);
    if !surface.level_in_range() {
        log::warn!(
            target: "fieldplot",
            "isosurface level {} lies outside the field's range; the surface will be empty",
            options.level
        );
    }
    log::debug!(
        target: "fieldplot",
        "isosurface: shape {:?}, level {}",
        surface.scalar_field.shape(),
        surface.level
    );
    attach(plot, backend, vec![surface.into()])
}

/// Add vector glyphs from `origins` along `vectors`, both of shape `(n, 3)`.
/// Glyphs are colored by their first component. With `options.points` the
/// origins are added as a point cloud as well.
pub fn vectors(
    origins: ArrayView2<f64>,
    vectors: ArrayView2<f64>,
    plot: Option<&Plot>,
    options: &VectorOptions,
) -> Result<Plot, PlotError> {
    let backend = ensure_backend()?;
    if origins.nrows() != vectors.nrows() {
        return Err(PlotError::Shape(format!(
            "got {} origins for {} vectors",
            origins.nrows(),
            vectors.nrows()
        )));
    }
    let colormap = options.colormap()?;
    let colors = segment_colors(&vector_colors(vectors, colormap)?);
    let origin_cloud = points_f32(origins)?;

    let mut objects: Vec<PlotObject> = Vec::with_capacity(2);
    if options.points {
        objects.push(
            Points::new(origin_cloud.clone())?
                .with_point_size(options.point_size)
                .with_color(options.point_color)
                .into(),
        );
    }
    let glyphs = Vectors::new(origin_cloud, vectors_f32(vectors)?, colors)?
        .with_head_size(options.head_size)
        .with_line_width(options.line_width)
        .with_head(options.use_head);
    log::debug!(
        target: "fieldplot",
        "vectors: {} glyphs, colormap {}",
        glyphs.len(),
        colormap.name()
    );
    objects.push(glyphs.into());
    attach(plot, backend, objects)
}
