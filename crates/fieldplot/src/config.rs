//! Per-adapter rendering options.
//!
//! Every struct has `Default` matching the adapters' documented defaults and
//! deserializes with missing fields filled from those defaults. Colors accept
//! either a packed integer (`10075135`) or a hex string (`"#99bbff"`).

use fieldplot_scene::{hex_to_packed, ColorMap};
use serde::{Deserialize, Deserializer};

use crate::error::PlotError;

pub const DEFAULT_COLOR: u32 = 0x99bbff;
pub const DEFAULT_VOXEL_COLORS: [u32; 2] = [0x99bbff, 0xff4d4d];
pub const DEFAULT_COLORMAP: &str = "viridis";

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Packed(u32),
    Hex(String),
}

impl ColorRepr {
    fn into_packed<E: serde::de::Error>(self) -> Result<u32, E> {
        match self {
            ColorRepr::Packed(value) if value <= 0xff_ffff => Ok(value),
            ColorRepr::Packed(value) => Err(E::custom(format!(
                "color {value:#x} does not fit in 0xRRGGBB"
            ))),
            ColorRepr::Hex(text) => hex_to_packed(&text)
                .ok_or_else(|| E::custom(format!("invalid hex color '{text}'"))),
        }
    }
}

fn packed_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    ColorRepr::deserialize(deserializer)?.into_packed()
}

fn packed_colors<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u32>, D::Error> {
    Vec::<ColorRepr>::deserialize(deserializer)?
        .into_iter()
        .map(ColorRepr::into_packed)
        .collect()
}

fn resolve_colormap(name: &str) -> Result<ColorMap, PlotError> {
    ColorMap::from_name(name).ok_or_else(|| PlotError::UnknownColormap(name.to_string()))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PointsOptions {
    pub point_size: f32,
    #[serde(deserialize_with = "packed_color")]
    pub color: u32,
}

impl Default for PointsOptions {
    fn default() -> Self {
        Self {
            point_size: 0.15,
            color: DEFAULT_COLOR,
        }
    }
}

/// Options for occupancy voxels. `color_map[0]` colors occupied cells.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VoxelOptions {
    #[serde(deserialize_with = "packed_colors")]
    pub color_map: Vec<u32>,
    pub outlines: bool,
    pub opacity: f32,
}

impl Default for VoxelOptions {
    fn default() -> Self {
        Self {
            color_map: DEFAULT_VOXEL_COLORS.to_vec(),
            outlines: false,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScalarVoxelOptions {
    pub colormap: String,
    pub outlines: bool,
    pub opacity: f32,
}

impl ScalarVoxelOptions {
    pub fn colormap(&self) -> Result<ColorMap, PlotError> {
        resolve_colormap(&self.colormap)
    }
}

impl Default for ScalarVoxelOptions {
    fn default() -> Self {
        Self {
            colormap: DEFAULT_COLORMAP.to_string(),
            outlines: false,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IsosurfaceOptions {
    /// Level of the isosurface in the squared-magnitude field.
    pub level: f64,
    #[serde(deserialize_with = "packed_color")]
    pub color: u32,
    pub wireframe: bool,
    pub opacity: f32,
}

impl Default for IsosurfaceOptions {
    fn default() -> Self {
        Self {
            level: 0.1,
            color: DEFAULT_COLOR,
            wireframe: false,
            opacity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct VectorOptions {
    pub colormap: String,
    pub head_size: f32,
    pub line_width: f32,
    /// Draw an arrow head at the tip of each glyph.
    pub use_head: bool,
    /// Also draw the glyph origins as a point cloud.
    pub points: bool,
    pub point_size: f32,
    #[serde(deserialize_with = "packed_color")]
    pub point_color: u32,
}

impl VectorOptions {
    pub fn colormap(&self) -> Result<ColorMap, PlotError> {
        resolve_colormap(&self.colormap)
    }
}

impl Default for VectorOptions {
    fn default() -> Self {
        Self {
            colormap: DEFAULT_COLORMAP.to_string(),
            head_size: 1.0,
            line_width: 0.01,
            use_head: true,
            points: true,
            point_size: 0.1,
            point_color: 0x000000,
        }
    }
}

/// Options for every adapter, e.g. loaded once from a settings file.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub points: PointsOptions,
    pub voxels: VoxelOptions,
    pub scalar_voxels: ScalarVoxelOptions,
    pub isosurface: IsosurfaceOptions,
    pub vectors: VectorOptions,
}

impl AdapterConfig {
    /// Parse a JSON document. Colormap names are checked here so a typo fails
    /// at load time rather than at the first plot.
    pub fn from_json_str(text: &str) -> Result<Self, PlotError> {
        let config: Self = serde_json::from_str(text)?;
        config.scalar_voxels.colormap()?;
        config.vectors.colormap()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = AdapterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AdapterConfig::default());
        assert_eq!(config.points.point_size, 0.15);
        assert_eq!(config.voxels.color_map, vec![0x99bbff, 0xff4d4d]);
        assert!(!config.voxels.outlines);
        assert_eq!(config.isosurface.level, 0.1);
        assert!(config.vectors.use_head);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = AdapterConfig::from_json_str(
            r##"{
                "points": { "color": "#ff0000" },
                "voxels": { "color_map": [255, "#00ff00"], "outlines": true },
                "scalar_voxels": { "colormap": "magma" },
                "isosurface": { "level": 0.5, "wireframe": true }
            }"##,
        )
        .unwrap();
        assert_eq!(config.points.color, 0xff0000);
        assert_eq!(config.points.point_size, 0.15);
        assert_eq!(config.voxels.color_map, vec![0x0000ff, 0x00ff00]);
        assert!(config.voxels.outlines);
        assert_eq!(config.scalar_voxels.colormap().unwrap(), ColorMap::Magma);
        assert_eq!(config.isosurface.level, 0.5);
        assert_eq!(config.isosurface.color, DEFAULT_COLOR);
    }

    #[test]
    fn unknown_colormap_is_rejected() {
        let err = AdapterConfig::from_json_str(r#"{ "vectors": { "colormap": "rainbow" } }"#)
            .unwrap_err();
        assert!(matches!(err, PlotError::UnknownColormap(name) if name == "rainbow"));
    }

    #[test]
    fn malformed_colors_are_rejected() {
        assert!(matches!(
            AdapterConfig::from_json_str(r##"{ "points": { "color": "#12" } }"##),
            Err(PlotError::Config(_))
        ));
        assert!(AdapterConfig::from_json_str(r#"{ "points": { "color": 16777216 } }"#).is_err());
    }
}
