//! Vector glyph object.
//!
//! Glyph `i` is a segment from `origins[i]` to `origins[i] + vectors[i]`.
//! `colors` holds two packed colors per glyph, one for each endpoint.

use ndarray::Array2;

use crate::error::SceneError;

#[derive(Debug, Clone, PartialEq)]
pub struct Vectors {
    pub origins: Array2<f32>,
    pub vectors: Array2<f32>,
    pub colors: Vec<u32>,
    pub head_size: f32,
    pub line_width: f32,
    pub use_head: bool,
}

impl Vectors {
    pub const DEFAULT_HEAD_SIZE: f32 = 1.0;
    pub const DEFAULT_LINE_WIDTH: f32 = 0.01;

    pub fn new(
        origins: Array2<f32>,
        vectors: Array2<f32>,
        colors: Vec<u32>,
    ) -> Result<Self, SceneError> {
        if origins.ncols() != 3 || vectors.ncols() != 3 {
            return Err(SceneError::InvalidObject(format!(
                "vector origins and directions must have 3 columns (got {} and {})",
                origins.ncols(),
                vectors.ncols()
            )));
        }
        if origins.nrows() != vectors.nrows() {
            return Err(SceneError::InvalidObject(format!(
                "vector origin count ({}) must match vector count ({})",
                origins.nrows(),
                vectors.nrows()
            )));
        }
        if colors.len() != 2 * vectors.nrows() {
            return Err(SceneError::InvalidObject(format!(
                "vector glyphs need two colors each ({} expected, got {})",
                2 * vectors.nrows(),
                colors.len()
            )));
        }
        Ok(Self {
            origins,
            vectors,
            colors,
            head_size: Self::DEFAULT_HEAD_SIZE,
            line_width: Self::DEFAULT_LINE_WIDTH,
            use_head: true,
        })
    }

    pub fn with_head_size(mut self, head_size: f32) -> Self {
        self.head_size = head_size.max(0.0);
        self
    }

    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width.max(0.0);
        self
    }

    pub fn with_head(mut self, use_head: bool) -> Self {
        self.use_head = use_head;
        self
    }

    pub fn len(&self) -> usize {
        self.vectors.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Endpoint colors of glyph `index`.
    pub fn glyph_colors(&self, index: usize) -> Option<(u32, u32)> {
        let start = *self.colors.get(2 * index)?;
        let end = *self.colors.get(2 * index + 1)?;
        Some((start, end))
    }
}
