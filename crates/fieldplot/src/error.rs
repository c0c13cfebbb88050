use fieldplot_scene::SceneError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{0}")]
    BackendUnavailable(String),
    #[error("invalid array shape: {0}")]
    Shape(String),
    #[error("invalid mesh: {0}")]
    InvalidMesh(String),
    #[error("unknown colormap '{0}'")]
    UnknownColormap(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

impl PlotError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        PlotError::Shape(message.into())
    }
}
