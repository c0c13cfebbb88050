use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no plot backend has been installed")]
    NoBackend,
    #[error("plot backend i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize plot scene: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid plot object: {0}")]
    InvalidObject(String),
    #[error("plot backend writer is poisoned")]
    BackendPoisoned,
}
