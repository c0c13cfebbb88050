//! Display backends and the process-wide backend registry.

use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::{Arc, Mutex};

use crate::error::SceneError;
use crate::scene::PlotScene;

/// Environment variable read by [`install_backend_from_env`]. `-` selects
/// stdout, anything else is a file path.
pub const SCENE_OUT_ENV: &str = "FIELDPLOT_SCENE_OUT";

/// What happened to a displayed plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlotEventKind {
    Displayed,
    ObjectAdded,
    Cleared,
}

/// Change notification carrying the full scene after the change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotEvent {
    pub plot_id: u32,
    pub kind: PlotEventKind,
    pub scene: PlotScene,
}

/// Receiver of plot updates, e.g. a notebook widget bridge or a scene dump.
pub trait PlotBackend: Send + Sync {
    fn name(&self) -> &str;

    fn on_event(&self, event: &PlotEvent) -> Result<(), SceneError>;
}

/// Writes every event as one JSON line.
pub struct JsonBackend<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> Result<W, SceneError> {
        self.writer.into_inner().map_err(|_| SceneError::BackendPoisoned)
    }
}

impl JsonBackend<BufWriter<File>> {
    pub fn create(path: impl AsRef<std::path::Path>) -> Result<Self, SceneError> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write + Send> PlotBackend for JsonBackend<W> {
    fn name(&self) -> &str {
        "json"
    }

    fn on_event(&self, event: &PlotEvent) -> Result<(), SceneError> {
        let mut writer = self.writer.lock().map_err(|_| SceneError::BackendPoisoned)?;
        serde_json::to_writer(&mut *writer, event)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

static BACKEND: OnceCell<Arc<dyn PlotBackend>> = OnceCell::new();

/// Install the process-wide backend. The first install wins; returns whether
/// this call installed it.
pub fn install_backend(backend: Arc<dyn PlotBackend>) -> bool {
    let name = backend.name().to_string();
    let installed = BACKEND.set(backend).is_ok();
    if installed {
        log::debug!(target: "fieldplot_scene", "installed plot backend '{name}'");
    } else {
        log::debug!(target: "fieldplot_scene", "plot backend already installed, ignoring '{name}'");
    }
    installed
}

/// The installed backend, if any.
pub fn backend() -> Option<Arc<dyn PlotBackend>> {
    BACKEND.get().cloned()
}

/// Install a [`JsonBackend`] according to [`SCENE_OUT_ENV`]. Returns
/// `Ok(false)` when the variable is unset or empty, or a backend is already
/// installed.
pub fn install_backend_from_env() -> Result<bool, SceneError> {
    let target = match std::env::var(SCENE_OUT_ENV) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => return Ok(false),
    };
    if BACKEND.get().is_some() {
        return Ok(false);
    }
    let backend: Arc<dyn PlotBackend> = match target.trim() {
        "-" => Arc::new(JsonBackend::new(io::stdout())),
        path => Arc::new(JsonBackend::create(path)?),
    };
    Ok(install_backend(backend))
}
