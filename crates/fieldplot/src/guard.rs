//! Availability check run before any adapter touches a plot.

use std::sync::Arc;

use fieldplot_scene::{PlotBackend, SCENE_OUT_ENV};

use crate::error::PlotError;

/// Message returned when no display backend has been installed.
pub const ERR_BACKEND_UNAVAILABLE: &str = "No plot display backend is installed.

Install one before plotting, either in code:

    fieldplot_scene::install_backend(std::sync::Arc::new(
        fieldplot_scene::JsonBackend::create(\"scene.jsonl\")?,
    ));

or through the environment, by setting FIELDPLOT_SCENE_OUT to a file path
(or `-` for stdout) and calling fieldplot_scene::install_backend_from_env().";

/// Return the installed backend or a [`PlotError::BackendUnavailable`] that
/// explains how to install one.
pub fn ensure_backend() -> Result<Arc<dyn PlotBackend>, PlotError> {
    match fieldplot_scene::backend() {
        Some(backend) => Ok(backend),
        None => {
            log::debug!(
                target: "fieldplot",
                "no plot backend installed ({SCENE_OUT_ENV} unset or not applied)"
            );
            Err(PlotError::BackendUnavailable(
                ERR_BACKEND_UNAVAILABLE.to_string(),
            ))
        }
    }
}
