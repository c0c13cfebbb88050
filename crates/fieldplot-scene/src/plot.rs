//! The plot handle.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::backend::{self, PlotBackend, PlotEvent, PlotEventKind};
use crate::error::SceneError;
use crate::objects::PlotObject;
use crate::scene::PlotScene;

static NEXT_PLOT_ID: AtomicU32 = AtomicU32::new(1);

struct PlotState {
    objects: Vec<PlotObject>,
    backend: Option<Arc<dyn PlotBackend>>,
}

/// Shared handle to an ordered list of plot objects.
///
/// Cloning the handle shares the underlying plot. Handles are
/// single-threaded; the plot lives as long as any clone does.
#[derive(Clone)]
pub struct Plot {
    id: u32,
    state: Rc<RefCell<PlotState>>,
}

impl Plot {
    pub fn new() -> Self {
        let id = NEXT_PLOT_ID.fetch_add(1, Ordering::Relaxed);
        log::trace!(target: "fieldplot_scene", "plot {id} created");
        Self {
            id,
            state: Rc::new(RefCell::new(PlotState {
                objects: Vec::new(),
                backend: None,
            })),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Whether `other` refers to the same underlying plot.
    pub fn same_plot(&self, other: &Plot) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn objects(&self) -> Vec<PlotObject> {
        self.state.borrow().objects.clone()
    }

    pub fn is_displayed(&self) -> bool {
        self.state.borrow().backend.is_some()
    }

    pub fn scene(&self) -> PlotScene {
        PlotScene::new(self.id, &self.state.borrow().objects)
    }

    /// Append an object and return its index. A displayed plot forwards the
    /// new scene to its backend; if the backend fails the object is removed
    /// again.
    pub fn add(&self, object: impl Into<PlotObject>) -> Result<usize, SceneError> {
        self.extend(vec![object.into()]).map(|range| range.start)
    }

    /// Append several objects as one update and return their index range.
    /// Either every object is kept or, if the backend rejects the update,
    /// none is.
    pub fn extend(&self, objects: Vec<PlotObject>) -> Result<Range<usize>, SceneError> {
        let range = {
            let mut state = self.state.borrow_mut();
            let start = state.objects.len();
            state.objects.extend(objects);
            start..state.objects.len()
        };
        if range.is_empty() {
            return Ok(range);
        }
        if let Err(err) = self.notify(PlotEventKind::ObjectAdded) {
            self.state.borrow_mut().objects.truncate(range.start);
            log::warn!(
                target: "fieldplot_scene",
                "plot {}: backend rejected {} new object(s): {err}",
                self.id,
                range.len()
            );
            return Err(err);
        }
        for index in range.clone() {
            log::debug!(
                target: "fieldplot_scene",
                "plot {}: added {} object #{index}",
                self.id,
                self.state.borrow().objects[index].kind()
            );
        }
        Ok(range)
    }

    pub fn clear(&self) -> Result<(), SceneError> {
        self.state.borrow_mut().objects.clear();
        self.notify(PlotEventKind::Cleared)
    }

    /// Attach `backend` and push the current scene to it.
    pub fn display_with(&self, backend: Arc<dyn PlotBackend>) -> Result<(), SceneError> {
        log::debug!(
            target: "fieldplot_scene",
            "plot {} displayed on '{}' backend",
            self.id,
            backend.name()
        );
        self.state.borrow_mut().backend = Some(backend);
        self.notify(PlotEventKind::Displayed)
    }

    /// Display on the installed process-wide backend.
    pub fn display(&self) -> Result<(), SceneError> {
        let backend = backend::backend().ok_or(SceneError::NoBackend)?;
        self.display_with(backend)
    }

    fn notify(&self, kind: PlotEventKind) -> Result<(), SceneError> {
        let backend = match self.state.borrow().backend.clone() {
            Some(backend) => backend,
            None => return Ok(()),
        };
        let event = PlotEvent {
            plot_id: self.id,
            kind,
            scene: self.scene(),
        };
        backend.on_event(&event)
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Plot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Plot")
            .field("id", &self.id)
            .field("objects", &state.objects.len())
            .field("displayed", &state.backend.is_some())
            .finish()
    }
}
