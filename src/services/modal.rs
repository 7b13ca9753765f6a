//! Modal open/close state.

use tracing::debug;

use crate::model::RenderWarning;

/// Id of the compose modal.
pub const CREATE_POST: &str = "createPost";

/// Id of the preview modal.
pub const PREVIEW_POST: &str = "previewPost";

/// Opens and closes modals by id.
pub trait ModalService {
    /// Close everything, then open `id`.
    fn activate(&mut self, id: &str);
    /// Close every modal and the container.
    fn close(&mut self);
}

/// Modal state for a fixed set of known modal ids.
///
/// At most one modal is active at a time.
#[derive(Debug, Clone)]
pub struct ModalRegistry {
    known: Vec<String>,
    active: Option<String>,
}

impl Default for ModalRegistry {
    fn default() -> Self {
        Self::new([CREATE_POST, PREVIEW_POST])
    }
}

impl ModalRegistry {
    /// Registry that knows `ids`. Nothing is open.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: ids.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Id of the open modal, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `id` is open.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Whether the modal container is shown.
    pub fn container_active(&self) -> bool {
        self.active.is_some()
    }
}

impl ModalService for ModalRegistry {
    fn activate(&mut self, id: &str) {
        self.close();
        if !self.known.iter().any(|known| known == id) {
            RenderWarning::missing(format!("#{id}")).report();
            return;
        }
        debug!(id, "modal activated");
        self.active = Some(id.to_string());
    }

    fn close(&mut self) {
        if let Some(id) = self.active.take() {
            debug!(id, "modal closed");
        }
    }
}
