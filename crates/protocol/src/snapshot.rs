use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::project::Project;
use crate::types::SectionId;

/// Project-detail overlay state.
///
/// An open modal always carries its project; there is no way to express
/// "open with nothing to show".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(Arc<Project>),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn project(&self) -> Option<&Arc<Project>> {
        match self {
            Self::Open(project) => Some(project),
            Self::Closed => None,
        }
    }
}

// Hand-rolled so the wire shape is `{isOpen, project}` without pulling in
// serde's `rc` feature for the `Arc`.
impl Serialize for ModalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ModalState", 2)?;
        state.serialize_field("isOpen", &self.is_open())?;
        state.serialize_field("project", &self.project().map(Arc::as_ref))?;
        state.end()
    }
}

/// Read-only copy of the controller state, handed to renderers after every
/// transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSnapshot {
    /// Always set by the controller, which starts on the first section.
    /// Optional so the wire shape can carry `null`.
    pub active_section: Option<SectionId>,
    pub menu_open: bool,
    pub modal: ModalState,
}

impl ViewSnapshot {
    pub fn is_active(&self, section: &SectionId) -> bool {
        self.active_section.as_ref() == Some(section)
    }
}
