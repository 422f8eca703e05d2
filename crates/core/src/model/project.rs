use std::sync::Arc;

use folio_protocol::Project;

use crate::catalog::CatalogError;

/// Immutable, ordered list of showcased projects.
///
/// Projects are handed out as `Arc`s so the modal can hold one without
/// copying or borrowing from the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<Arc<Project>>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        if let Some(index) = projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(CatalogError::UntitledProject(index));
        }
        Ok(Self {
            projects: projects.into_iter().map(Arc::new).collect(),
        })
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Project>> {
        self.projects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Project>> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
