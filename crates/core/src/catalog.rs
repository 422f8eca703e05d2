use folio_protocol::Project;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{Owner, ProjectCatalog, Section, SectionCatalog};
use crate::scroll::HEADER_LOOKAHEAD;

/// Catalog that ships with the crate: the stock portfolio content.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog has no sections")]
    NoSections,
    #[error("section with an empty id")]
    EmptySectionId,
    #[error("duplicate section id `{0}`")]
    DuplicateSection(String),
    #[error("project #{0} has no title")]
    UntitledProject(usize),
    #[error("lookahead must be a finite, non-negative number (got {0})")]
    InvalidLookahead(f64),
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    owner: Owner,
    #[serde(default = "default_lookahead")]
    lookahead: f64,
    sections: Vec<Section>,
    #[serde(default)]
    projects: Vec<Project>,
}

fn default_lookahead() -> f64 {
    HEADER_LOOKAHEAD
}

/// Everything static the page needs: who it is about, the navigable
/// sections, and the project showcase. Loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteCatalog {
    pub owner: Owner,
    pub sections: SectionCatalog,
    pub projects: ProjectCatalog,
    /// Distance below the scroll offset that decides which section sits
    /// under the fixed header.
    pub lookahead: f64,
}

impl SiteCatalog {
    /// Parse and validate a JSON catalog.
    pub fn from_json(data: &[u8]) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_slice(data)?;
        let catalog = Self {
            owner: file.owner,
            sections: SectionCatalog::new(file.sections)?,
            projects: ProjectCatalog::new(file.projects)?,
            lookahead: validate_lookahead(file.lookahead)?,
        };
        log::debug!(
            "catalog loaded: {} sections, {} projects, lookahead {}",
            catalog.sections.len(),
            catalog.projects.len(),
            catalog.lookahead
        );
        Ok(catalog)
    }

    /// The catalog compiled into the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG.as_bytes())
    }

    /// Replace the lookahead, e.g. from a command-line override.
    pub fn with_lookahead(mut self, lookahead: f64) -> Result<Self, CatalogError> {
        self.lookahead = validate_lookahead(lookahead)?;
        Ok(self)
    }
}

fn validate_lookahead(lookahead: f64) -> Result<f64, CatalogError> {
    if lookahead.is_finite() && lookahead >= 0.0 {
        Ok(lookahead)
    } else {
        Err(CatalogError::InvalidLookahead(lookahead))
    }
}
