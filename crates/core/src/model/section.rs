use std::collections::HashSet;

use folio_protocol::SectionId;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// Navigation order of the stock page layout.
pub const DEFAULT_SECTIONS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// A navigable region of the page. Its extent is not stored here; the
/// presentation layer measures it on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub label: String,
    /// Lead-in text shown under the section heading.
    #[serde(default)]
    pub summary: Vec<String>,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            summary: Vec::new(),
        }
    }
}

/// Ordered, non-empty list of sections with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::NoSections);
        }
        let mut seen = HashSet::with_capacity(sections.len());
        for section in &sections {
            if section.id.as_str().is_empty() {
                return Err(CatalogError::EmptySectionId);
            }
            if !seen.insert(section.id.as_str()) {
                return Err(CatalogError::DuplicateSection(section.id.to_string()));
            }
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.sections.iter().map(|s| &s.id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn first(&self) -> &Section {
        // Non-empty by construction.
        &self.sections[0]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for SectionCatalog {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS
                .iter()
                .map(|(id, label)| Section::new(*id, *label))
                .collect(),
        }
    }
}
