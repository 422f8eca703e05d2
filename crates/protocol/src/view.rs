use serde::Serialize;

use crate::project::Link;
use crate::theme::ThemeToken;
use crate::types::SectionId;

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub section: SectionId,
    pub label: String,
    pub href: String,
    pub active: bool,
    pub color: ThemeToken,
}

/// A project tile in the showcase grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    /// Catalog index, passed back to open the detail modal.
    pub index: usize,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub repo: Link,
}

/// Render-ready contents of the open project modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub image_alt: String,
    pub tags: Vec<String>,
    /// "Live Demo" when the project has one, otherwise "Request Code".
    pub primary: Link,
    pub repo: Link,
}
