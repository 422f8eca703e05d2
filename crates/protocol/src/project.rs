use serde::{Deserialize, Serialize};

/// A showcased project, loaded once from the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Screenshot or illustration URI.
    pub image: String,
    /// Display order is significant.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source repository URI.
    #[serde(default)]
    pub repo: Option<String>,
    /// Live demo URI. `None` means visitors are offered a "request code"
    /// contact link instead.
    #[serde(default)]
    pub demo: Option<String>,
}

impl Project {
    pub fn has_demo(&self) -> bool {
        self.demo.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// Repository link, with an empty string counted as missing.
    pub fn repo_url(&self) -> Option<&str> {
        self.repo.as_deref().filter(|r| !r.is_empty())
    }
}

/// An outbound link rendered as a button or anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Whether the presentation layer should open it outside the page.
    pub external: bool,
}

impl Link {
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
        }
    }

    pub fn internal(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
        }
    }
}
