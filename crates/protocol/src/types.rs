use serde::{Deserialize, Serialize};

/// Identifier of a navigable section (`home`, `about`, ...).
///
/// Doubles as the element id the presentation layer scrolls to, so it is
/// kept as the exact string from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// In-page anchor for this section, e.g. `#projects`.
    pub fn anchor(&self) -> String {
        format!("#{}", self.0)
    }
}

impl PartialEq<str> for SectionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl std::borrow::Borrow<str> for SectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical extent of a section in layout pixels, measured by the
/// presentation layer at read time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub start: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(start: f64, height: f64) -> Self {
        Self { start, height }
    }

    pub fn end(&self) -> f64 {
        self.start + self.height
    }

    /// Whether the layout engine produced a usable measurement. Sections
    /// that are not mounted yet report NaN or negative heights.
    pub fn is_measurable(&self) -> bool {
        self.start.is_finite() && self.height.is_finite() && self.height >= 0.0
    }

    /// Half-open containment: `start <= y < start + height`.
    pub fn contains(&self, y: f64) -> bool {
        self.is_measurable() && y >= self.start && y < self.end()
    }
}
