use std::collections::HashMap;

use folio_protocol::{Extent, SectionId};

/// Read access to live section extents, owned by the presentation layer.
///
/// `None` means the section cannot be measured right now (not mounted,
/// hidden); the scroll scan skips it for that pass.
pub trait LayoutSource {
    fn extent(&self, section: &SectionId) -> Option<Extent>;
}

impl LayoutSource for HashMap<SectionId, Extent> {
    fn extent(&self, section: &SectionId) -> Option<Extent> {
        self.get(section).copied()
    }
}

impl<L: LayoutSource + ?Sized> LayoutSource for &L {
    fn extent(&self, section: &SectionId) -> Option<Extent> {
        (**self).extent(section)
    }
}

/// A measured layout kept in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    entries: Vec<(SectionId, Extent)>,
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay sections out back to back from offset 0, no gaps.
    pub fn stacked<'a>(heights: impl IntoIterator<Item = (&'a SectionId, f64)>) -> Self {
        let mut layout = Self::new();
        let mut cursor = 0.0;
        for (id, height) in heights {
            layout.set(id.clone(), Extent::new(cursor, height));
            cursor += height;
        }
        layout
    }

    /// Record or replace the extent of a section.
    pub fn set(&mut self, section: SectionId, extent: Extent) {
        match self.entries.iter_mut().find(|(id, _)| *id == section) {
            Some((_, slot)) => *slot = extent,
            None => self.entries.push((section, extent)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SectionId, Extent)> {
        self.entries.iter()
    }
}

impl LayoutSource for SectionLayout {
    fn extent(&self, section: &SectionId) -> Option<Extent> {
        self.entries
            .iter()
            .find(|(id, _)| id == section)
            .map(|(_, extent)| *extent)
    }
}
