use folio_protocol::SectionId;

use crate::layout::LayoutSource;
use crate::model::SectionCatalog;

/// Height of the fixed navigation header in layout pixels. The section
/// under the header, not the one at the very top of the viewport, is the
/// one a reader is looking at.
pub const HEADER_LOOKAHEAD: f64 = 100.0;

/// The document position used to pick the active section.
pub fn marker(scroll_offset: f64, lookahead: f64) -> f64 {
    scroll_offset + lookahead
}

/// Scan sections in navigation order and return the first one whose
/// extent contains `marker`.
///
/// Overlapping extents resolve to whichever section comes first in the
/// catalog. Sections the layout cannot measure are skipped.
pub fn first_match<'a, L>(
    sections: &'a SectionCatalog,
    layout: &L,
    marker: f64,
) -> Option<&'a SectionId>
where
    L: LayoutSource + ?Sized,
{
    if !marker.is_finite() {
        return None;
    }
    sections.ids().find(|id| {
        layout
            .extent(id)
            .is_some_and(|extent| extent.contains(marker))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SectionLayout;
    use crate::model::Section;
    use folio_protocol::Extent;

    fn two_sections() -> (SectionCatalog, SectionLayout) {
        let catalog = SectionCatalog::new(vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
        ])
        .unwrap();
        let mut layout = SectionLayout::new();
        layout.set("home".into(), Extent::new(0.0, 500.0));
        layout.set("about".into(), Extent::new(500.0, 400.0));
        (catalog, layout)
    }

    #[test]
    fn marker_adds_lookahead() {
        assert_eq!(marker(450.0, HEADER_LOOKAHEAD), 550.0);
        assert_eq!(marker(0.0, 0.0), 0.0);
    }

    #[test]
    fn matches_section_containing_marker() {
        let (catalog, layout) = two_sections();
        assert_eq!(
            first_match(&catalog, &layout, 100.0).map(SectionId::as_str),
            Some("home")
        );
        assert_eq!(
            first_match(&catalog, &layout, 550.0).map(SectionId::as_str),
            Some("about")
        );
        assert_eq!(
            first_match(&catalog, &layout, 500.0).map(SectionId::as_str),
            Some("about")
        );
    }

    #[test]
    fn no_match_past_the_end() {
        let (catalog, layout) = two_sections();
        assert!(first_match(&catalog, &layout, 900.0).is_none());
        assert!(first_match(&catalog, &layout, -1.0).is_none());
    }

    #[test]
    fn overlap_resolves_to_catalog_order() {
        let (catalog, mut layout) = two_sections();
        // `about` now starts inside `home`.
        layout.set("about".into(), Extent::new(300.0, 600.0));
        assert_eq!(
            first_match(&catalog, &layout, 350.0).map(SectionId::as_str),
            Some("home")
        );
    }

    #[test]
    fn zero_height_section_is_skipped() {
        let (catalog, mut layout) = two_sections();
        layout.set("home".into(), Extent::new(0.0, 0.0));
        layout.set("about".into(), Extent::new(0.0, 400.0));
        assert_eq!(
            first_match(&catalog, &layout, 0.0).map(SectionId::as_str),
            Some("about")
        );
    }

    #[test]
    fn unmeasured_section_is_skipped() {
        let (catalog, _) = two_sections();
        let mut layout = SectionLayout::new();
        layout.set("about".into(), Extent::new(0.0, 400.0));
        assert_eq!(
            first_match(&catalog, &layout, 10.0).map(SectionId::as_str),
            Some("about")
        );
    }

    #[test]
    fn non_finite_marker_matches_nothing() {
        let (catalog, layout) = two_sections();
        assert!(first_match(&catalog, &layout, f64::NAN).is_none());
        assert!(first_match(&catalog, &layout, f64::INFINITY).is_none());
    }
}
