use folio_protocol::{NavItem, ThemeToken, ViewSnapshot};

use crate::model::SectionCatalog;

/// Build the navigation bar entries in section order, flagging the active
/// one.
pub fn nav_items(sections: &SectionCatalog, snapshot: &ViewSnapshot) -> Vec<NavItem> {
    sections
        .iter()
        .map(|section| {
            let active = snapshot.is_active(&section.id);
            NavItem {
                section: section.id.clone(),
                label: section.label.clone(),
                href: section.id.anchor(),
                active,
                color: if active {
                    ThemeToken::NavLinkActive
                } else {
                    ThemeToken::NavLink
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_protocol::{ModalState, SectionId};

    fn snapshot(active: Option<&str>) -> ViewSnapshot {
        ViewSnapshot {
            active_section: active.map(SectionId::from),
            menu_open: false,
            modal: ModalState::Closed,
        }
    }

    #[test]
    fn exactly_the_active_section_is_flagged() {
        let sections = SectionCatalog::default();
        let items = nav_items(&sections, &snapshot(Some("projects")));
        assert_eq!(items.len(), 6);
        let active: Vec<&str> = items
            .iter()
            .filter(|i| i.active)
            .map(|i| i.section.as_str())
            .collect();
        assert_eq!(active, ["projects"]);
        assert_eq!(items[3].color, ThemeToken::NavLinkActive);
        assert_eq!(items[0].color, ThemeToken::NavLink);
    }

    #[test]
    fn hrefs_are_anchors() {
        let items = nav_items(&SectionCatalog::default(), &snapshot(None));
        assert_eq!(items[5].href, "#contact");
        assert_eq!(items[5].label, "Contact");
        assert!(items.iter().all(|i| !i.active));
    }
}
