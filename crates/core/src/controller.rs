use std::sync::Arc;

use folio_protocol::{ModalState, Project, SectionId, ViewCommand, ViewSnapshot};
use thiserror::Error;

use crate::catalog::SiteCatalog;
use crate::contact::{ACKNOWLEDGEMENT, ContactSubmission};
use crate::layout::LayoutSource;
use crate::model::{ProjectCatalog, SectionCatalog};
use crate::scroll::{self, HEADER_LOOKAHEAD};

/// Caller contract violations. These point at a mismatch between the
/// catalog and the view that issued the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
    #[error("no project at index {index} (catalog has {len})")]
    UnknownProject { index: usize, len: usize },
}

/// Owner of the page's UI state: which section is highlighted in the
/// navigation, whether the compact menu is expanded, and which project (if
/// any) is shown in the detail modal.
///
/// Every transition runs to completion and returns; nothing here is timed
/// or asynchronous. Effects on the viewport are returned as
/// [`ViewCommand`]s for the presentation layer to apply.
#[derive(Debug, Clone)]
pub struct ViewStateController {
    sections: SectionCatalog,
    projects: ProjectCatalog,
    lookahead: f64,
    active_section: Option<SectionId>,
    menu_open: bool,
    modal: ModalState,
}

impl ViewStateController {
    /// Controller over `sections` with the default header lookahead and no
    /// project catalog. The first section starts out active.
    pub fn new(sections: SectionCatalog) -> Self {
        let active_section = Some(sections.first().id.clone());
        Self {
            sections,
            projects: ProjectCatalog::default(),
            lookahead: HEADER_LOOKAHEAD,
            active_section,
            menu_open: false,
            modal: ModalState::Closed,
        }
    }

    pub fn from_catalog(catalog: &SiteCatalog) -> Self {
        let mut controller = Self::new(catalog.sections.clone());
        controller.projects = catalog.projects.clone();
        controller.lookahead = catalog.lookahead;
        controller
    }

    pub fn sections(&self) -> &SectionCatalog {
        &self.sections
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    pub fn active_section(&self) -> Option<&SectionId> {
        self.active_section.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Recompute the active section from a scroll position.
    ///
    /// The section under `scroll_offset + lookahead` wins; when nothing
    /// contains that point the previous section stays active. Returns
    /// whether the active section changed.
    pub fn on_scroll<L>(&mut self, scroll_offset: f64, layout: &L) -> bool
    where
        L: LayoutSource + ?Sized,
    {
        let marker = scroll::marker(scroll_offset, self.lookahead);
        let Some(matched) = scroll::first_match(&self.sections, layout, marker) else {
            return false;
        };
        if self.active_section.as_ref() == Some(matched) {
            return false;
        }
        log::debug!(
            "active section {} -> {matched} (offset {scroll_offset})",
            self.active_section
                .as_ref()
                .map_or("none", SectionId::as_str),
        );
        self.active_section = Some(matched.clone());
        true
    }

    /// Handle a navigation click.
    ///
    /// Closes the menu and asks the presentation layer to bring the target
    /// into view. The active section is left for the resulting scroll
    /// signal to update.
    pub fn navigate(&mut self, target: &str) -> Result<ViewCommand, ControllerError> {
        let Some(section) = self.sections.get(target) else {
            log::warn!("navigation to unknown section `{target}`");
            return Err(ControllerError::UnknownSection(target.to_owned()));
        };
        let command = ViewCommand::ScrollToSection {
            section: section.id.clone(),
        };
        if self.menu_open {
            log::debug!("menu closed by navigation to {target}");
        }
        self.menu_open = false;
        Ok(command)
    }

    /// Flip the compact navigation menu. Returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        log::debug!("menu open: {}", self.menu_open);
        self.menu_open
    }

    /// Show `project` in the detail modal, replacing whatever was shown.
    pub fn open_project(&mut self, project: Arc<Project>) {
        log::debug!("modal open: {}", project.title);
        self.modal = ModalState::Open(project);
    }

    /// Open the modal for the project at `index` in the catalog.
    pub fn open_project_at(&mut self, index: usize) -> Result<(), ControllerError> {
        let project = self
            .projects
            .get(index)
            .cloned()
            .ok_or(ControllerError::UnknownProject {
                index,
                len: self.projects.len(),
            })?;
        self.open_project(project);
        Ok(())
    }

    pub fn close_modal(&mut self) {
        if self.modal.is_open() {
            log::debug!("modal closed");
        }
        self.modal = ModalState::Closed;
    }

    /// Acknowledge a contact message. Nothing is sent anywhere; the
    /// returned commands show the acknowledgement and clear the form.
    pub fn submit_contact(&self, submission: &ContactSubmission) -> Vec<ViewCommand> {
        // Name and email stay out of the log.
        log::info!("contact message received: {}", submission.subject());
        vec![
            ViewCommand::ShowAcknowledgement {
                message: ACKNOWLEDGEMENT.to_owned(),
            },
            ViewCommand::ResetContactForm,
        ]
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            active_section: self.active_section.clone(),
            menu_open: self.menu_open,
            modal: self.modal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use crate::layout::SectionLayout;
    use crate::model::Section;
    use folio_protocol::Extent;
    use pretty_assertions::assert_eq;

    fn controller() -> ViewStateController {
        ViewStateController::new(SectionCatalog::default())
    }

    /// home[0,500) about[500,900) with nothing measured after that.
    fn scenario() -> (ViewStateController, SectionLayout) {
        let sections = SectionCatalog::new(vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
        ])
        .unwrap();
        let mut layout = SectionLayout::new();
        layout.set("home".into(), Extent::new(0.0, 500.0));
        layout.set("about".into(), Extent::new(500.0, 400.0));
        (ViewStateController::new(sections), layout)
    }

    fn project(title: &str) -> Arc<Project> {
        Arc::new(Project {
            title: title.into(),
            description: format!("{title} description"),
            image: "https://example.com/img.png".into(),
            tags: vec!["Rust".into()],
            repo: None,
            demo: None,
        })
    }

    fn active(c: &ViewStateController) -> Option<&str> {
        c.active_section().map(SectionId::as_str)
    }

    #[test]
    fn initial_state() {
        let c = controller();
        assert_eq!(active(&c), Some("home"));
        assert!(!c.menu_open());
        assert_eq!(c.modal(), &ModalState::Closed);
        assert_eq!(c.lookahead(), HEADER_LOOKAHEAD);
    }

    #[test]
    fn scroll_scenario_from_header_offset() {
        let (mut c, layout) = scenario();
        assert!(c.on_scroll(450.0, &layout));
        assert_eq!(active(&c), Some("about"));
        assert!(c.on_scroll(0.0, &layout));
        assert_eq!(active(&c), Some("home"));
    }

    #[test]
    fn offsets_inside_a_section_win_regardless_of_prior_state() {
        let (mut c, layout) = scenario();
        for prior in [0.0, 450.0] {
            for offset in [401.0, 500.0, 650.0, 799.0] {
                c.on_scroll(prior, &layout);
                c.on_scroll(offset, &layout);
                assert_eq!(active(&c), Some("about"), "prior {prior}, offset {offset}");
            }
        }
    }

    #[test]
    fn gap_keeps_previous_section() {
        let (mut c, mut layout) = scenario();
        layout.set("about".into(), Extent::new(700.0, 400.0));
        c.on_scroll(700.0, &layout);
        assert_eq!(active(&c), Some("about"));
        // marker 550 falls between home's end (500) and about's start (700).
        assert!(!c.on_scroll(450.0, &layout));
        assert_eq!(active(&c), Some("about"));
        // Past the last section as well.
        assert!(!c.on_scroll(5_000.0, &layout));
        assert_eq!(active(&c), Some("about"));
    }

    #[test]
    fn repeated_scroll_is_idempotent() {
        let (mut c, layout) = scenario();
        c.on_scroll(450.0, &layout);
        let first = c.snapshot();
        assert!(!c.on_scroll(450.0, &layout));
        assert_eq!(c.snapshot(), first);
    }

    #[test]
    fn monotonic_scroll_walks_sections_in_order() {
        let mut c = controller();
        let ids: Vec<SectionId> = c.sections().ids().cloned().collect();
        let layout = SectionLayout::stacked(ids.iter().map(|id| (id, 300.0)));
        let mut seen: Vec<String> = Vec::new();
        let mut offset = 0.0;
        while offset < 300.0 * ids.len() as f64 {
            c.on_scroll(offset, &layout);
            let current = active(&c).unwrap_or_default().to_owned();
            if seen.last() != Some(&current) {
                seen.push(current);
            }
            offset += 25.0;
        }
        assert_eq!(
            seen,
            ["home", "about", "experience", "projects", "skills", "contact"]
        );
    }

    #[test]
    fn unmeasured_layout_leaves_state_alone() {
        let mut c = controller();
        let layout = SectionLayout::new();
        assert!(!c.on_scroll(1_000.0, &layout));
        assert_eq!(active(&c), Some("home"));
        assert!(!c.on_scroll(f64::NAN, &layout));
        assert_eq!(active(&c), Some("home"));
    }

    #[test]
    fn navigate_closes_menu_and_requests_scroll() {
        let mut c = controller();
        c.toggle_menu();
        let cmd = c.navigate("projects").unwrap();
        assert_eq!(
            cmd,
            ViewCommand::ScrollToSection {
                section: "projects".into()
            }
        );
        assert!(!c.menu_open());
    }

    #[test]
    fn navigate_closes_menu_even_when_already_closed() {
        let mut c = controller();
        assert!(c.navigate("contact").is_ok());
        assert!(!c.menu_open());
    }

    #[test]
    fn navigate_does_not_move_active_section() {
        let mut c = controller();
        c.navigate("skills").unwrap();
        assert_eq!(active(&c), Some("home"));
    }

    #[test]
    fn navigate_to_unknown_section_fails_without_side_effects() {
        let mut c = controller();
        c.toggle_menu();
        let before = c.snapshot();
        assert_eq!(
            c.navigate("blog"),
            Err(ControllerError::UnknownSection("blog".into()))
        );
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn toggle_menu_flips() {
        let mut c = controller();
        assert!(c.toggle_menu());
        assert!(c.menu_open());
        assert!(!c.toggle_menu());
        assert!(!c.menu_open());
    }

    #[test]
    fn open_project_overwrites_previous() {
        let mut c = controller();
        c.open_project(project("X"));
        assert!(c.modal().is_open());
        assert_eq!(c.modal().project().map(|p| p.title.as_str()), Some("X"));
        c.open_project(project("Y"));
        assert_eq!(c.modal().project().map(|p| p.title.as_str()), Some("Y"));
    }

    #[test]
    fn open_then_close_is_closed() {
        for title in ["X", "Y", ""] {
            let mut c = controller();
            c.open_project(project(title));
            c.close_modal();
            assert_eq!(c.modal(), &ModalState::Closed);
            assert!(c.modal().project().is_none());
        }
    }

    #[test]
    fn close_modal_is_idempotent() {
        let mut c = controller();
        c.open_project(project("X"));
        c.close_modal();
        let once = c.snapshot();
        c.close_modal();
        assert_eq!(c.snapshot(), once);
    }

    #[test]
    fn open_project_at_uses_catalog() {
        let catalog = SiteCatalog::bundled().unwrap();
        let mut c = ViewStateController::from_catalog(&catalog);
        c.open_project_at(1).unwrap();
        assert_eq!(
            c.modal().project().map(|p| p.title.as_str()),
            Some("eCommerce Web Application")
        );
        assert_eq!(
            c.open_project_at(99),
            Err(ControllerError::UnknownProject { index: 99, len: 8 })
        );
        // The failed call left the open modal alone.
        assert!(c.modal().is_open());
    }

    #[test]
    fn submit_contact_acknowledges_without_state_change() {
        let c = controller();
        let before = c.snapshot();
        let submission = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
        .validate()
        .unwrap();
        let commands = c.submit_contact(&submission);
        assert_eq!(
            commands,
            vec![
                ViewCommand::ShowAcknowledgement {
                    message: ACKNOWLEDGEMENT.into()
                },
                ViewCommand::ResetContactForm,
            ]
        );
        assert_eq!(c.snapshot(), before);
    }

    /// Records log lines emitted on the current thread.
    struct CaptureLog;

    thread_local! {
        static CAPTURED: std::cell::RefCell<Vec<String>> =
            const { std::cell::RefCell::new(Vec::new()) };
    }

    impl log::Log for CaptureLog {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            let line = format!("{} {}", record.level(), record.args());
            CAPTURED.with(|c| c.borrow_mut().push(line));
        }

        fn flush(&self) {}
    }

    static CAPTURE_LOG: CaptureLog = CaptureLog;

    fn captured_during(f: impl FnOnce()) -> Vec<String> {
        // Another test may have installed it already.
        let _ = log::set_logger(&CAPTURE_LOG);
        log::set_max_level(log::LevelFilter::Trace);
        CAPTURED.with(|c| c.borrow_mut().clear());
        f();
        CAPTURED.with(|c| c.take())
    }

    #[test]
    fn contact_receipt_logs_subject_only() {
        let c = controller();
        let submission = ContactForm {
            name: "Ada Secret".into(),
            email: "ada@private.example".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
        .validate()
        .unwrap();
        let lines = captured_during(|| {
            c.submit_contact(&submission);
        });
        assert_eq!(lines, ["INFO contact message received: Hi"]);
        for line in &lines {
            assert!(!line.contains("Ada Secret"), "{line}");
            assert!(!line.contains("ada@private.example"), "{line}");
        }
    }

    #[test]
    fn independent_state_fields() {
        let (mut c, layout) = scenario();
        c.toggle_menu();
        c.open_project(project("X"));
        c.on_scroll(450.0, &layout);
        let snapshot = c.snapshot();
        assert_eq!(snapshot.active_section, Some(SectionId::from("about")));
        assert!(snapshot.menu_open);
        assert!(snapshot.modal.is_open());
    }
}
