use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio_core::signal::bind_controller;
use folio_core::{
    ScrollFeed, ScrollSubscription, SectionLayout, SiteCatalog, ViewStateController,
};
use folio_protocol::{ViewCommand, ViewSnapshot};

use crate::document::{CONTACT_SECTION, Document, rows_to_px};
use crate::form::FormEditor;

const MOUSE_SCROLL_ROWS: usize = 3;

/// Message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Acknowledged(String),
    Rejected(String),
}

/// Terminal-side state around the controller: the laid-out document, the
/// viewport position, and input modes. UI state the page shares with
/// other front ends (active section, menu, modal) lives only in the
/// controller.
pub struct App<'a> {
    catalog: &'a SiteCatalog,
    controller: Rc<RefCell<ViewStateController>>,
    feed: ScrollFeed,
    layout: Rc<RefCell<SectionLayout>>,
    subscription: Option<ScrollSubscription>,
    document: Document,
    scroll_row: usize,
    viewport_rows: usize,
    selected_card: usize,
    form: FormEditor,
    status: Option<Status>,
    quit: bool,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a SiteCatalog, width: usize) -> Self {
        let controller = Rc::new(RefCell::new(ViewStateController::from_catalog(catalog)));
        let document = Document::build(catalog, width);
        let layout = Rc::new(RefCell::new(document.layout().clone()));
        let feed = ScrollFeed::new();
        let subscription = bind_controller(&feed, Rc::clone(&controller), Rc::clone(&layout));
        Self {
            catalog,
            controller,
            feed,
            layout,
            subscription: Some(subscription),
            document,
            scroll_row: 0,
            viewport_rows: 1,
            selected_card: 0,
            form: FormEditor::default(),
            status: None,
            quit: false,
        }
    }

    pub fn catalog(&self) -> &SiteCatalog {
        self.catalog
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        self.controller.borrow().snapshot()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn selected_card(&self) -> usize {
        self.selected_card
    }

    pub fn form(&self) -> &FormEditor {
        &self.form
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-measure for a new viewport. The document is rebuilt when the
    /// content width changes; the controller sees the new extents on the
    /// next scroll event, which this emits.
    pub fn resize(&mut self, width: usize, viewport_rows: usize) {
        self.viewport_rows = viewport_rows.max(1);
        if width.max(20) != self.document.width() {
            self.document = Document::build(self.catalog, width);
            *self.layout.borrow_mut() = self.document.layout().clone();
            log::debug!("relaid out at {width} columns: {} rows", self.document.total_rows());
        }
        self.scroll_to(self.scroll_row);
    }

    /// Move the viewport and deliver the scroll event.
    pub fn scroll_to(&mut self, row: usize) {
        let max = self.document.total_rows().saturating_sub(1);
        self.scroll_row = row.min(max);
        self.feed.emit(rows_to_px(self.scroll_row));
    }

    fn scroll_by(&mut self, delta: isize) {
        let row = self.scroll_row.saturating_add_signed(delta);
        self.scroll_to(row);
    }

    /// Carry out what the controller asked for.
    pub fn apply(&mut self, commands: Vec<ViewCommand>) {
        for command in commands {
            match command {
                ViewCommand::ScrollToSection { section } => {
                    if let Some(row) = self.document.row_of(&section) {
                        self.scroll_to(row);
                    }
                }
                ViewCommand::ShowAcknowledgement { message } => {
                    self.status = Some(Status::Acknowledged(message));
                }
                ViewCommand::ResetContactForm => self.form.reset(),
            }
        }
    }

    /// Navigate to the n-th section (0-based) in catalog order.
    fn navigate_nth(&mut self, n: usize) {
        let catalog = self.catalog;
        if let Some(section) = catalog.sections.sections().get(n) {
            self.navigate_to(section.id.as_str());
        }
    }

    /// Returns whether the navigation was accepted.
    fn navigate_to(&mut self, section: &str) -> bool {
        let result = self.controller.borrow_mut().navigate(section);
        match result {
            Ok(command) => {
                self.apply(vec![command]);
                true
            }
            Err(e) => {
                self.status = Some(Status::Rejected(e.to_string()));
                false
            }
        }
    }

    fn select_card(&mut self, index: usize) {
        let count = self.document.card_count();
        if count == 0 {
            return;
        }
        self.selected_card = index % count;
        if let Some(row) = self.document.card_row(self.selected_card) {
            let visible = self.scroll_row..self.scroll_row + self.viewport_rows;
            if !visible.contains(&row) {
                self.scroll_to(row.saturating_sub(2));
            }
        }
    }

    fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(submission) => {
                let commands = self.controller.borrow().submit_contact(&submission);
                self.apply(commands);
            }
            Err(e) => self.status = Some(Status::Rejected(e.to_string())),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.controller.borrow().modal().is_open() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Backspace
            ) {
                self.controller.borrow_mut().close_modal();
            }
            return;
        }

        if self.form.is_editing() {
            match key.code {
                KeyCode::Esc => self.form.stop(),
                KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(c) => self.form.insert(c),
                _ => {}
            }
            return;
        }

        self.status = None;
        let page = self.viewport_rows as isize;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to(0),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to(usize::MAX),
            KeyCode::Char('m') => {
                self.controller.borrow_mut().toggle_menu();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '1' as usize;
                self.navigate_nth(n);
            }
            KeyCode::Tab => self.select_card(self.selected_card + 1),
            KeyCode::BackTab => {
                let count = self.document.card_count().max(1);
                self.select_card(self.selected_card + count - 1);
            }
            KeyCode::Enter => {
                let result = self.controller.borrow_mut().open_project_at(self.selected_card);
                if let Err(e) = result {
                    self.status = Some(Status::Rejected(e.to_string()));
                }
            }
            KeyCode::Char('f') => {
                if self.navigate_to(CONTACT_SECTION) {
                    self.form.start();
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll_by(MOUSE_SCROLL_ROWS as isize),
            MouseEventKind::ScrollUp => self.scroll_by(-(MOUSE_SCROLL_ROWS as isize)),
            _ => {}
        }
    }

    /// Release the scroll listener. Called once when the view goes away.
    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("scroll subscription released");
        }
    }
}
