use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;
use folio_core::contact::ContactField;
use folio_core::signal::bind_controller;
use folio_core::views::{modal_view, nav_items, project_cards};
use folio_core::{
    CatalogError, ContactForm, LayoutSource, ScrollFeed, ScrollSubscription, SectionLayout,
    SiteCatalog, ViewStateController,
};
use folio_protocol::{Extent, ProjectCard, SectionId, ThemeToken, ViewCommand};

use crate::renderer;
use crate::theme::{self, ThemeMode};

/// Below this width the nav links fold into the menu toggle.
const COMPACT_WIDTH: f32 = 768.0;
/// Vertical space after each section.
const SECTION_GAP: f32 = 64.0;
const CONTACT_SECTION: &str = "contact";
const PROJECTS_SECTION: &str = "projects";

/// Something the user did during a frame, handled once drawing is done.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Navigate(SectionId),
    ToggleMenu,
    OpenProject(usize),
    CloseModal,
    SubmitContact,
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Acknowledged(String),
    Rejected(String),
}

/// Main application state.
pub struct FolioApp {
    catalog: SiteCatalog,
    controller: Rc<RefCell<ViewStateController>>,
    feed: ScrollFeed,
    /// Keeps the controller subscribed until the app is dropped.
    _scroll_subscription: ScrollSubscription,
    /// Section extents measured on the last frame.
    layout: Rc<RefCell<SectionLayout>>,
    cards: Vec<ProjectCard>,
    form: ContactForm,
    notice: Option<Notice>,
    /// Section to bring to the top once its extent is known.
    scroll_target: Option<SectionId>,
    last_offset: Option<f32>,
    theme_mode: ThemeMode,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, CatalogError> {
        let app = Self::with_catalog(SiteCatalog::bundled()?);
        cc.egui_ctx.set_visuals(app.theme_mode.visuals());
        theme::apply_typography(&cc.egui_ctx);
        Ok(app)
    }

    pub fn with_catalog(catalog: SiteCatalog) -> Self {
        let controller = Rc::new(RefCell::new(ViewStateController::from_catalog(&catalog)));
        let layout = Rc::new(RefCell::new(SectionLayout::new()));
        let feed = ScrollFeed::new();
        let subscription = bind_controller(&feed, Rc::clone(&controller), Rc::clone(&layout));
        let cards = project_cards(&catalog.projects, &catalog.owner);
        log::debug!(
            "page ready: {} sections, {} cards",
            catalog.sections.len(),
            cards.len()
        );
        Self {
            catalog,
            controller,
            feed,
            _scroll_subscription: subscription,
            layout,
            cards,
            form: ContactForm::default(),
            notice: None,
            scroll_target: None,
            last_offset: None,
            theme_mode: ThemeMode::Dark,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Carry out what the controller asked for.
    fn apply(&mut self, commands: Vec<ViewCommand>) {
        for command in commands {
            match command {
                ViewCommand::ScrollToSection { section } => self.scroll_target = Some(section),
                ViewCommand::ShowAcknowledgement { message } => {
                    self.notice = Some(Notice::Acknowledged(message));
                }
                ViewCommand::ResetContactForm => self.form.clear(),
            }
        }
    }

    pub fn handle(&mut self, action: UiAction, ctx: Option<&egui::Context>) {
        match action {
            UiAction::Navigate(section) => {
                let result = self.controller.borrow_mut().navigate(section.as_str());
                match result {
                    Ok(command) => self.apply(vec![command]),
                    Err(e) => self.notice = Some(Notice::Rejected(e.to_string())),
                }
            }
            UiAction::ToggleMenu => {
                self.controller.borrow_mut().toggle_menu();
            }
            UiAction::OpenProject(index) => {
                let result = self.controller.borrow_mut().open_project_at(index);
                if let Err(e) = result {
                    self.notice = Some(Notice::Rejected(e.to_string()));
                }
            }
            UiAction::CloseModal => self.controller.borrow_mut().close_modal(),
            UiAction::SubmitContact => match self.form.validate() {
                Ok(submission) => {
                    let commands = self.controller.borrow().submit_contact(&submission);
                    self.apply(commands);
                }
                Err(e) => self.notice = Some(Notice::Rejected(e.to_string())),
            },
            UiAction::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                if let Some(ctx) = ctx {
                    ctx.set_visuals(self.theme_mode.visuals());
                }
            }
        }
    }

    /// Offset to jump to for a pending navigation, once the target has been
    /// measured.
    fn take_scroll_target(&mut self) -> Option<f32> {
        let section = self.scroll_target.as_ref()?;
        let extent = self.layout.borrow().extent(section)?;
        self.scroll_target = None;
        Some(extent.start as f32)
    }

    /// Deliver a scroll event when the viewport moved.
    fn observe_offset(&mut self, offset: f32) {
        if self.last_offset != Some(offset) {
            self.last_offset = Some(offset);
            self.feed.emit(f64::from(offset));
        }
    }

    fn nav_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let mode = self.theme_mode;
        let snapshot = self.controller.borrow().snapshot();
        let items = nav_items(&self.catalog.sections, &snapshot);
        let compact = ui.available_width() < COMPACT_WIDTH;

        ui.horizontal(|ui| {
            let logo = egui::RichText::new(&self.catalog.owner.name)
                .size(theme::FONT_TITLE)
                .strong()
                .color(theme::resolve(ThemeToken::Logo, mode));
            if ui.add(egui::Button::new(logo).frame(false)).clicked() {
                let first = self.catalog.sections.first();
                actions.push(UiAction::Navigate(first.id.clone()));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme_label = match mode {
                    ThemeMode::Dark => "☀",
                    ThemeMode::Light => "🌙",
                };
                if ui.button(theme_label).clicked() {
                    actions.push(UiAction::ToggleTheme);
                }
                if compact {
                    let glyph = if snapshot.menu_open { "✕" } else { "☰" };
                    if ui.button(glyph).clicked() {
                        actions.push(UiAction::ToggleMenu);
                    }
                } else {
                    for item in items.iter().rev() {
                        if renderer::nav_item(ui, item, mode) {
                            actions.push(UiAction::Navigate(item.section.clone()));
                        }
                    }
                }
            });
        });

        if compact && snapshot.menu_open {
            ui.separator();
            for item in &items {
                if renderer::nav_item(ui, item, mode) {
                    actions.push(UiAction::Navigate(item.section.clone()));
                }
            }
        }
    }

    /// Lay out every section, returning where each one landed relative to
    /// the top of the scrolled content.
    fn page(
        &mut self,
        ui: &mut egui::Ui,
        viewport_height: f32,
        actions: &mut Vec<UiAction>,
    ) -> SectionLayout {
        let mode = self.theme_mode;
        let origin = ui.cursor().top();
        let mut layout = SectionLayout::new();

        for (n, section) in self.catalog.sections.iter().enumerate() {
            let start = ui.cursor().top() - origin;

            if n == 0 {
                ui.add_space(viewport_height * 0.25);
                ui.label(
                    egui::RichText::new(&self.catalog.owner.name)
                        .size(theme::FONT_DISPLAY)
                        .strong()
                        .color(theme::resolve(ThemeToken::TextPrimary, mode)),
                );
                ui.label(
                    egui::RichText::new(&self.catalog.owner.headline)
                        .color(theme::resolve(ThemeToken::Accent, mode)),
                );
            } else {
                renderer::section_heading(ui, &section.label, mode);
            }
            for paragraph in &section.summary {
                ui.label(
                    egui::RichText::new(paragraph)
                        .color(theme::resolve(ThemeToken::TextSecondary, mode)),
                );
            }

            if section.id == PROJECTS_SECTION {
                ui.add_space(8.0);
                ui.horizontal_wrapped(|ui| {
                    for card in &self.cards {
                        if renderer::project_card(ui, card, mode) {
                            actions.push(UiAction::OpenProject(card.index));
                        }
                    }
                });
            }
            if section.id == CONTACT_SECTION {
                ui.add_space(8.0);
                contact_form(ui, &mut self.form, self.notice.as_ref(), mode, actions);
            }

            // The first section fills the viewport.
            if n == 0 {
                let used = ui.cursor().top() - origin - start;
                ui.add_space((viewport_height - used).max(0.0));
            } else {
                ui.add_space(SECTION_GAP);
            }

            let end = ui.cursor().top() - origin;
            layout.set(
                section.id.clone(),
                Extent::new(f64::from(start), f64::from(end - start)),
            );
        }
        layout
    }

    fn modal(&self, ctx: &egui::Context, backdrop: egui::Rect, actions: &mut Vec<UiAction>) {
        let mode = self.theme_mode;
        let snapshot = self.controller.borrow().snapshot();
        let Some(view) = modal_view(&snapshot.modal, &self.catalog.owner) else {
            return;
        };

        let backdrop_clicked = egui::Area::new(egui::Id::new("modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(backdrop.min)
            .show(ctx, |ui| {
                ui.painter().rect_filled(
                    backdrop,
                    egui::CornerRadius::ZERO,
                    theme::resolve(ThemeToken::ModalBackdrop, mode),
                );
                ui.allocate_rect(backdrop, egui::Sense::click()).clicked()
            })
            .inner;

        let mut open = true;
        let window = egui::Window::new(&view.title)
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .default_width(520.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| renderer::modal_contents(ui, &view, mode))
            .map(|shown| shown.response.rect);

        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let pointer = ctx.input(|i| i.pointer.interact_pos());
        if !open || escape || backdrop_dismisses(backdrop_clicked, pointer, window) {
            actions.push(UiAction::CloseModal);
        }
    }
}

/// A click on the backdrop closes the modal unless it landed on the window.
fn backdrop_dismisses(
    clicked: bool,
    pointer: Option<egui::Pos2>,
    window: Option<egui::Rect>,
) -> bool {
    match (pointer, window) {
        (Some(pos), Some(rect)) => clicked && !rect.contains(pos),
        _ => clicked,
    }
}

fn contact_form(
    ui: &mut egui::Ui,
    form: &mut ContactForm,
    notice: Option<&Notice>,
    mode: ThemeMode,
    actions: &mut Vec<UiAction>,
) {
    let width = ui.available_width().min(520.0);
    for field in ContactField::ALL {
        let edit = match field {
            ContactField::Message => {
                egui::TextEdit::multiline(form.field_mut(field)).desired_rows(5)
            }
            _ => egui::TextEdit::singleline(form.field_mut(field)),
        };
        ui.add(edit.hint_text(field.label()).desired_width(width));
    }
    ui.horizontal(|ui| {
        let send =
            egui::RichText::new("Send Message").color(theme::resolve(ThemeToken::Accent, mode));
        if ui.button(send).clicked() {
            actions.push(UiAction::SubmitContact);
        }
        match notice {
            Some(Notice::Acknowledged(message)) => {
                ui.colored_label(theme::resolve(ThemeToken::Acknowledgement, mode), message);
            }
            Some(Notice::Rejected(message)) => {
                ui.colored_label(theme::resolve(ThemeToken::Error, mode), message);
            }
            None => {}
        }
    });
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("nav").show(ctx, |ui| self.nav_bar(ui, &mut actions));

        let mut backdrop = egui::Rect::NOTHING;
        egui::CentralPanel::default().show(ctx, |ui| {
            backdrop = ui.max_rect();
            let viewport_height = ui.available_height();
            let mut area = egui::ScrollArea::vertical()
                .id_salt("page")
                .auto_shrink([false, false]);
            if let Some(offset) = self.take_scroll_target() {
                area = area.vertical_scroll_offset(offset);
            }
            let output = area.show(ui, |ui| self.page(ui, viewport_height, &mut actions));
            *self.layout.borrow_mut() = output.inner;
            self.observe_offset(output.state.offset.y);
        });

        self.modal(ctx, backdrop, &mut actions);

        let repaint = !actions.is_empty() || self.scroll_target.is_some();
        for action in actions {
            self.handle(action, Some(ctx));
        }
        if repaint {
            ctx.request_repaint();
        }
    }
}
