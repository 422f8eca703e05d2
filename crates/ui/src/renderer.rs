use egui::{RichText, Ui};
use folio_protocol::{Link, ModalView, NavItem, ProjectCard, ThemeToken};

use crate::theme::{self, ThemeMode};

/// Card width in the project grid.
pub const CARD_WIDTH: f32 = 300.0;

/// Draw one navigation entry. Returns true when clicked.
pub fn nav_item(ui: &mut Ui, item: &NavItem, mode: ThemeMode) -> bool {
    let mut text = RichText::new(&item.label).color(theme::resolve(item.color, mode));
    if item.active {
        text = text.strong().underline();
    }
    ui.add(egui::Button::new(text).frame(false))
        .on_hover_text(&item.href)
        .clicked()
}

pub fn tag_row(ui: &mut Ui, tags: &[String], mode: ThemeMode) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            egui::Frame::new()
                .fill(theme::resolve(ThemeToken::FieldBackground, mode))
                .corner_radius(egui::CornerRadius::same(10))
                .inner_margin(egui::Margin::symmetric(8, 2))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(tag)
                            .size(theme::FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::Tag, mode)),
                    );
                });
        }
    });
}

fn link(ui: &mut Ui, link: &Link, mode: ThemeMode) {
    let text = RichText::new(&link.label).color(theme::resolve(ThemeToken::Link, mode));
    if link.external {
        ui.hyperlink_to(text, &link.href);
    } else {
        ui.add(egui::Hyperlink::from_label_and_url(text, &link.href).open_in_new_tab(false));
    }
}

/// Draw a project tile. Returns true when its details were requested.
pub fn project_card(ui: &mut Ui, card: &ProjectCard, mode: ThemeMode) -> bool {
    let mut open = false;
    egui::Frame::group(ui.style())
        .fill(theme::resolve(ThemeToken::Surface, mode))
        .stroke(egui::Stroke::new(1.0, theme::resolve(ThemeToken::Border, mode)))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.label(
                RichText::new(&card.title)
                    .strong()
                    .size(theme::FONT_BODY + 2.0)
                    .color(theme::resolve(ThemeToken::TextPrimary, mode)),
            );
            ui.label(
                RichText::new(&card.description)
                    .color(theme::resolve(ThemeToken::TextMuted, mode)),
            );
            tag_row(ui, &card.tags, mode);
            ui.horizontal(|ui| {
                let details =
                    RichText::new("Details").color(theme::resolve(ThemeToken::Accent, mode));
                open = ui.button(details).clicked();
                link(ui, &card.repo, mode);
            });
        });
    open
}

/// Body of the project detail window.
pub fn modal_contents(ui: &mut Ui, view: &ModalView, mode: ThemeMode) {
    ui.label(
        RichText::new(&view.image_alt)
            .italics()
            .size(theme::FONT_CAPTION)
            .color(theme::resolve(ThemeToken::TextMuted, mode)),
    )
    .on_hover_text(&view.image);
    ui.add_space(6.0);
    ui.label(
        RichText::new(&view.description).color(theme::resolve(ThemeToken::TextSecondary, mode)),
    );
    ui.add_space(6.0);
    tag_row(ui, &view.tags, mode);
    ui.separator();
    ui.horizontal(|ui| {
        link(ui, &view.primary, mode);
        ui.separator();
        link(ui, &view.repo, mode);
    });
}

pub fn section_heading(ui: &mut Ui, label: &str, mode: ThemeMode) {
    ui.label(
        RichText::new(label)
            .size(theme::FONT_TITLE)
            .strong()
            .color(theme::resolve(ThemeToken::SectionTitle, mode)),
    );
    ui.add_space(4.0);
}
