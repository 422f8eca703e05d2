use folio_core::contact::ContactField;
use folio_core::{LayoutSource, SectionLayout, SiteCatalog};
use folio_core::views::project_cards;
use folio_protocol::{Extent, SectionId};

/// Layout pixels per terminal row, so catalog lookaheads keep their meaning.
pub const ROW_PX: f64 = 20.0;

/// Sections shorter than this are padded so each one gets a screenful of
/// scroll travel.
const MIN_SECTION_ROWS: usize = 6;

const PROJECTS_SECTION: &str = "projects";
pub const CONTACT_SECTION: &str = "contact";

pub fn rows_to_px(rows: usize) -> f64 {
    rows as f64 * ROW_PX
}

pub fn px_to_row(px: f64) -> usize {
    if px.is_finite() && px > 0.0 {
        (px / ROW_PX).round() as usize
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocLine {
    Heading(String),
    Text(String),
    Blank,
    CardTitle { index: usize, title: String },
    CardText { index: usize, text: String },
    CardTags { index: usize, tags: Vec<String> },
    Field(ContactField),
    Submit,
}

impl DocLine {
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Self::CardTitle { index, .. }
            | Self::CardText { index, .. }
            | Self::CardTags { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// The page flattened into terminal rows, plus where each section landed.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<DocLine>,
    layout: SectionLayout,
    card_rows: Vec<usize>,
    width: usize,
}

impl Document {
    /// Lay the catalog out for a content area `width` columns wide.
    pub fn build(catalog: &SiteCatalog, width: usize) -> Self {
        let width = width.max(20);
        let mut lines = Vec::new();
        let mut layout = SectionLayout::new();
        let mut card_rows = Vec::new();

        for section in catalog.sections.iter() {
            let start = lines.len();
            lines.push(DocLine::Heading(section.label.clone()));
            for paragraph in &section.summary {
                lines.extend(wrap(paragraph, width).into_iter().map(DocLine::Text));
            }
            lines.push(DocLine::Blank);

            if section.id == PROJECTS_SECTION {
                for card in project_cards(&catalog.projects, &catalog.owner) {
                    card_rows.push(lines.len());
                    lines.push(DocLine::CardTitle {
                        index: card.index,
                        title: card.title,
                    });
                    for text in wrap(&card.description, width.saturating_sub(2)) {
                        lines.push(DocLine::CardText {
                            index: card.index,
                            text,
                        });
                    }
                    lines.push(DocLine::CardTags {
                        index: card.index,
                        tags: card.tags,
                    });
                    lines.push(DocLine::Blank);
                }
            }

            if section.id == CONTACT_SECTION {
                lines.extend(ContactField::ALL.into_iter().map(DocLine::Field));
                lines.push(DocLine::Submit);
                lines.push(DocLine::Blank);
            }

            while lines.len() - start < MIN_SECTION_ROWS {
                lines.push(DocLine::Blank);
            }
            layout.set(
                section.id.clone(),
                Extent::new(rows_to_px(start), rows_to_px(lines.len() - start)),
            );
        }

        Self {
            lines,
            layout,
            card_rows,
            width,
        }
    }

    pub fn lines(&self) -> &[DocLine] {
        &self.lines
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn total_rows(&self) -> usize {
        self.lines.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// First row of a section.
    pub fn row_of(&self, section: &SectionId) -> Option<usize> {
        self.layout.extent(section).map(|e| px_to_row(e.start))
    }

    /// First row of a project card.
    pub fn card_row(&self, index: usize) -> Option<usize> {
        self.card_rows.get(index).copied()
    }

    pub fn card_count(&self) -> usize {
        self.card_rows.len()
    }
}

/// Greedy word wrap on whitespace. Words longer than `width` get a line of
/// their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let extra = if current.is_empty() { 0 } else { 1 };
        if !current.is_empty() && current.chars().count() + extra + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
