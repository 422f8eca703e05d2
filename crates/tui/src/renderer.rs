use std::io::{Stdout, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::SiteCatalog;
use folio_core::contact::ContactField;
use folio_core::views::{modal_view, nav_items};
use folio_protocol::{ModalView, ThemeToken, ViewSnapshot};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Status};
use crate::document::DocLine;

/// Below this width the nav bar collapses behind the menu toggle.
const COMPACT_WIDTH: u16 = 80;
const MARGIN: u16 = 2;

fn theme_to_color(token: &ThemeToken) -> Color {
    match token {
        ThemeToken::Background => Color::Rgb(30, 30, 46),
        ThemeToken::Surface => Color::Rgb(49, 50, 68),
        ThemeToken::Border => Color::DarkGray,
        ThemeToken::NavBackground => Color::Rgb(24, 24, 37),
        ThemeToken::NavLink => Color::Gray,
        ThemeToken::NavLinkActive => Color::Rgb(137, 180, 250),
        ThemeToken::Logo => Color::Rgb(203, 166, 247),
        ThemeToken::TextPrimary => Color::White,
        ThemeToken::TextSecondary => Color::Gray,
        ThemeToken::TextMuted => Color::DarkGray,
        ThemeToken::SectionTitle => Color::Rgb(137, 180, 250),
        ThemeToken::Accent => Color::Rgb(250, 179, 135),
        ThemeToken::Tag => Color::Rgb(148, 226, 213),
        ThemeToken::Link => Color::LightBlue,
        ThemeToken::ModalBackdrop => Color::Black,
        ThemeToken::ModalSurface => Color::Rgb(49, 50, 68),
        ThemeToken::FieldBackground => Color::Rgb(49, 50, 68),
        ThemeToken::FieldFocused => Color::Rgb(69, 71, 90),
        ThemeToken::Error => Color::LightRed,
        ThemeToken::Acknowledgement => Color::Green,
    }
}

fn fg(token: ThemeToken) -> Style {
    Style::default().fg(theme_to_color(&token))
}

pub fn run_tui(catalog: &SiteCatalog) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(catalog, content_width(size.width));
    let result = event_loop(&mut terminal, &mut app);
    app.teardown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn content_width(terminal_width: u16) -> usize {
    usize::from(terminal_width.saturating_sub(MARGIN * 2))
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App<'_>) -> Result<()> {
    while !app.should_quit() {
        let size = terminal.size()?;
        // Header and status bar take a row each.
        app.resize(
            content_width(size.width),
            usize::from(size.height.saturating_sub(2)),
        );

        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &App<'_>) {
    let area = frame.area();
    let snapshot = app.snapshot();

    frame.render_widget(
        Block::default().style(Style::default().bg(theme_to_color(&ThemeToken::Background))),
        area,
    );

    let header_area = Rect::new(area.x, area.y, area.width, 1.min(area.height));
    draw_header(frame, app, &snapshot, header_area);

    let body_area = Rect::new(
        area.x + MARGIN.min(area.width),
        area.y + 1,
        area.width.saturating_sub(MARGIN * 2),
        area.height.saturating_sub(2),
    );
    draw_body(frame, app, body_area);

    if area.height > 1 {
        let status_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        draw_status(frame, app, status_area);
    }

    if snapshot.menu_open {
        draw_menu(frame, app, &snapshot, area);
    }
    if let Some(view) = modal_view(&snapshot.modal, &app.catalog().owner) {
        draw_modal(frame, &view, area);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App<'_>, snapshot: &ViewSnapshot, area: Rect) {
    let catalog = app.catalog();
    let mut spans = vec![Span::styled(
        format!(" {} ", catalog.owner.name),
        fg(ThemeToken::Logo).add_modifier(Modifier::BOLD),
    )];

    if area.width >= COMPACT_WIDTH {
        for (n, item) in nav_items(&catalog.sections, snapshot).iter().enumerate() {
            let mut style = fg(item.color);
            if item.active {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!("{} {}", n + 1, item.label), style));
        }
    } else {
        let glyph = if snapshot.menu_open { "✕" } else { "☰" };
        spans.push(Span::styled(format!(" {glyph} m"), fg(ThemeToken::NavLink)));
    }

    let header = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme_to_color(&ThemeToken::NavBackground)));
    frame.render_widget(header, area);
}

fn draw_menu(frame: &mut Frame<'_>, app: &App<'_>, snapshot: &ViewSnapshot, area: Rect) {
    let items = nav_items(&app.catalog().sections, snapshot);
    let width = items
        .iter()
        .map(|i| i.label.chars().count() + 6)
        .max()
        .unwrap_or(10) as u16;
    let height = items.len() as u16 + 2;
    let menu_area = Rect::new(
        area.right().saturating_sub(width + 1),
        area.y + 1,
        width.min(area.width),
        height.min(area.height.saturating_sub(1)),
    );

    let lines: Vec<Line<'_>> = items
        .iter()
        .enumerate()
        .map(|(n, item)| {
            let marker = if item.active { "›" } else { " " };
            Line::styled(format!("{marker}{} {}", n + 1, item.label), fg(item.color))
        })
        .collect();

    frame.render_widget(Clear, menu_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(fg(ThemeToken::Border))
                .style(Style::default().bg(theme_to_color(&ThemeToken::NavBackground))),
        ),
        menu_area,
    );
}

fn draw_body(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let lines: Vec<Line<'_>> = app
        .document()
        .lines()
        .iter()
        .skip(app.scroll_row())
        .take(usize::from(area.height))
        .map(|line| doc_line(app, line))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn doc_line<'l>(app: &App<'_>, line: &'l DocLine) -> Line<'l> {
    let selected = line.card_index() == Some(app.selected_card());
    match line {
        DocLine::Heading(label) => Line::styled(
            label.as_str(),
            fg(ThemeToken::SectionTitle).add_modifier(Modifier::BOLD),
        ),
        DocLine::Text(text) => Line::styled(text.as_str(), fg(ThemeToken::TextSecondary)),
        DocLine::Blank => Line::default(),
        DocLine::CardTitle { title, .. } => {
            let marker = if selected { "▸ " } else { "  " };
            let mut style = fg(ThemeToken::TextPrimary).add_modifier(Modifier::BOLD);
            if selected {
                style = fg(ThemeToken::Accent).add_modifier(Modifier::BOLD);
            }
            Line::from(vec![
                Span::styled(marker, fg(ThemeToken::Accent)),
                Span::styled(title.as_str(), style),
            ])
        }
        DocLine::CardText { text, .. } => Line::styled(format!("  {text}"), fg(ThemeToken::TextMuted)),
        DocLine::CardTags { tags, .. } => {
            let mut spans = vec![Span::raw("  ")];
            for tag in tags {
                spans.push(Span::styled(format!("[{tag}]"), fg(ThemeToken::Tag)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        }
        DocLine::Field(field) => field_line(app, *field),
        DocLine::Submit => Line::from(vec![
            Span::styled(
                "[ Send Message ]",
                fg(ThemeToken::Accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  f: edit  Enter: send", fg(ThemeToken::TextMuted)),
        ]),
    }
}

fn field_line(app: &App<'_>, field: ContactField) -> Line<'static> {
    let form = app.form();
    let focused = form.focus() == Some(field);
    let background = if focused {
        ThemeToken::FieldFocused
    } else {
        ThemeToken::FieldBackground
    };
    let value = form.value(field);
    let shown = if value.is_empty() && !focused {
        Span::styled(field.label().to_owned(), fg(ThemeToken::TextMuted))
    } else {
        let cursor = if focused { "▏" } else { "" };
        Span::styled(format!("{value}{cursor}"), fg(ThemeToken::TextPrimary))
    };
    Line::from(vec![
        Span::styled(format!("{:>13}: ", field.label()), fg(ThemeToken::TextSecondary)),
        shown,
    ])
    .style(Style::default().bg(theme_to_color(&background)))
}

fn draw_status(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let line = match app.status() {
        Some(Status::Acknowledged(message)) => {
            Line::styled(format!(" {message}"), fg(ThemeToken::Acknowledgement))
        }
        Some(Status::Rejected(message)) => {
            Line::styled(format!(" {message}"), fg(ThemeToken::Error))
        }
        None if app.form().is_editing() => Line::styled(
            " Tab/Shift-Tab field | Enter send | Esc stop editing",
            fg(ThemeToken::TextMuted),
        ),
        None => Line::styled(
            " j/k scroll | 1-9 jump | m menu | Tab card | Enter open | f contact | q quit",
            fg(ThemeToken::TextMuted),
        ),
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme_to_color(&ThemeToken::NavBackground))),
        area,
    );
}

fn percent_of(length: u16, percent: u16) -> u16 {
    let scaled = u32::from(length) * u32::from(percent.min(100)) / 100;
    u16::try_from(scaled).unwrap_or(length)
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = percent_of(area.width, percent_x);
    let height = percent_of(area.height, percent_y);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn draw_modal(frame: &mut Frame<'_>, view: &ModalView, area: Rect) {
    let modal_area = centered(area, 80, 70);

    let mut lines = vec![
        Line::styled(view.description.as_str(), fg(ThemeToken::TextSecondary)),
        Line::default(),
    ];
    let mut tags = Vec::new();
    for tag in &view.tags {
        tags.push(Span::styled(format!("[{tag}]"), fg(ThemeToken::Tag)));
        tags.push(Span::raw(" "));
    }
    lines.push(Line::from(tags));
    lines.push(Line::default());
    for link in [&view.primary, &view.repo] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", link.label),
                fg(ThemeToken::Accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                link.href.as_str(),
                fg(ThemeToken::Link).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::styled("Esc: close", fg(ThemeToken::TextMuted)));

    frame.render_widget(Clear, modal_area);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", view.title))
                .title_style(fg(ThemeToken::TextPrimary).add_modifier(Modifier::BOLD))
                .border_style(fg(ThemeToken::Border))
                .style(Style::default().bg(theme_to_color(&ThemeToken::ModalSurface))),
        ),
        modal_area,
    );
}
