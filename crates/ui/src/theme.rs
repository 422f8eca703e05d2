use folio_protocol::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Self::Dark => dark_visuals(),
            Self::Light => light_visuals(),
        }
    }
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha palette
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Surface => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),    // Base
        Border => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        NavBackground => ResolvedColor::rgba(0x18, 0x18, 0x25, 235), // Mantle
        NavLink => ResolvedColor::rgb(0xba, 0xc2, 0xde),             // Subtext1
        NavLinkActive => ResolvedColor::rgb(0x89, 0xb4, 0xfa),       // Blue
        Logo => ResolvedColor::rgb(0xcb, 0xa6, 0xf7),                // Mauve

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4),
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde),
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),

        SectionTitle => ResolvedColor::rgb(0x89, 0xb4, 0xfa),
        Accent => ResolvedColor::rgb(0xfa, 0xb3, 0x87), // Peach
        Tag => ResolvedColor::rgb(0x94, 0xe2, 0xd5),    // Teal
        Link => ResolvedColor::rgb(0x74, 0xc7, 0xec),   // Sapphire

        ModalBackdrop => ResolvedColor::rgba(0x11, 0x11, 0x1b, 190),
        ModalSurface => ResolvedColor::rgb(0x1e, 0x1e, 0x2e),

        FieldBackground => ResolvedColor::rgb(0x31, 0x32, 0x44),
        FieldFocused => ResolvedColor::rgb(0x45, 0x47, 0x5a), // Surface1
        Error => ResolvedColor::rgb(0xf3, 0x8b, 0xa8),        // Red
        Acknowledgement => ResolvedColor::rgb(0xa6, 0xe3, 0xa1), // Green
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(255, 255, 255),
        Surface => ResolvedColor::rgb(245, 245, 248),
        Border => ResolvedColor::rgb(210, 210, 220),

        NavBackground => ResolvedColor::rgba(248, 248, 250, 235),
        NavLink => ResolvedColor::rgb(80, 80, 100),
        NavLinkActive => ResolvedColor::rgb(50, 110, 220),
        Logo => ResolvedColor::rgb(120, 70, 200),

        TextPrimary => ResolvedColor::rgb(20, 20, 30),
        TextSecondary => ResolvedColor::rgb(80, 80, 100),
        TextMuted => ResolvedColor::rgb(100, 100, 110),

        SectionTitle => ResolvedColor::rgb(40, 80, 180),
        Accent => ResolvedColor::rgb(230, 120, 40),
        Tag => ResolvedColor::rgb(20, 130, 120),
        Link => ResolvedColor::rgb(50, 110, 220),

        ModalBackdrop => ResolvedColor::rgba(0, 0, 0, 110),
        ModalSurface => ResolvedColor::rgb(255, 255, 255),

        FieldBackground => ResolvedColor::rgb(240, 240, 245),
        FieldFocused => ResolvedColor::rgb(225, 230, 245),
        Error => ResolvedColor::rgb(211, 47, 47),
        Acknowledgement => ResolvedColor::rgb(56, 142, 60),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 30.0;
pub const FONT_TITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;

// ── egui visual presets ────────────────────────────────────────────────────

fn rounded(mut v: egui::Visuals) -> egui::Visuals {
    v.window_corner_radius = egui::CornerRadius::same(8);
    v.menu_corner_radius = egui::CornerRadius::same(6);
    for w in [
        &mut v.widgets.noninteractive,
        &mut v.widgets.inactive,
        &mut v.widgets.hovered,
        &mut v.widgets.active,
        &mut v.widgets.open,
    ] {
        w.corner_radius = egui::CornerRadius::same(5);
    }
    v
}

/// Catppuccin Mocha dark visuals for egui widgets.
pub fn dark_visuals() -> egui::Visuals {
    let mode = ThemeMode::Dark;
    let mut v = egui::Visuals::dark();
    v.panel_fill = resolve(ThemeToken::Background, mode);
    v.window_fill = resolve(ThemeToken::ModalSurface, mode);
    v.extreme_bg_color = resolve(ThemeToken::FieldBackground, mode);
    v.faint_bg_color = resolve(ThemeToken::Surface, mode);
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, resolve(ThemeToken::Border, mode));
    v.widgets.active.bg_fill = resolve(ThemeToken::NavLinkActive, mode);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0x89, 0xb4, 0xfa, 60);
    v.hyperlink_color = resolve(ThemeToken::Link, mode);
    v.error_fg_color = resolve(ThemeToken::Error, mode);
    rounded(v)
}

/// Light visuals for egui widgets.
pub fn light_visuals() -> egui::Visuals {
    let mode = ThemeMode::Light;
    let mut v = egui::Visuals::light();
    v.panel_fill = resolve(ThemeToken::Background, mode);
    v.window_fill = resolve(ThemeToken::ModalSurface, mode);
    v.extreme_bg_color = resolve(ThemeToken::FieldBackground, mode);
    v.faint_bg_color = resolve(ThemeToken::Surface, mode);
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, resolve(ThemeToken::Border, mode));
    v.widgets.active.bg_fill = resolve(ThemeToken::NavLinkActive, mode);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(50, 110, 220, 50);
    v.hyperlink_color = resolve(ThemeToken::Link, mode);
    v.error_fg_color = resolve(ThemeToken::Error, mode);
    rounded(v)
}

/// Apply the site's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font) in [
        (egui::TextStyle::Heading, egui::FontId::proportional(FONT_TITLE)),
        (egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY)),
        (egui::TextStyle::Button, egui::FontId::proportional(FONT_BODY)),
        (egui::TextStyle::Small, egui::FontId::proportional(FONT_CAPTION)),
        (egui::TextStyle::Monospace, egui::FontId::monospace(FONT_CAPTION)),
    ] {
        style.text_styles.insert(text_style, font);
    }
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_nav_link_stands_out() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_ne!(
                resolve(ThemeToken::NavLink, mode),
                resolve(ThemeToken::NavLinkActive, mode)
            );
        }
    }

    #[test]
    fn backdrop_is_translucent() {
        assert!(resolve_dark(ThemeToken::ModalBackdrop).a < 255);
        assert!(resolve_light(ThemeToken::ModalBackdrop).a < 255);
    }

    #[test]
    fn mode_toggles_back() {
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
