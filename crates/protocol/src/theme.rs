use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    // Navigation
    NavBackground,
    NavLink,
    NavLinkActive,
    Logo,

    TextPrimary,
    TextSecondary,
    TextMuted,

    SectionTitle,
    Accent,
    Tag,
    Link,

    // Modal
    ModalBackdrop,
    ModalSurface,

    // Contact form
    FieldBackground,
    FieldFocused,
    Error,
    Acknowledgement,
}
