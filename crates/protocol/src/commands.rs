use serde::{Deserialize, Serialize};

use crate::types::SectionId;

/// An instruction the core hands to the presentation layer.
///
/// The core never touches the viewport or the DOM itself; it returns these
/// and the renderer carries them out in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewCommand {
    /// Scroll the viewport so the section's start aligns with the top.
    ScrollToSection { section: SectionId },

    /// Show a transient acknowledgement to the visitor.
    ShowAcknowledgement { message: String },

    /// Clear every field of the contact form.
    ResetContactForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_tagged_for_js() {
        let cmd = ViewCommand::ScrollToSection {
            section: SectionId::from("contact"),
        };
        let json = serde_json::to_value(&cmd).unwrap_or_default();
        assert_eq!(json["type"], "scrollToSection");
        assert_eq!(json["section"], "contact");

        let json = serde_json::to_value(ViewCommand::ResetContactForm).unwrap_or_default();
        assert_eq!(json["type"], "resetContactForm");
    }
}
