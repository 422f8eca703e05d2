use folio_core::contact::ContactField;
use folio_core::{ContactError, ContactForm, ContactSubmission};

/// Keyboard editing state for the contact form.
#[derive(Debug, Default)]
pub struct FormEditor {
    form: ContactForm,
    focus: Option<ContactField>,
}

impl FormEditor {
    pub fn focus(&self) -> Option<ContactField> {
        self.focus
    }

    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.form.field(field)
    }

    pub fn start(&mut self) {
        self.focus = Some(ContactField::Name);
    }

    pub fn stop(&mut self) {
        self.focus = None;
    }

    pub fn next_field(&mut self) {
        self.step(1);
    }

    pub fn prev_field(&mut self) {
        self.step(ContactField::ALL.len() - 1);
    }

    fn step(&mut self, by: usize) {
        let Some(current) = self.focus else {
            return;
        };
        let len = ContactField::ALL.len();
        let pos = ContactField::ALL
            .iter()
            .position(|f| *f == current)
            .unwrap_or(0);
        self.focus = Some(ContactField::ALL[(pos + by) % len]);
    }

    pub fn insert(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.form.field_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.form.field_mut(field).pop();
        }
    }

    /// Run the required-field check. On failure focus jumps to the
    /// offending field.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactError> {
        let result = self.form.validate();
        if let Err(ContactError::MissingField(field)) = &result {
            self.focus = Some(*field);
        }
        result
    }

    /// Clear every field and leave edit mode.
    pub fn reset(&mut self) {
        self.form.clear();
        self.focus = None;
    }
}
