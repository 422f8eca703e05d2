use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown after a message is accepted.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! I'll get back to you soon.";

/// Contact form fields in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
}

/// The form as the visitor is filling it in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// Required-field check. Presence only: no format checks on the
    /// email, and whitespace counts as content.
    pub fn validate(&self) -> Result<ContactSubmission, ContactError> {
        if let Some(missing) = ContactField::ALL
            .into_iter()
            .find(|f| self.field(*f).is_empty())
        {
            return Err(ContactError::MissingField(missing));
        }
        Ok(ContactSubmission {
            form: self.clone(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A form that passed [`ContactForm::validate`]. The only way to reach
/// the controller's submit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    form: ContactForm,
}

impl ContactSubmission {
    pub fn name(&self) -> &str {
        &self.form.name
    }

    pub fn email(&self) -> &str {
        &self.form.email
    }

    pub fn subject(&self) -> &str {
        &self.form.subject
    }

    pub fn message(&self) -> &str {
        &self.form.message
    }
}
