//! Field rules and inline error display

use super::field::{ErrorText, FieldMark, FieldName};
use super::form::ContactForm;
use crate::error::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum length of the name, in characters
pub const NAME_MIN_CHARS: usize = 2;
/// Minimum length of the message, in characters
pub const MESSAGE_MIN_CHARS: usize = 10;

/// `local@domain.tld` with no whitespace or extra `@` in any part
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

/// Apply the rule for `name` to an untrimmed value
pub fn check_field(name: FieldName, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    match name {
        FieldName::Name => {
            if value.is_empty() {
                Err(ValidationError::NameRequired)
            } else if value.chars().count() < NAME_MIN_CHARS {
                Err(ValidationError::NameTooShort)
            } else {
                Ok(())
            }
        }
        FieldName::Email => {
            if value.is_empty() {
                Err(ValidationError::EmailRequired)
            } else if !EMAIL_PATTERN.is_match(value) {
                Err(ValidationError::EmailInvalid)
            } else {
                Ok(())
            }
        }
        FieldName::Message => {
            if value.is_empty() {
                Err(ValidationError::MessageRequired)
            } else if value.chars().count() < MESSAGE_MIN_CHARS {
                Err(ValidationError::MessageTooShort)
            } else {
                Ok(())
            }
        }
        FieldName::ProjectType | FieldName::Budget => Ok(()),
    }
}

impl ContactForm {
    /// Validate one field and refresh its inline error. Returns validity.
    pub fn validate_field(&mut self, name: FieldName) -> bool {
        let result = check_field(name, self.field(name).as_text());
        let message = match &result {
            Ok(()) => String::new(),
            Err(err) => {
                tracing::debug!(
                    field = name.as_str(),
                    described_by = %name.error_element_id(),
                    %err,
                    "field invalid"
                );
                err.to_string()
            }
        };
        self.show_field_error(name, &message);
        result.is_ok()
    }

    /// Show `message` under the field, or clear it and mark the field as
    /// valid when `message` is empty.
    pub fn show_field_error(&mut self, name: FieldName, message: &str) {
        let field = self.field_mut(name);
        if message.is_empty() {
            field.mark = FieldMark::Success;
            field.error_text = ErrorText::default();
        } else {
            field.mark = FieldMark::Error;
            field.error_text = ErrorText {
                text: message.to_string(),
                visible: true,
            };
        }
    }

    /// Validate every required field, displaying all of their errors
    pub fn validate_form(&mut self) -> bool {
        FieldName::REQUIRED
            .into_iter()
            .fold(true, |all_valid, name| self.validate_field(name) && all_valid)
    }

    /// First field, in form order, currently marked as errored
    pub fn first_errored_field(&self) -> Option<FieldName> {
        self.fields()
            .find(|field| field.mark == FieldMark::Error)
            .map(|field| field.name)
    }
}
