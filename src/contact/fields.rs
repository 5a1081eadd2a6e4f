//! Input-layer validation for the contact form fields.
//!
//! The submission controller performs no field validation by contract; these
//! checks belong to the form surrounding it and run before a submit is ever
//! granted. They mirror what the input controls enforce: both fields
//! required, a minimal email shape, and the length ceilings of the inputs.

use thiserror::Error;

use crate::domain::ContactMessage;

/// Maximum accepted email length, matching the email input's ceiling.
pub const EMAIL_MAX_LEN: usize = 512;

/// Maximum accepted message length, matching the message input's ceiling.
pub const MESSAGE_MAX_LEN: usize = 4096;

/// A field-level validation failure, phrased for display next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Enter your email")]
    EmailRequired,
    #[error("Enter a message")]
    MessageRequired,
    #[error("Enter a valid email address")]
    EmailInvalid,
    #[error("Email must be at most {EMAIL_MAX_LEN} characters")]
    EmailTooLong,
    #[error("Message must be at most {MESSAGE_MAX_LEN} characters")]
    MessageTooLong,
}

/// Current values of the contact form inputs.
///
/// Owned by the application state and mutated by input events; the submission
/// controller only ever sees the validated [`ContactMessage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub email: String,
    pub message: String,
}

impl FormFields {
    /// Validates the fields and produces the outbound message.
    ///
    /// Checks run in display order: required-ness first, then email shape,
    /// then length ceilings. Values are passed through unmodified; no
    /// trimming or normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`FieldError`].
    pub fn validate(&self) -> Result<ContactMessage, FieldError> {
        if self.email.is_empty() {
            return Err(FieldError::EmailRequired);
        }
        if self.message.is_empty() {
            return Err(FieldError::MessageRequired);
        }
        if !is_email_like(&self.email) {
            return Err(FieldError::EmailInvalid);
        }
        if self.email.chars().count() > EMAIL_MAX_LEN {
            return Err(FieldError::EmailTooLong);
        }
        if self.message.chars().count() > MESSAGE_MAX_LEN {
            return Err(FieldError::MessageTooLong);
        }
        Ok(ContactMessage::new(self.email.clone(), self.message.clone()))
    }
}

/// Minimal email shape check: one `@` with non-empty sides, no whitespace.
///
/// Deliberately loose, equivalent to what a browser's email input guarantees
/// before a form can submit. The endpoint performs its own validation.
fn is_email_like(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && !domain.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: &str, message: &str) -> FormFields {
        FormFields {
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_fields_produce_the_wire_message() {
        let message = fields("visitor@example.com", "Hello!").validate().unwrap();
        assert_eq!(message.email, "visitor@example.com");
        assert_eq!(message.message, "Hello!");
    }

    #[test]
    fn both_fields_are_required() {
        assert_eq!(fields("", "hi").validate(), Err(FieldError::EmailRequired));
        assert_eq!(
            fields("visitor@example.com", "").validate(),
            Err(FieldError::MessageRequired),
        );
    }

    #[test]
    fn email_shape_is_checked() {
        assert_eq!(fields("not-an-email", "hi").validate(), Err(FieldError::EmailInvalid));
        assert_eq!(fields("@example.com", "hi").validate(), Err(FieldError::EmailInvalid));
        assert_eq!(fields("visitor@", "hi").validate(), Err(FieldError::EmailInvalid));
        assert_eq!(fields("a b@example.com", "hi").validate(), Err(FieldError::EmailInvalid));
        assert_eq!(fields("a@b@example.com", "hi").validate(), Err(FieldError::EmailInvalid));
        assert!(fields("a@b", "hi").validate().is_ok());
    }

    #[test]
    fn length_ceilings_match_the_inputs() {
        let long_email = format!("{}@example.com", "a".repeat(EMAIL_MAX_LEN));
        assert_eq!(fields(&long_email, "hi").validate(), Err(FieldError::EmailTooLong));

        let long_message = "m".repeat(MESSAGE_MAX_LEN + 1);
        assert_eq!(
            fields("visitor@example.com", &long_message).validate(),
            Err(FieldError::MessageTooLong),
        );

        let max_message = "m".repeat(MESSAGE_MAX_LEN);
        assert!(fields("visitor@example.com", &max_message).validate().is_ok());
    }
}
