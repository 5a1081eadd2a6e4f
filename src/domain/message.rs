//! Contact message domain model.
//!
//! This module defines the core `ContactMessage` type carrying the two fields a
//! visitor submits through the contact form. The type doubles as the wire body
//! of the outbound request, so its serde representation is part of the endpoint
//! contract: exactly `{"email": ..., "message": ...}`.

use serde::{Deserialize, Serialize};

/// A message submitted through the contact form.
///
/// Field values are accepted as-is from the input layer; validation (required
/// fields, email shape, length ceilings) happens in
/// [`crate::contact::fields`] before a `ContactMessage` is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender address, used by the endpoint for the reply.
    pub email: String,
    /// Free-form message body.
    pub message: String,
}

impl ContactMessage {
    /// Creates a new contact message from already-validated field values.
    #[must_use]
    pub fn new(email: String, message: String) -> Self {
        Self { email, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_exact_wire_body() {
        let message = ContactMessage::new(
            "visitor@example.com".to_string(),
            "Hi there".to_string(),
        );
        let body = serde_json::to_string(&message).unwrap();
        assert_eq!(body, r#"{"email":"visitor@example.com","message":"Hi there"}"#);
    }
}
