//! Error types for the page core.
//!
//! Only user input can really go wrong on a static page. Field errors carry
//! the copy shown next to the input; the rest describe the seams to the
//! browser (storage, transport, config) so hosts can log them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::form::FieldId;

/// A single field failed its rule.
///
/// `Display` renders the submit-time message; [`FieldError::blur_message`]
/// renders the softer copy shown when the user tabs away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", submit_copy(.field))]
    TooShort { field: FieldId, min: usize },
    #[error("{}", submit_copy(.field))]
    InvalidFormat { field: FieldId },
}

impl FieldError {
    /// The field this error belongs to.
    #[must_use]
    pub fn field(self) -> FieldId {
        match self {
            Self::TooShort { field, .. } | Self::InvalidFormat { field } => field,
        }
    }

    /// Message shown when validation runs on blur.
    #[must_use]
    pub fn blur_message(self) -> &'static str {
        match self.field() {
            FieldId::Name => "Name must be at least 2 characters",
            FieldId::Email => "Please enter a valid email",
            FieldId::Subject => "Subject must be at least 3 characters",
            FieldId::Message => "Message must be at least 10 characters",
        }
    }
}

fn submit_copy(field: &FieldId) -> &'static str {
    match field {
        FieldId::Name => "Please enter a valid name (at least 2 characters)",
        FieldId::Email => "Please enter a valid email address",
        FieldId::Subject => "Please enter a subject (at least 3 characters)",
        FieldId::Message => "Please enter a message (at least 10 characters)",
    }
}

/// Why a submission was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    Pending,
    #[error("form has {0} invalid field(s)")]
    Invalid(usize),
}

/// Transport failure while sending the contact message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("transport failed: {0}")]
    Transport(String),
}

/// Preference store failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage unavailable")]
    Unavailable,
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Page configuration could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
