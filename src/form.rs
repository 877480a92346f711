//! Contact form validation.
//!
//! Rules are per field, with no cross-field checks. Blur validation is
//! lenient (an empty field is "not yet an error"); submit validation runs
//! every rule and is the authoritative gate.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::port::{Action, ElementRef, Flag};

/// Contact form inputs, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldId {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// DOM id of the input.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == raw)
    }

    /// Minimum trimmed length, for length-checked fields.
    #[must_use]
    pub fn min_len(self) -> Option<usize> {
        match self {
            Self::Name => Some(2),
            Self::Email => None,
            Self::Subject => Some(3),
            Self::Message => Some(10),
        }
    }
}

/// A filled-in contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }
}

/// Validation result currently shown for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub valid: bool,
    pub message: String,
}

impl Default for FieldState {
    fn default() -> Self {
        Self { valid: true, message: String::new() }
    }
}

/// Per-field validation states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: HashMap<FieldId, FieldState>,
}

impl FormState {
    #[must_use]
    pub fn field(&self, field: FieldId) -> FieldState {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|state| !state.valid)
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }

    fn show_error(&mut self, field: FieldId, message: &str) -> Vec<Action> {
        self.fields.insert(field, FieldState { valid: false, message: message.to_owned() });
        vec![
            Action::flag(ElementRef::Field(field), Flag::Error, true),
            Action::text(ElementRef::FieldError(field), message),
        ]
    }

    fn clear_error(&mut self, field: FieldId) -> Vec<Action> {
        self.fields.insert(field, FieldState::default());
        vec![
            Action::flag(ElementRef::Field(field), Flag::Error, false),
            Action::text(ElementRef::FieldError(field), ""),
        ]
    }
}

/// `local@domain.tld`: one `@`, a `.` inside the domain, no whitespace.
///
/// Equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(is_js_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The `\s` class of browser regexes and `String.prototype.trim`: Unicode
/// `White_Space` plus U+FEFF, minus U+0085.
fn is_js_whitespace(c: char) -> bool {
    c != '\u{85}' && (c.is_whitespace() || c == '\u{feff}')
}

/// Length as the browser reports it, in UTF-16 code units.
fn js_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check one field's rule against its trimmed value.
///
/// # Errors
///
/// Returns the [`FieldError`] describing the failed rule.
pub fn check_field(field: FieldId, value: &str) -> Result<(), FieldError> {
    let value = value.trim_matches(is_js_whitespace);
    match field.min_len() {
        Some(min) if js_len(value) < min => Err(FieldError::TooShort { field, min }),
        Some(_) => Ok(()),
        None if validate_email(value) => Ok(()),
        None => Err(FieldError::InvalidFormat { field }),
    }
}

/// Blur-time validation of one field.
pub fn validate_field(form: &mut FormState, field: FieldId, value: &str) -> Vec<Action> {
    if value.trim_matches(is_js_whitespace).is_empty() {
        return form.clear_error(field);
    }
    match check_field(field, value) {
        Ok(()) => form.clear_error(field),
        Err(err) => form.show_error(field, err.blur_message()),
    }
}

/// Focus clears whatever error the field was showing.
pub fn focus_field(form: &mut FormState, field: FieldId) -> Vec<Action> {
    form.clear_error(field)
}

/// Submit-time validation of every field.
///
/// Returns the failures (empty when the form is valid) together with the
/// actions that show or clear each field's error.
pub fn validate_form(form: &mut FormState, message: &ContactMessage) -> (Vec<FieldError>, Vec<Action>) {
    let mut errors = Vec::new();
    let mut actions = Vec::new();
    for field in FieldId::ALL {
        match check_field(field, message.value(field)) {
            Ok(()) => actions.extend(form.clear_error(field)),
            Err(err) => {
                actions.extend(form.show_error(field, &err.to_string()));
                errors.push(err);
            }
        }
    }
    (errors, actions)
}
