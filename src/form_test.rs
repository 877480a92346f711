use super::*;

fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
    ContactMessage {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: body.to_owned(),
    }
}

// =============================================================
// validate_email
// =============================================================

#[test]
fn email_accepts_plain_addresses() {
    assert!(validate_email("jo@x.com"));
    assert!(validate_email("first.last+tag@mail.example.co.uk"));
    assert!(validate_email("a@b.c"));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!validate_email(""));
    assert!(!validate_email("jo"));
    assert!(!validate_email("@x.com"));
    assert!(!validate_email("jo@"));
    assert!(!validate_email("jo@com"));
}

#[test]
fn email_needs_characters_around_a_domain_dot() {
    assert!(!validate_email("jo@.com"));
    assert!(!validate_email("jo@x."));
    assert!(validate_email("jo@.x.com"));
    assert!(validate_email("jo@x.com."));
}

#[test]
fn email_rejects_second_at_sign() {
    assert!(!validate_email("jo@x@y.com"));
    assert!(!validate_email("jo@@x.com"));
}

#[test]
fn email_rejects_any_whitespace() {
    assert!(!validate_email("jo @x.com"));
    assert!(!validate_email("jo@x .com"));
    assert!(!validate_email(" jo@x.com"));
    assert!(!validate_email("jo@x.com\n"));
    assert!(!validate_email("jo@x.\u{a0}com"));
    assert!(!validate_email("jo@x.\u{feff}com"));
}

// =============================================================
// check_field
// =============================================================

#[test]
fn check_field_trims_before_measuring() {
    assert_eq!(check_field(FieldId::Name, "  Jo  "), Ok(()));
    assert_eq!(
        check_field(FieldId::Name, " J "),
        Err(FieldError::TooShort { field: FieldId::Name, min: 2 })
    );
}

#[test]
fn email_allows_next_line_like_browser_regex() {
    assert!(validate_email("jo\u{85}@x.com"));
    assert!(validate_email("jo@x.com\u{85}"));
}

#[test]
fn check_field_counts_utf16_units_not_bytes() {
    assert_eq!(
        check_field(FieldId::Name, "é"),
        Err(FieldError::TooShort { field: FieldId::Name, min: 2 })
    );
    assert_eq!(check_field(FieldId::Name, "Zoë"), Ok(()));
    // Astral characters are two units, as in the browser.
    assert_eq!(check_field(FieldId::Name, "😀"), Ok(()));
}

#[test]
fn check_field_does_not_trim_next_line() {
    assert_eq!(check_field(FieldId::Name, "\u{85}a"), Ok(()));
    assert_eq!(
        check_field(FieldId::Name, "\u{a0}a\u{feff}"),
        Err(FieldError::TooShort { field: FieldId::Name, min: 2 })
    );
}

#[test]
fn blur_treats_next_line_as_content() {
    let mut form = FormState::default();
    validate_field(&mut form, FieldId::Name, "\u{85}");
    assert!(!form.field(FieldId::Name).valid);
}

#[test]
fn check_field_length_boundaries() {
    assert!(check_field(FieldId::Subject, "Hi").is_err());
    assert!(check_field(FieldId::Subject, "Hi!").is_ok());
    assert!(check_field(FieldId::Message, "123456789").is_err());
    assert!(check_field(FieldId::Message, "1234567890").is_ok());
}

#[test]
fn check_field_email_is_trimmed_then_matched() {
    assert_eq!(check_field(FieldId::Email, "  jo@x.com "), Ok(()));
    assert_eq!(
        check_field(FieldId::Email, "jo"),
        Err(FieldError::InvalidFormat { field: FieldId::Email })
    );
}

// =============================================================
// validate_field (blur) / focus_field
// =============================================================

#[test]
fn blur_on_empty_field_clears_instead_of_erroring() {
    let mut form = FormState::default();
    let actions = validate_field(&mut form, FieldId::Message, "   ");
    assert!(form.field(FieldId::Message).valid);
    assert_eq!(
        actions,
        vec![
            Action::flag(ElementRef::Field(FieldId::Message), Flag::Error, false),
            Action::text(ElementRef::FieldError(FieldId::Message), ""),
        ]
    );
}

#[test]
fn blur_on_invalid_field_shows_blur_copy() {
    let mut form = FormState::default();
    let actions = validate_field(&mut form, FieldId::Name, "J");
    let state = form.field(FieldId::Name);
    assert!(!state.valid);
    assert_eq!(state.message, "Name must be at least 2 characters");
    assert_eq!(
        actions,
        vec![
            Action::flag(ElementRef::Field(FieldId::Name), Flag::Error, true),
            Action::text(ElementRef::FieldError(FieldId::Name), "Name must be at least 2 characters"),
        ]
    );
}

#[test]
fn blur_on_bad_email_uses_short_copy() {
    let mut form = FormState::default();
    validate_field(&mut form, FieldId::Email, "nope");
    assert_eq!(form.field(FieldId::Email).message, "Please enter a valid email");
}

#[test]
fn focus_clears_previous_error() {
    let mut form = FormState::default();
    validate_field(&mut form, FieldId::Subject, "Hi");
    assert!(form.has_errors());
    let actions = focus_field(&mut form, FieldId::Subject);
    assert!(!form.has_errors());
    assert_eq!(actions[0], Action::flag(ElementRef::Field(FieldId::Subject), Flag::Error, false));
}

// =============================================================
// validate_form (submit)
// =============================================================

#[test]
fn validate_form_accepts_minimal_valid_message() {
    let mut form = FormState::default();
    let (errors, actions) = validate_form(&mut form, &message("Jo", "jo@x.com", "Hi!", "1234567890"));
    assert!(errors.is_empty());
    assert!(!form.has_errors());
    assert_eq!(actions.len(), 8);
}

#[test]
fn validate_form_reports_single_bad_field_with_submit_copy() {
    let mut form = FormState::default();
    let (errors, _) = validate_form(&mut form, &message("J", "jo@x.com", "Hi!", "1234567890"));
    assert_eq!(errors, vec![FieldError::TooShort { field: FieldId::Name, min: 2 }]);
    assert_eq!(
        form.field(FieldId::Name).message,
        "Please enter a valid name (at least 2 characters)"
    );
    assert!(form.field(FieldId::Email).valid);
}

#[test]
fn validate_form_checks_empty_fields() {
    let mut form = FormState::default();
    let (errors, _) = validate_form(&mut form, &ContactMessage::default());
    let fields = errors.iter().map(|e| e.field()).collect::<Vec<_>>();
    assert_eq!(fields, FieldId::ALL.to_vec());
    assert_eq!(form.field(FieldId::Email).message, "Please enter a valid email address");
    assert_eq!(form.field(FieldId::Subject).message, "Please enter a subject (at least 3 characters)");
    assert_eq!(form.field(FieldId::Message).message, "Please enter a message (at least 10 characters)");
}

#[test]
fn validate_form_clears_errors_that_were_fixed() {
    let mut form = FormState::default();
    validate_form(&mut form, &message("J", "jo@x.com", "Hi!", "1234567890"));
    let (errors, _) = validate_form(&mut form, &message("Jo", "jo@x.com", "Hi!", "1234567890"));
    assert!(errors.is_empty());
    assert_eq!(form.field(FieldId::Name), FieldState::default());
}

// =============================================================
// FieldId
// =============================================================

#[test]
fn field_id_parse_matches_dom_ids() {
    for field in FieldId::ALL {
        assert_eq!(FieldId::parse(field.as_str()), Some(field));
    }
    assert_eq!(FieldId::parse("phone"), None);
}
