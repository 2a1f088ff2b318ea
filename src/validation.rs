//! Input validation for the admin form and the public contact form.
//!
//! The required-field rules come from the same schema table the display
//! uses, so a field the form demands is always one the listing will show.

use crate::i18n::{Language, UiStrings};
use crate::locale::validate_lebanese_phone;
use crate::property::PropertyRecord;
use crate::schema::type_schema;
use regex::Regex;
use std::sync::OnceLock;

const MAX_INPUT_LEN: usize = 1000;
const MAX_EMAIL_LEN: usize = 255;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static JS_PROTOCOL_REGEX: OnceLock<Regex> = OnceLock::new();
static EVENT_HANDLER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Sanitize free-form user input before it reaches the backend.
///
/// Trims, strips angle brackets, `javascript:` protocols and inline event
/// handler fragments, and caps the length. Not an HTML sanitizer; the
/// backend escapes on output, this just drops the obvious junk early.
pub fn sanitize_input(input: &str) -> String {
    let js_protocol =
        JS_PROTOCOL_REGEX.get_or_init(|| Regex::new(r"(?i)javascript:").unwrap());
    let event_handler =
        EVENT_HANDLER_REGEX.get_or_init(|| Regex::new(r"(?i)on\w+=").unwrap());

    let trimmed = input.trim();
    let no_tags: String = trimmed.chars().filter(|c| *c != '<' && *c != '>').collect();
    let no_js = js_protocol.replace_all(&no_tags, "");
    let cleaned = event_handler.replace_all(&no_js, "");

    cleaned.chars().take(MAX_INPUT_LEN).collect()
}

/// Validate an email address.
pub fn validate_email(email: &str) -> bool {
    let pattern = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
    });
    email.len() <= MAX_EMAIL_LEN && pattern.is_match(email)
}

/// Check a listing against the required-field rules for its type.
///
/// Returns the backend names of every missing field, empty when the record
/// is complete. Text fields must be non-empty; the type's required numeric
/// fields must be present and greater than zero.
pub fn validate_property_form(record: &PropertyRecord) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if record.title.trim().is_empty() {
        missing.push("title");
    }
    if record.description.trim().is_empty() {
        missing.push("description");
    }
    if record.location.trim().is_empty() {
        missing.push("location");
    }
    if record
        .contact_phone
        .as_deref()
        .map(|p| p.trim().is_empty())
        .unwrap_or(true)
    {
        missing.push("contact_phone");
    }
    if record
        .contact_email
        .as_deref()
        .map(|e| e.trim().is_empty())
        .unwrap_or(true)
    {
        missing.push("contact_email");
    }

    let schema = type_schema(&record.property_type);
    for key in schema.required {
        if key.value_in(record).filter(|v| *v > 0).is_none() {
            missing.push(key.name());
        }
    }

    missing
}

/// Validate a contact-form submission.
///
/// Returns localized error messages; empty means the submission is
/// acceptable. Phone is optional but must be a valid Lebanese number when
/// given.
pub fn validate_contact_message(
    name: &str,
    email: &str,
    phone: &str,
    message: &str,
    language: Language,
) -> Vec<String> {
    let strings = UiStrings::for_language(language);
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(strings.error_name_required.to_string());
    }
    if !validate_email(email.trim()) {
        errors.push(strings.error_email_invalid.to_string());
    }
    if !phone.trim().is_empty() && !validate_lebanese_phone(phone.trim()) {
        errors.push(strings.error_phone_invalid.to_string());
    }
    if message.trim().is_empty() {
        errors.push(strings.error_message_required.to_string());
    }

    errors
}
