//! Pure validation of the lead draft

use super::lead::{LeadDraft, LeadField};

/// A field-level validation failure.
///
/// At most one error exists per field; a later validation pass replaces the
/// whole list rather than appending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: LeadField,
    pub message: String,
}

impl ValidationError {
    fn new(field: LeadField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate a draft, returning errors in field declaration order
/// (name, email, industry). Deterministic and side-effect free.
pub fn validate(draft: &LeadDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(ValidationError::new(LeadField::Name, "Name is required"));
    }

    if draft.email.is_empty() {
        errors.push(ValidationError::new(LeadField::Email, "Email is required"));
    } else if !is_valid_email(&draft.email) {
        errors.push(ValidationError::new(
            LeadField::Email,
            "Enter a valid email address",
        ));
    }

    if draft.industry.is_none() {
        errors.push(ValidationError::new(
            LeadField::Industry,
            "Select an industry",
        ));
    }

    errors
}

/// Basic `local@domain.tld` shape check, not full RFC parsing: exactly one
/// `@`, non-empty local part, dotted domain with non-empty labels, no
/// whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}
