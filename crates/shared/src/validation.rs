use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ContactFields, FormField},
    messages,
};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Per-field checks run in the browser before anything is posted.
pub fn validate_fields(fields: &ContactFields) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for field in FormField::REQUIRED {
        let value = fields.value(field);
        if value.trim().is_empty() {
            errors.push(FieldError::new(field, messages::FIELD_REQUIRED));
        } else if field == FormField::Email && !is_valid_email(value) {
            errors.push(FieldError::new(field, messages::FIELD_INVALID_EMAIL));
        }
    }
    errors
}

/// Required fields that are empty or whitespace only.
pub fn missing_required(fields: &ContactFields) -> Vec<FormField> {
    FormField::REQUIRED
        .into_iter()
        .filter(|field| fields.value(*field).trim().is_empty())
        .collect()
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
