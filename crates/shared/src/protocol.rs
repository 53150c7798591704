use serde::{Deserialize, Serialize};

use crate::domain::ContactFields;

/// JSON body posted by the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(
        rename = "g-recaptcha-response",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub captcha_token: Option<String>,
}

impl ContactRequest {
    pub fn from_fields(fields: &ContactFields, captcha_token: impl Into<String>) -> Self {
        Self {
            name: fields.name.trim().to_string(),
            email: fields.email.trim().to_string(),
            phone: fields.phone().map(str::to_string),
            service: fields.service.clone(),
            message: fields.message.clone(),
            captcha_token: Some(captcha_token.into()),
        }
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone().unwrap_or_default(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }

    pub fn captcha_token(&self) -> Option<&str> {
        self.captcha_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
