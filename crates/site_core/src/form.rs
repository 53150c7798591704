use shared::{
    domain::{ContactFields, FormField},
    messages,
    protocol::{ContactRequest, ContactResponse},
    validation::{validate_fields, FieldError},
};
use thiserror::Error;
use tracing::debug;

use crate::client::ContactClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
    Sent(String),
    Failed(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("{}", messages::CAPTCHA_MISSING)]
    CaptchaMissing,
    #[error("submission already in progress")]
    Busy,
    #[error("{0}")]
    Rejected(String),
}

/// Contact form as the visitor sees it: field values, inline errors and the
/// alert shown after a submit.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: ContactFields,
    state: FormState,
    field_errors: Vec<FieldError>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            state: FormState::Editing,
            field_errors: Vec::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Replaces the inline errors with a fresh validation pass.
    pub fn validate(&mut self) -> bool {
        self.field_errors = validate_fields(&self.fields);
        self.field_errors.is_empty()
    }

    /// Validates and builds the payload. Nothing is posted.
    pub fn prepare(&mut self, captcha_token: Option<&str>) -> Result<ContactRequest, FormError> {
        if self.state == FormState::Submitting {
            return Err(FormError::Busy);
        }
        if !self.validate() {
            return Err(FormError::Invalid(self.field_errors.clone()));
        }
        let Some(token) = captcha_token.map(str::trim).filter(|token| !token.is_empty()) else {
            self.state = FormState::Failed(messages::CAPTCHA_MISSING.to_string());
            return Err(FormError::CaptchaMissing);
        };
        Ok(ContactRequest::from_fields(&self.fields, token))
    }

    /// A successful submit clears the fields. The caller resets the captcha
    /// widget afterwards in either case. Dropping the future mid-flight puts
    /// the form back into editing.
    pub async fn submit(
        &mut self,
        client: &ContactClient,
        captcha_token: Option<&str>,
    ) -> Result<ContactResponse, FormError> {
        let request = self.prepare(captcha_token)?;
        let in_flight = InFlight::begin(&mut self.state);
        debug!(endpoint = %client.endpoint(), "submitting contact form");

        match client.submit(&request).await {
            Ok(response) => {
                self.fields = ContactFields::default();
                in_flight.finish(FormState::Sent(response.message.clone()));
                Ok(response)
            }
            Err(err) => {
                let message = err.user_message();
                in_flight.finish(FormState::Failed(message.clone()));
                Err(FormError::Rejected(message))
            }
        }
    }

    /// The form is swapped for the success message once a submission lands.
    pub fn is_visible(&self) -> bool {
        !matches!(self.state, FormState::Sent(_))
    }

    /// Label of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match self.state {
            FormState::Submitting => "Verzenden...",
            _ => "Verstuur bericht",
        }
    }
}

/// Holds the form in `Submitting`; reverts to `Editing` unless finished.
struct InFlight<'a> {
    state: &'a mut FormState,
}

impl<'a> InFlight<'a> {
    fn begin(state: &'a mut FormState) -> Self {
        *state = FormState::Submitting;
        Self { state }
    }

    fn finish(mut self, outcome: FormState) {
        *self.state = outcome;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if *self.state == FormState::Submitting {
            debug!("contact submission abandoned");
            *self.state = FormState::Editing;
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
