use std::time::Duration;

use reqwest::{Client, StatusCode};
use shared::{
    messages,
    protocol::{ContactRequest, ContactResponse, ErrorResponse},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("contact endpoint rejected submission ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("contact endpoint unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Text shown in the form's alert box.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => message.clone(),
            SubmitError::Transport(_) => messages::GENERIC_RETRY_LATER.to_string(),
        }
    }
}

/// Posts contact submissions to the site's serverless endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
        }
    }

    /// Resolves `path` against the page origin.
    pub fn for_origin(origin: &Url, path: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(origin.join(path)?))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactResponse, SubmitError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .timeout(SUBMIT_TIMEOUT)
            .json(request)
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            info!(%status, "contact submission accepted");
            return Ok(res
                .json::<ContactResponse>()
                .await
                .unwrap_or_else(|_| ContactResponse {
                    success: true,
                    message: messages::SUBMISSION_SENT.to_string(),
                }));
        }

        let message = res
            .json::<ErrorResponse>()
            .await
            .ok()
            .map(|body| body.message)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| messages::GENERIC_ERROR.to_string());
        warn!(%status, %message, "contact submission rejected");
        Err(SubmitError::Rejected { status, message })
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
