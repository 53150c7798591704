use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptchaOutcome {
    Verified,
    Rejected,
    /// No secret configured, so there is nothing to verify against.
    Skipped,
}

#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: Option<&str>) -> CaptchaOutcome;
}

#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("captcha provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("captcha provider answered {status}")]
    Status { status: u16 },
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    #[serde(default)]
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

pub struct RecaptchaVerifier {
    http: Client,
    secret: Option<String>,
    endpoint: Url,
}

impl RecaptchaVerifier {
    pub fn new(secret: Option<String>, endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            secret: secret.filter(|secret| !secret.trim().is_empty()),
            endpoint,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }

    async fn site_verify(&self, secret: &str, token: &str) -> Result<bool, CaptchaError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .timeout(VERIFY_TIMEOUT)
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(CaptchaError::Status {
                status: res.status().as_u16(),
            });
        }
        let body: SiteVerifyResponse = res.json().await?;
        if !body.success {
            debug!(error_codes = ?body.error_codes, "captcha token rejected by provider");
        }
        Ok(body.success)
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaVerifier {
    async fn verify(&self, token: Option<&str>) -> CaptchaOutcome {
        let Some(secret) = self.secret.as_deref() else {
            return CaptchaOutcome::Skipped;
        };
        let Some(token) = token else {
            return CaptchaOutcome::Rejected;
        };
        match self.site_verify(secret, token).await {
            Ok(true) => CaptchaOutcome::Verified,
            Ok(false) => CaptchaOutcome::Rejected,
            Err(e) => {
                warn!(error = %e, "captcha verification unavailable");
                CaptchaOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/captcha_tests.rs"]
mod tests;
