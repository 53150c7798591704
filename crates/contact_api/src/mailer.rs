use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: Mailbox,
    pub from: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub subject: String,
    pub html: String,
    pub text: Option<String>,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail provider rejected message: {status} - {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Picks SendGrid when an API key is configured, otherwise logs messages.
pub fn mailer_for(api_key: Option<String>, endpoint: Url) -> Arc<dyn Mailer> {
    match api_key.filter(|key| !key.trim().is_empty()) {
        Some(api_key) => Arc::new(SendGridMailer::new(api_key, endpoint)),
        None => {
            info!("mail API key not configured; outgoing email will be logged only");
            Arc::new(LogMailer)
        }
    }
}

pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        info!(
            to = %email.to.email,
            subject = %email.subject,
            reply_to = email.reply_to.as_ref().map(|mailbox| mailbox.email.as_str()),
            "email not sent (no mail API key); logged instead"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct SendGridMessage<'a> {
    personalizations: [Personalization<'a>; 1],
    from: &'a Mailbox,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a Mailbox>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [&'a Mailbox; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

impl<'a> SendGridMessage<'a> {
    fn from_email(email: &'a OutboundEmail) -> Self {
        // Plain text has to come before HTML.
        let mut content = Vec::with_capacity(2);
        if let Some(text) = &email.text {
            content.push(Content {
                kind: "text/plain",
                value: text,
            });
        }
        content.push(Content {
            kind: "text/html",
            value: &email.html,
        });
        Self {
            personalizations: [Personalization { to: [&email.to] }],
            from: &email.from,
            reply_to: email.reply_to.as_ref(),
            subject: &email.subject,
            content,
        }
    }
}

pub struct SendGridMailer {
    http: Client,
    api_key: String,
    endpoint: Url,
}

impl SendGridMailer {
    pub fn new(api_key: String, endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            api_key,
            endpoint,
        }
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let res = self
            .http
            .post(self.endpoint.clone())
            .timeout(SEND_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(&SendGridMessage::from_email(email))
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        debug!(to = %email.to.email, subject = %email.subject, "email accepted by provider");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/mailer_tests.rs"]
mod tests;
