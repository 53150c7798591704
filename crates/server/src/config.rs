use std::{fs, path::Path};

use anyhow::Context;
use contact_api::{captcha::RECAPTCHA_VERIFY_URL, mailer::SENDGRID_SEND_URL, MailSettings};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "site.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_bind: String,
    /// Directory with the built static site; served for every non-API path.
    pub static_dir: Option<String>,
    pub max_body_bytes: usize,
    pub mail: MailSettings,
    pub recaptcha_secret: Option<String>,
    pub recaptcha_verify_url: String,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_send_url: String,
    pub expose_error_details: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            static_dir: None,
            max_body_bytes: 64 * 1024,
            mail: MailSettings::default(),
            recaptcha_secret: None,
            recaptcha_verify_url: RECAPTCHA_VERIFY_URL.into(),
            sendgrid_api_key: None,
            sendgrid_send_url: SENDGRID_SEND_URL.into(),
            expose_error_details: false,
        }
    }
}

impl Settings {
    pub fn recaptcha_verify_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.recaptcha_verify_url)
            .with_context(|| format!("invalid recaptcha_verify_url '{}'", self.recaptcha_verify_url))
    }

    pub fn sendgrid_send_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.sendgrid_send_url)
            .with_context(|| format!("invalid sendgrid_send_url '{}'", self.sendgrid_send_url))
    }
}

/// Defaults, then the config file (when present), then environment.
pub fn load_settings() -> anyhow::Result<Settings> {
    let path = std::env::var("SITE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let mut settings = load_file(Path::new(&path))?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn load_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read '{}'", path.display()));
        }
    };
    toml::from_str(&raw).with_context(|| format!("failed to parse '{}'", path.display()))
}

pub(crate) fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    // Later names win, so the APP__ spelling overrides the short one.
    let lookup = |names: &[&str]| names.iter().filter_map(|name| var(*name)).last();

    if let Some(v) = lookup(&["SERVER_BIND", "APP__BIND_ADDR"]) {
        settings.server_bind = v;
    }
    if let Some(v) = lookup(&["STATIC_DIR", "APP__STATIC_DIR"]) {
        settings.static_dir = non_empty(v);
    }
    if let Some(v) = lookup(&["APP__MAX_BODY_BYTES"]) {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }
    if let Some(v) = lookup(&["EMAIL_TO", "APP__EMAIL_TO"]) {
        settings.mail.notify_to = v;
    }
    if let Some(v) = lookup(&["EMAIL_FROM", "APP__EMAIL_FROM"]) {
        settings.mail.from = v;
    }
    if let Some(v) = lookup(&["RECAPTCHA_SECRET_KEY", "APP__RECAPTCHA_SECRET_KEY"]) {
        settings.recaptcha_secret = non_empty(v);
    }
    if let Some(v) = lookup(&["APP__RECAPTCHA_VERIFY_URL"]) {
        settings.recaptcha_verify_url = v;
    }
    if let Some(v) = lookup(&["SENDGRID_API_KEY", "APP__SENDGRID_API_KEY"]) {
        settings.sendgrid_api_key = non_empty(v);
    }
    if let Some(v) = lookup(&["APP__SENDGRID_SEND_URL"]) {
        settings.sendgrid_send_url = v;
    }
    if lookup(&["NODE_ENV"]).is_some_and(|env| env == "development") {
        settings.expose_error_details = true;
    }
    if let Some(v) = lookup(&["APP__EXPOSE_ERROR_DETAILS"]) {
        settings.expose_error_details = matches!(v.as_str(), "1" | "true" | "yes");
    }

    settings.recaptcha_secret = settings.recaptcha_secret.take().and_then(non_empty);
    settings.sendgrid_api_key = settings.sendgrid_api_key.take().and_then(non_empty);
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
