use std::sync::Arc;

use shared::{
    error::{ApiError, ErrorCode},
    messages,
    protocol::{ContactRequest, ContactResponse},
    validation::{is_valid_email, missing_required},
};
use tracing::{debug, error, info, warn};

pub mod captcha;
pub mod mailer;
pub mod templates;

use captcha::{CaptchaOutcome, CaptchaVerifier};
use mailer::Mailer;

pub use templates::MailSettings;

#[derive(Clone)]
pub struct ContactContext {
    pub captcha: Arc<dyn CaptchaVerifier>,
    pub mailer: Arc<dyn Mailer>,
    pub mail: MailSettings,
}

pub fn contact_route() -> &'static str {
    "/api/contact"
}

/// Path the static site posts to; kept so existing pages work unchanged.
pub fn legacy_contact_route() -> &'static str {
    "/.netlify/functions/contact"
}

pub async fn submit_contact(
    ctx: &ContactContext,
    request: &ContactRequest,
) -> Result<ContactResponse, ApiError> {
    let fields = request.fields();

    let missing = missing_required(&fields);
    if !missing.is_empty() {
        debug!(?missing, "rejecting submission with missing fields");
        return Err(ApiError::new(
            ErrorCode::Validation,
            messages::REQUIRED_FIELDS_MISSING,
        ));
    }
    if !is_valid_email(&fields.email) {
        debug!("rejecting submission with malformed email");
        return Err(ApiError::new(ErrorCode::Validation, messages::INVALID_EMAIL));
    }

    match ctx.captcha.verify(request.captcha_token()).await {
        CaptchaOutcome::Verified => {}
        CaptchaOutcome::Skipped => debug!("captcha secret not configured; skipping verification"),
        CaptchaOutcome::Rejected => {
            info!("captcha verification failed");
            return Err(ApiError::new(
                ErrorCode::CaptchaFailed,
                messages::CAPTCHA_FAILED,
            ));
        }
    }

    let notification = templates::notification_email(&ctx.mail, &fields);
    ctx.mailer.send(&notification).await.map_err(|e| {
        error!(error = %e, "notification email failed");
        ApiError::new(ErrorCode::Delivery, messages::DELIVERY_FAILED).with_detail(e.to_string())
    })?;

    let confirmation = templates::confirmation_email(&ctx.mail, &fields);
    if let Err(e) = ctx.mailer.send(&confirmation).await {
        warn!(error = %e, "confirmation email failed; submission still accepted");
    }

    info!(service = %fields.service, "contact submission delivered");
    Ok(ContactResponse {
        success: true,
        message: messages::SUBMISSION_SENT.to_string(),
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
