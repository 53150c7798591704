use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use contact_api::{
    captcha::RecaptchaVerifier, contact_route, legacy_contact_route, mailer::mailer_for,
    submit_contact, ContactContext,
};
use shared::{
    error::{ApiError, ErrorCode},
    messages,
    protocol::{ContactRequest, ContactResponse, ErrorResponse},
};
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, info, info_span, warn, Instrument};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod app_state;
mod config;

use app_state::AppState;
use config::{load_settings, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings()?;
    let captcha = RecaptchaVerifier::new(
        settings.recaptcha_secret.clone(),
        settings.recaptcha_verify_url()?,
    );
    if !captcha.is_configured() {
        warn!("captcha secret not configured; submissions are accepted without verification");
    }
    let contact = ContactContext {
        captcha: Arc::new(captcha),
        mailer: mailer_for(settings.sendgrid_api_key.clone(), settings.sendgrid_send_url()?),
        mail: settings.mail.clone(),
    };

    let state = AppState {
        contact,
        expose_error_details: settings.expose_error_details,
    };
    let app = build_router(Arc::new(state), &settings);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, static_dir = settings.static_dir.as_deref(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, settings: &Settings) -> Router {
    let contact = post(http_submit_contact).fallback(method_not_allowed);
    let router = Router::new()
        .route("/healthz", get(healthz))
        .route(contact_route(), contact.clone())
        .route(legacy_contact_route(), contact)
        .layer(RequestBodyLimitLayer::new(settings.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match settings.static_dir.as_deref() {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    }
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ErrorResponse>)> {
    let submission_id = Uuid::new_v4();
    async {
        let request: ContactRequest = serde_json::from_slice(&body).map_err(|e| {
            debug!(error = %e, "unparseable contact body");
            reject(
                &state,
                ApiError::new(ErrorCode::Validation, messages::REQUIRED_FIELDS_MISSING)
                    .with_detail(e.to_string()),
            )
        })?;
        submit_contact(&state.contact, &request)
            .await
            .map(Json)
            .map_err(|e| reject(&state, e))
    }
    .instrument(info_span!("contact_submission", %submission_id))
    .await
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(
            ApiError::new(ErrorCode::MethodNotAllowed, messages::METHOD_NOT_ALLOWED)
                .into_response_body(false),
        ),
    )
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation | ErrorCode::CaptchaFailed => StatusCode::BAD_REQUEST,
        ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        ErrorCode::Delivery | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(state: &AppState, err: ApiError) -> (StatusCode, Json<ErrorResponse>) {
    (
        status_for(err.code),
        Json(err.into_response_body(state.expose_error_details)),
    )
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
