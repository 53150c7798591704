use std::sync::Mutex;

use super::*;
use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::Request,
};
use contact_api::{
    captcha::{CaptchaOutcome, CaptchaVerifier},
    mailer::{MailError, Mailer, OutboundEmail},
    MailSettings,
};
use tower::ServiceExt;

struct StubCaptcha(CaptchaOutcome);

#[async_trait]
impl CaptchaVerifier for StubCaptcha {
    async fn verify(&self, _token: Option<&str>) -> CaptchaOutcome {
        self.0
    }
}

#[derive(Default)]
struct StubMailer {
    fail: bool,
    sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl Mailer for StubMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.sent.lock().expect("lock").push(email.clone());
        if self.fail {
            return Err(MailError::Rejected {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(())
    }
}

fn test_app_with(
    captcha: CaptchaOutcome,
    mailer: Arc<StubMailer>,
    settings: Settings,
) -> Router {
    let state = AppState {
        contact: ContactContext {
            captcha: Arc::new(StubCaptcha(captcha)),
            mailer,
            mail: MailSettings::default(),
        },
        expose_error_details: settings.expose_error_details,
    };
    build_router(Arc::new(state), &settings)
}

fn test_app(captcha: CaptchaOutcome, mailer: Arc<StubMailer>) -> Router {
    test_app_with(captcha, mailer, Settings::default())
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jan Peeters",
        "email": "jan@example.be",
        "phone": "",
        "service": "gyproc",
        "message": "Plafond in gyproc",
        "g-recaptcha-response": "tok"
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app(CaptchaOutcome::Verified, Arc::new(StubMailer::default()));
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn valid_submission_returns_success() {
    let mailer = Arc::new(StubMailer::default());
    let app = test_app(CaptchaOutcome::Verified, Arc::clone(&mailer));

    let response = app
        .oneshot(post_json(contact_route(), &valid_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Bericht succesvol verzonden!");
    assert_eq!(mailer.sent.lock().expect("lock").len(), 2);
}

#[tokio::test]
async fn legacy_path_is_served_too() {
    let app = test_app(CaptchaOutcome::Skipped, Arc::new(StubMailer::default()));
    let response = app
        .oneshot(post_json("/.netlify/functions/contact", &valid_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_message_is_rejected_in_dutch() {
    let app = test_app(CaptchaOutcome::Verified, Arc::new(StubMailer::default()));
    let mut body = valid_body();
    body["message"] = serde_json::json!("");

    let response = app
        .oneshot(post_json(contact_route(), &body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Alle verplichte velden moeten ingevuld zijn.");
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn failed_captcha_is_bad_request() {
    let mailer = Arc::new(StubMailer::default());
    let app = test_app(CaptchaOutcome::Rejected, Arc::clone(&mailer));

    let response = app
        .oneshot(post_json(contact_route(), &valid_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Captcha verificatie mislukt. Probeer opnieuw.");
    assert!(mailer.sent.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn delivery_failure_is_server_error_without_details() {
    let mailer = Arc::new(StubMailer {
        fail: true,
        ..StubMailer::default()
    });
    let app = test_app(CaptchaOutcome::Verified, mailer);

    let response = app
        .oneshot(post_json(contact_route(), &valid_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(
        body["message"],
        "Er is een fout opgetreden bij het verzenden. Probeer het later opnieuw."
    );
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn development_mode_includes_error_detail() {
    let mailer = Arc::new(StubMailer {
        fail: true,
        ..StubMailer::default()
    });
    let settings = Settings {
        expose_error_details: true,
        ..Settings::default()
    };
    let app = test_app_with(CaptchaOutcome::Verified, mailer, settings);

    let response = app
        .oneshot(post_json(contact_route(), &valid_body()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    let detail = body["error"].as_str().expect("error detail");
    assert!(detail.contains("503"));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = test_app(CaptchaOutcome::Verified, Arc::new(StubMailer::default()));
    let request = Request::post(contact_route())
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .expect("request");

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_on_contact_is_method_not_allowed() {
    let app = test_app(CaptchaOutcome::Verified, Arc::new(StubMailer::default()));
    let response = app
        .oneshot(Request::get(contact_route()).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Method not allowed");
}

#[tokio::test]
async fn oversized_body_is_refused() {
    let settings = Settings {
        max_body_bytes: 128,
        ..Settings::default()
    };
    let app = test_app_with(
        CaptchaOutcome::Verified,
        Arc::new(StubMailer::default()),
        settings,
    );
    let mut body = valid_body();
    body["message"] = serde_json::json!("x".repeat(1024));

    let response = app
        .oneshot(post_json(contact_route(), &body))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn static_site_is_served_when_configured() {
    let dir = std::env::temp_dir().join(format!("site_static_{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("dir");
    std::fs::write(dir.join("index.html"), "<h1>Krisma Bouw</h1>").expect("write");
    let settings = Settings {
        static_dir: Some(dir.to_string_lossy().into_owned()),
        ..Settings::default()
    };
    let app = test_app_with(
        CaptchaOutcome::Verified,
        Arc::new(StubMailer::default()),
        settings,
    );

    let response = app
        .oneshot(Request::get("/index.html").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    std::fs::remove_dir_all(dir).expect("cleanup");
}
