use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::constants::MISSING_FIELDS_ERROR;
use shared::registration::{RegisterRequest, RegisterResponse};
use shared::validation::validate_required;
use tracing::info;

use crate::error::Error;
use crate::services::registration_service;
use crate::AppState;

/// Handler that forwards a new wheel contact to the mailing lists
pub async fn register_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, Error> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Unreadable register-user body: {}", rejection.body_text());
        Error::Validation(MISSING_FIELDS_ERROR)
    })?;
    if validate_required(&request.name).is_err() || validate_required(&request.email).is_err() {
        return Err(Error::Validation(MISSING_FIELDS_ERROR));
    }
    let request = RegisterRequest {
        name: request.name.trim().to_string(),
        email: request.email.trim().to_string(),
    };

    let config = state.mailing.as_ref().map_err(|message| {
        tracing::error!("Missing mailing-list configuration: {}", message);
        Error::Config(*message)
    })?;

    info!("Registering wheel contact: {}", request.email);
    let response = registration_service::register_contact(&state.http, config, &request)
        .await
        .map_err(|e| {
            tracing::error!("Error in register-user: {}", e);
            e
        })?;

    Ok(Json(response))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MailingConfig, MISSING_BREVO_CONFIG};
    use crate::create_app;
    use axum::body::{to_bytes, Body};
    use axum::http::{HeaderMap, Request};
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};
    use shared::constants::{ALREADY_SUBSCRIBED_MESSAGE, REGISTERED_MESSAGE};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;
    use tower::ServiceExt;

    #[derive(Debug, Clone)]
    struct Received {
        provider: &'static str,
        auth: Option<String>,
        body: Value,
    }

    #[derive(Clone)]
    struct MockProviders {
        mailchimp: (StatusCode, Value),
        brevo: (StatusCode, Value),
        received: Arc<Mutex<Vec<Received>>>,
    }

    impl MockProviders {
        fn new(mailchimp: (StatusCode, Value), brevo: (StatusCode, Value)) -> Self {
            Self {
                mailchimp,
                brevo,
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    async fn mock_mailchimp(
        State(mock): State<MockProviders>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        mock.received.lock().unwrap().push(Received { provider: "mailchimp", auth, body });
        (mock.mailchimp.0, Json(mock.mailchimp.1.clone()))
    }

    async fn mock_brevo(
        State(mock): State<MockProviders>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let auth = headers
            .get("api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        mock.received.lock().unwrap().push(Received { provider: "brevo", auth, body });
        (mock.brevo.0, Json(mock.brevo.1.clone()))
    }

    async fn spawn_mock(mock: MockProviders) -> String {
        let app = Router::new()
            .route("/3.0/lists/:audience/members", post(mock_mailchimp))
            .route("/v3/contacts", post(mock_brevo))
            .with_state(mock);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn state_for(base_url: &str) -> AppState {
        let config = MailingConfig {
            mailchimp_api_key: "mc-key".to_string(),
            mailchimp_audience_id: "aud123".to_string(),
            mailchimp_base_url: base_url.to_string(),
            brevo_api_key: "brevo-key".to_string(),
            brevo_list_id: Some(3),
            brevo_base_url: base_url.to_string(),
        };
        AppState {
            http: reqwest::Client::builder().no_proxy().build().unwrap(),
            mailing: Ok(Arc::new(config)),
        }
    }

    async fn post_register(state: AppState, body: Value) -> (StatusCode, Value) {
        post_raw(state, body.to_string()).await
    }

    async fn post_raw(state: AppState, body: String) -> (StatusCode, Value) {
        let app = create_app(state, "dist");
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/register-user")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ana() -> Value {
        json!({ "name": " Ana María López ", "email": "ana@example.com " })
    }

    #[tokio::test]
    async fn test_new_contact_registered_in_both_lists() {
        let mock = MockProviders::new(
            (StatusCode::OK, json!({ "id": "mc1" })),
            (StatusCode::CREATED, json!({ "id": 42 })),
        );
        let base = spawn_mock(mock.clone()).await;

        let (status, body) = post_register(state_for(&base), ana()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!(REGISTERED_MESSAGE));

        let received = mock.received.lock().unwrap().clone();
        assert_eq!(received.len(), 2);
        let mailchimp = received.iter().find(|r| r.provider == "mailchimp").unwrap();
        assert_eq!(mailchimp.auth.as_deref(), Some("Bearer mc-key"));
        assert_eq!(mailchimp.body["email_address"], json!("ana@example.com"));
        assert_eq!(mailchimp.body["merge_fields"]["LNAME"], json!("María López"));
        let brevo = received.iter().find(|r| r.provider == "brevo").unwrap();
        assert_eq!(brevo.auth.as_deref(), Some("brevo-key"));
        assert_eq!(brevo.body["listIds"], json!([3]));
        assert_eq!(brevo.body["attributes"]["FIRSTNAME"], json!("Ana"));
    }

    #[tokio::test]
    async fn test_duplicate_contacts_count_as_success() {
        let mock = MockProviders::new(
            (StatusCode::BAD_REQUEST, json!({ "title": "Member Exists", "status": 400 })),
            (StatusCode::BAD_REQUEST, json!({ "code": "duplicate_parameter" })),
        );
        let base = spawn_mock(mock).await;

        let (status, body) = post_register(state_for(&base), ana()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["message"], json!(ALREADY_SUBSCRIBED_MESSAGE));
    }

    #[tokio::test]
    async fn test_mailchimp_failure_reported_with_details() {
        let mock = MockProviders::new(
            (StatusCode::INTERNAL_SERVER_ERROR, json!({ "title": "Internal Error" })),
            (StatusCode::CREATED, json!({ "id": 42 })),
        );
        let base = spawn_mock(mock).await;

        let (status, body) = post_register(state_for(&base), ana()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["details"]["title"], json!("Internal Error"));
    }

    #[tokio::test]
    async fn test_brevo_failure_keeps_provider_status() {
        let mock = MockProviders::new(
            (StatusCode::OK, json!({})),
            (StatusCode::UNAUTHORIZED, json!({ "code": "unauthorized" })),
        );
        let base = spawn_mock(mock).await;

        let (status, body) = post_register(state_for(&base), ana()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["details"]["code"], json!("unauthorized"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_server_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let (status, body) = post_register(state_for(&base), ana()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_blank_fields_rejected_before_forwarding() {
        let mock = MockProviders::new((StatusCode::OK, json!({})), (StatusCode::OK, json!({})));
        let base = spawn_mock(mock.clone()).await;

        let (status, body) =
            post_register(state_for(&base), json!({ "name": "  ", "email": "ana@example.com" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], json!(MISSING_FIELDS_ERROR));
        assert!(mock.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_body_answers_with_json() {
        let mock = MockProviders::new((StatusCode::OK, json!({})), (StatusCode::OK, json!({})));
        let base = spawn_mock(mock.clone()).await;

        for body in [
            "{\"name\": \"Ana\"".to_string(),
            json!({ "name": "Ana" }).to_string(),
            json!({ "name": "Ana", "email": 7 }).to_string(),
        ] {
            let (status, response) = post_raw(state_for(&base), body.clone()).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response["success"], json!(false));
            assert_eq!(response["message"], json!(MISSING_FIELDS_ERROR));
        }
        assert!(mock.received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_configuration_is_server_error() {
        let state = AppState {
            http: reqwest::Client::new(),
            mailing: Err(MISSING_BREVO_CONFIG),
        };
        let (status, body) = post_register(state, ana()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!(MISSING_BREVO_CONFIG));
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_app(AppState::new(Err(Error::Config(MISSING_BREVO_CONFIG))), "dist");
        let response = app
            .oneshot(Request::builder().uri("/api/health_check").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }
}
