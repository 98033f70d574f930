#![cfg(feature = "http")]

//! HTTP-level tests for `WebhookBackend` and a full session over it.

use automation_consultant::backend::{BlueprintBackend, TransportError, WebhookBackend};
use automation_consultant::blueprint::{ConsultationForm, FormField};
use automation_consultant::config::ConsultantConfig;
use automation_consultant::error::{ErrorKind, TRANSPORT_MESSAGE};
use automation_consultant::session::AcquisitionController;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOOK_PATH: &str = "/webhook/consultant";

async fn setup() -> (MockServer, ConsultantConfig) {
    let server = MockServer::start().await;
    let config = ConsultantConfig::new(&format!("{}{}", server.uri(), HOOK_PATH)).unwrap();
    (server, config)
}

fn form() -> ConsultationForm {
    ConsultationForm::new()
        .with(FormField::Industry, "Retail")
        .with(FormField::ManualTask, "Re-key web orders")
        .with(FormField::Goal, "Same-day fulfilment")
}

#[tokio::test]
async fn test_posts_all_six_fields_as_json() {
    let (server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .and(body_json(json!({
            "industry": "Retail",
            "role": "",
            "manual_task": "Re-key web orders",
            "tools": "",
            "trigger": "",
            "goal": "Same-day fulfilment"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("raw reply"))
        .expect(1)
        .mount(&server)
        .await;

    let backend = WebhookBackend::new(&config);
    let body = backend.submit(&form()).await.unwrap();
    assert_eq!(body, "raw reply");
}

#[tokio::test]
async fn test_non_success_status_ignores_body() {
    let (server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "industry": "Retail",
            "pain_point": "looks like a blueprint",
            "solution_title": "but the status says otherwise",
            "solution_description": "",
            "workflow_steps": [{"tool_name": "Gmail", "description": "x"}]
        })))
        .mount(&server)
        .await;

    let backend = WebhookBackend::new(&config);
    let err = backend.submit(&form()).await.unwrap_err();
    assert_eq!(err, TransportError::Status { status: 500 });
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn test_unreachable_server() {
    // Nothing listens on port 1.
    let config = ConsultantConfig::new("http://127.0.0.1:1/webhook/consultant").unwrap();

    let backend = WebhookBackend::new(&config);
    let err = backend.submit(&form()).await.unwrap_err();
    assert!(matches!(err, TransportError::Unreachable(_)), "{err:?}");
}

#[tokio::test]
async fn test_session_over_http_reaches_ready() {
    let (server, config) = setup().await;

    let reply = format!(
        "Sure! Here's the blueprint:\n```json\n{}\n```\nLet me know if you need changes.",
        json!({
            "industry": "Retail",
            "pain_point": "Orders are re-keyed by hand",
            "solution_title": "Order Sync",
            "solution_description": "Pushes web orders into the ERP",
            "workflow_steps": [
                {"tool_name": "Shopify", "action": "New order", "description": "Trigger on checkout"},
                {"tool_name": "n8n", "description": "Map fields to {erp_schema}"},
                {"tool_name": "NetSuite", "action": "Create sales order", "description": "Write order"}
            ],
            "saas_stack": [
                {"tool_name": "Shopify", "role": "Storefront", "connection_type": "Native"},
                {"tool_name": "NetSuite", "role": "ERP", "connection_type": "API"}
            ]
        })
    );

    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(reply))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = AcquisitionController::new(config);
    *session.form_mut().unwrap() = form();

    let state = session.submit().await;
    let blueprint = state.blueprint().expect("blueprint expected");
    assert_eq!(blueprint.step_count(), 3);
    assert_eq!(
        blueprint.workflow_steps[1].description,
        "Map fields to {erp_schema}"
    );
    assert!(blueprint.saas_stack[0].is_native_integration());
    assert!(!blueprint.saas_stack[1].is_native_integration());

    let text = session.clipboard_text().unwrap();
    assert!(text.contains("2. n8n: Map fields to {erp_schema}"));
    assert!(text.contains("- NetSuite (API): ERP"));
}

#[tokio::test]
async fn test_session_over_http_server_error() {
    let (server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let mut session = AcquisitionController::new(config);
    *session.form_mut().unwrap() = form();

    let state = session.submit().await;
    let error = state.error().unwrap();
    assert_eq!(error.kind(), ErrorKind::Transport);
    assert_eq!(error.user_message(), TRANSPORT_MESSAGE);
    assert_eq!(state.form(), Some(&form()));
}

#[tokio::test]
async fn test_session_timeout_over_http() {
    let (server, config) = setup().await;

    Mock::given(method("POST"))
        .and(path(HOOK_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = config.with_request_timeout(Some(Duration::from_millis(50)));
    let mut session = AcquisitionController::new(config);
    *session.form_mut().unwrap() = form();

    let state = session.submit().await;
    assert_eq!(state.error().unwrap().kind(), ErrorKind::Transport);
}
