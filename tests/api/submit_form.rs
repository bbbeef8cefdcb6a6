//! tests/api/submit_form.rs

use crate::helpers::{spawn_app, valid_form};
use claims::{assert_err, assert_ok_eq};
use serde_json::json;
use simple_form::domain::SubmissionPayload;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn submitting_a_free_email_returns_ok() {
    // Arrange
    let test_app = spawn_app();
    let payload = valid_form().to_payload();

    // Act
    let response = test_app.api.submit_form_request(&payload).await;

    // Assert
    assert_ok_eq!(response, "ok");
}

#[tokio::test(start_paused = true)]
async fn submitting_a_taken_email_returns_a_422_with_field_errors() {
    // Arrange
    let test_app = spawn_app();
    let mut payload = valid_form().to_payload();
    payload.insert("email".into(), json!("email@example.com"));

    // Act
    let error = assert_err!(test_app.api.submit_form_request(&payload).await);

    // Assert
    assert_eq!(error.status, "422");
    assert_eq!(error.to_string(), "api error 422");
    assert_eq!(
        error.params.get("email"),
        Some(&vec!["Такой email уже занят".to_owned()])
    );
}

#[tokio::test(start_paused = true)]
async fn payload_without_email_is_accepted() {
    // Arrange
    let test_app = spawn_app();
    let mut payload = SubmissionPayload::new();
    payload.insert("anything".into(), json!(["goes", 1, null]));

    // Act
    let response = test_app.api.submit_form_request(&payload).await;

    // Assert
    assert_ok_eq!(response, "ok");
}

#[tokio::test(start_paused = true)]
async fn submission_waits_for_the_configured_latency() {
    // Arrange
    let test_app = spawn_app();
    let payload = valid_form().to_payload();
    let start = Instant::now();

    // Act
    let _ = test_app.api.submit_form_request(&payload).await;

    // Assert
    assert!(start.elapsed() >= test_app.configuration.api.latency());
}
