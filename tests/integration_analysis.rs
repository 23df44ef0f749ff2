//! Headless end-to-end tests of the submit/display cycle
//!
//! Keys go through the real command registry and view model, requests go to
//! a `wiremock` backend, and assertions read the mock terminal screen.

mod common;

use common::*;
use sentiline::error::AnalysisError;
use sentiline::repl::models::{BackendHealth, RequestState, Sentiment};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn whitespace_submit_should_not_call_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "   \n  ");
    assert!(!controller.request_analysis());
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert_eq!(analysis.error(), Some(&AnalysisError::EmptyInput));
    assert!(!analysis.is_loading());
    assert!(recorder.screen_contains("Please enter some text to analyze"));
    assert_eq!(post_count(&server).await, 0);
}

#[tokio::test]
async fn submit_key_should_be_inert_for_blank_input() {
    let server = MockServer::start().await;
    let (mut controller, _) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "  ");
    press_ctrl(&mut controller, 's');
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    assert_eq!(controller.view_model().analysis().request_state(), RequestState::Idle);
    assert_eq!(post_count(&server).await, 0);
}

#[tokio::test]
async fn editing_after_error_should_clear_it_without_calling_backend() {
    let server = MockServer::start().await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    assert!(!controller.request_analysis());
    controller.settle(SETTLE_TIMEOUT).await.unwrap();
    assert!(controller.view_model().analysis().error().is_some());

    type_text(&mut controller, "a");
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    assert_eq!(controller.view_model().analysis().error(), None);
    assert!(!recorder.screen_contains("Please enter some text"));
    assert_eq!(post_count(&server).await, 0);
}

#[tokio::test]
async fn positive_label_should_render_with_icon_and_length() {
    let server = MockServer::start().await;
    let text = "I love this product";
    mount_label(&server, text, "positive", Duration::ZERO).await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, text);
    press_ctrl(&mut controller, 's');
    assert!(controller.view_model().analysis().is_loading());

    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let result = controller.view_model().analysis().result().unwrap();
    assert_eq!(result.label, "positive");
    assert_eq!(result.sentiment(), Some(Sentiment::Positive));
    assert_eq!(result.char_count, text.chars().count());
    assert!(!controller.view_model().analysis().is_loading());

    let top = controller.view_model().layout().result.top;
    assert_eq!(recorder.screen_row(top), "  Your Sentiment");
    assert_eq!(recorder.screen_row(top + 1), "  ♥ positive");
    assert_eq!(recorder.screen_row(top + 4), "  Text length: 19 characters");
    assert_eq!(post_count(&server).await, 1);
}

#[tokio::test]
async fn unknown_label_should_render_raw_without_icon() {
    let server = MockServer::start().await;
    mount_label(&server, "over the moon", "ecstatic", Duration::ZERO).await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "over the moon");
    assert!(controller.request_analysis());
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let result = controller.view_model().analysis().result().unwrap();
    assert_eq!(result.label, "ecstatic");
    assert!(result.treatment().is_none());

    let top = controller.view_model().layout().result.top;
    assert_eq!(recorder.screen_row(top + 1), "  ecstatic");
}

#[tokio::test]
async fn server_error_should_show_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "anything");
    assert!(controller.request_analysis());
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert!(!analysis.is_loading());
    assert!(analysis.result().is_none());
    assert_eq!(
        analysis.error(),
        Some(&AnalysisError::Transport {
            backend: server.uri()
        })
    );
    assert!(recorder.screen_contains("Failed to connect to the API"));
}

#[tokio::test]
async fn malformed_body_should_show_connection_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;
    let (mut controller, _) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "anything");
    controller.request_analysis();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert!(matches!(analysis.error(), Some(AnalysisError::Transport { .. })));
    assert!(analysis.result().is_none());
}

#[tokio::test]
async fn unreachable_backend_should_show_connection_failure() {
    let (mut controller, _) = create_controller(UNREACHABLE_ENDPOINT);

    type_text(&mut controller, "hello");
    assert!(controller.request_analysis());
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert!(!analysis.is_loading());
    assert_eq!(
        analysis.error(),
        Some(&AnalysisError::Transport {
            backend: "http://127.0.0.1:9".to_string()
        })
    );
}

#[tokio::test]
async fn failure_after_success_should_clear_previous_result() {
    let server = MockServer::start().await;
    mount_label(&server, "first", "neutral", Duration::ZERO).await;
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let (mut controller, _) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "first");
    controller.request_analysis();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();
    assert_eq!(controller.view_model().analysis().result().unwrap().label, "neutral");

    type_text(&mut controller, " and second");
    controller.request_analysis();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert!(analysis.result().is_none());
    assert!(analysis.error().is_some());
}

#[tokio::test]
async fn last_resolved_response_should_win() {
    let server = MockServer::start().await;
    mount_label(&server, "slow text", "negative", Duration::from_millis(400)).await;
    mount_label(&server, "fast text", "positive", Duration::ZERO).await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    type_text(&mut controller, "slow text");
    assert!(controller.request_analysis());

    press_ctrl(&mut controller, 'u');
    type_text(&mut controller, "fast text");
    // Programmatic submits are not blocked by the loading state
    assert!(controller.request_analysis());
    assert_eq!(controller.view_model().analysis().outstanding(), 2);

    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    let analysis = controller.view_model().analysis();
    assert!(!analysis.is_loading());
    assert!(analysis.error().is_none());
    let result = analysis.result().unwrap();
    assert_eq!(result.label, "negative");
    assert_eq!(result.char_count, "slow text".chars().count());

    let top = controller.view_model().layout().result.top;
    assert_eq!(recorder.screen_row(top + 1), "  ☂ negative");
    assert_eq!(post_count(&server).await, 2);
}

#[tokio::test]
async fn overlapping_failures_should_show_single_banner() {
    let (mut controller, recorder) = create_controller(UNREACHABLE_ENDPOINT);

    type_text(&mut controller, "one");
    controller.request_analysis();
    controller.request_analysis();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    assert_eq!(
        recorder
            .screen_text()
            .matches("Failed to connect to the API")
            .count(),
        1
    );
    assert_eq!(controller.view_model().analysis().outstanding(), 0);
}

#[tokio::test]
async fn health_probe_should_update_status_bar() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    controller.check_backend_health();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    assert_eq!(
        controller.view_model().status_line().backend_health(),
        BackendHealth::Online
    );
    assert!(recorder.screen_row(23).contains("● online"));
}

#[tokio::test]
async fn failing_health_probe_should_mark_backend_offline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let (mut controller, recorder) = create_controller(&sentiment_endpoint(&server));

    controller.check_backend_health();
    controller.settle(SETTLE_TIMEOUT).await.unwrap();

    assert_eq!(
        controller.view_model().status_line().backend_health(),
        BackendHealth::Offline
    );
    assert!(recorder.screen_row(23).contains("● offline"));
}
