//! Shared fixtures for the headless integration tests
//!
//! Each test gets its own `wiremock` server standing in for the sentiment
//! backend, and a controller wired to mock terminal streams.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use sentiline::config::Settings;
use sentiline::repl::io::{MockEventStream, MockRenderStream, RenderRecorder};
use sentiline::AppController;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoint on a port nothing listens on
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/sentiment";

pub fn settings_for(endpoint: &str) -> Settings {
    Settings::new(endpoint, "warn".to_string(), "/tmp/sentiline-it.log").unwrap()
}

pub fn sentiment_endpoint(server: &MockServer) -> String {
    format!("{}/sentiment", server.uri())
}

/// Controller on an 80x24 mock terminal
pub fn create_controller(endpoint: &str) -> (TestController, RenderRecorder) {
    let render_stream = MockRenderStream::new();
    let recorder = render_stream.recorder();
    let controller = AppController::with_io_streams(
        &settings_for(endpoint),
        MockEventStream::empty(),
        render_stream,
    )
    .unwrap();
    (controller, recorder)
}

/// Feed text through the key handling one character at a time
pub fn type_text(controller: &mut TestController, text: &str) {
    for ch in text.chars() {
        let event = match ch {
            '\n' => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            _ => KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE),
        };
        controller.handle_terminal_event(Event::Key(event)).unwrap();
    }
}

pub fn press_ctrl(controller: &mut TestController, ch: char) {
    let event = KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL);
    controller.handle_terminal_event(Event::Key(event)).unwrap();
}

/// Answer POSTs carrying `text` with the given label
pub async fn mount_label(server: &MockServer, text: &str, label: &str, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/sentiment"))
        .and(body_json(json!({ "text": text })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "sentiment": label }))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

/// Number of analysis POSTs the server has seen
pub async fn post_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.method.as_str() == "POST")
        .count()
}
