//! # Analysis Management
//!
//! Submit and resolution transitions for the request/display cycle.
//! The view model decides what to send; the controller hands the request to
//! the service and feeds the service's messages back here.

use crate::repl::events::ViewEvent;
use crate::repl::models::PendingRequest;
use crate::repl::services::SentimentResponseMessage;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Start an analysis of the current input
    ///
    /// Returns the request to send, or `None` when the input was blank and a
    /// validation error is now shown instead.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        let text = self.input.text().to_string();
        let outcome = self.analysis.begin(&text);
        self.emit_view_event([
            ViewEvent::OutcomeAreaRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
        ]);

        match outcome {
            Ok(request) => Some(request),
            Err(e) => {
                tracing::info!("Submit rejected: {}", e);
                None
            }
        }
    }

    /// Apply a message from the sentiment service
    pub fn apply_service_message(&mut self, message: SentimentResponseMessage) {
        match message {
            SentimentResponseMessage::Success { request, sentiment } => {
                self.analysis.succeed(&request, sentiment);
                self.emit_view_event([
                    ViewEvent::OutcomeAreaRedrawRequired,
                    ViewEvent::StatusBarUpdateRequired,
                ]);
            }
            SentimentResponseMessage::Error { request, error } => {
                self.analysis.fail(&request, error);
                self.emit_view_event([
                    ViewEvent::OutcomeAreaRedrawRequired,
                    ViewEvent::StatusBarUpdateRequired,
                ]);
            }
            SentimentResponseMessage::Health { health } => {
                if self.status_line.set_backend_health(health) {
                    tracing::info!("Backend is {}", health.label());
                    self.emit_view_event([ViewEvent::StatusBarUpdateRequired]);
                }
            }
        }
    }
}
