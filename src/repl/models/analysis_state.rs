//! Analysis state model
//!
//! Explicit state object for the request/display cycle. All mutation goes
//! through four transitions: `begin` (submit), `succeed`, `fail` and `edit`.
//!
//! A result and an error share one slot (`Outcome`), so the view can never
//! show both at once.

use crate::error::AnalysisError;
use crate::repl::models::sentiment::{treatment_for, Sentiment, Treatment};

/// Observable request state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Loading,
    Errored(AnalysisError),
}

/// A request issued by `begin`, echoed back by the service on resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub sequence: u64,
    pub text: String,
}

impl PendingRequest {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// A label received from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentResult {
    /// Raw label exactly as the backend sent it
    pub label: String,
    /// Character count of the submitted text
    pub char_count: usize,
    pub sequence: u64,
}

impl SentimentResult {
    pub fn sentiment(&self) -> Option<Sentiment> {
        Sentiment::from_label(&self.label)
    }

    pub fn treatment(&self) -> Option<Treatment> {
        treatment_for(&self.label)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Outcome {
    #[default]
    Empty,
    Result(SentimentResult),
    Error(AnalysisError),
}

/// Request/response/error state owned by the view
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    loading: bool,
    outcome: Outcome,
    /// Sequence number handed to the next request
    next_sequence: u64,
    /// Requests issued but not yet resolved
    outstanding: usize,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_state(&self) -> RequestState {
        if self.loading {
            return RequestState::Loading;
        }
        match &self.outcome {
            Outcome::Error(err) => RequestState::Errored(err.clone()),
            _ => RequestState::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&SentimentResult> {
        match &self.outcome {
            Outcome::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.outcome {
            Outcome::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Requests issued and not yet resolved
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Sequence number of the most recently issued request, if any
    pub fn latest_sequence(&self) -> Option<u64> {
        self.next_sequence.checked_sub(1)
    }

    /// Submit transition
    ///
    /// Blank text fails immediately with `EmptyInput` and issues nothing.
    /// Otherwise clears any stale result or error, enters loading and returns
    /// the request to send.
    pub fn begin(&mut self, text: &str) -> Result<PendingRequest, AnalysisError> {
        if text.trim().is_empty() {
            tracing::debug!("Rejecting blank input without issuing a request");
            self.outcome = Outcome::Error(AnalysisError::EmptyInput);
            return Err(AnalysisError::EmptyInput);
        }

        let request = PendingRequest {
            sequence: self.next_sequence,
            text: text.to_string(),
        };
        self.next_sequence += 1;
        self.outstanding += 1;
        self.loading = true;
        self.outcome = Outcome::Empty;

        tracing::debug!(
            "Analysis #{} started ({} chars, {} outstanding)",
            request.sequence,
            request.char_count(),
            self.outstanding
        );
        Ok(request)
    }

    /// Success transition: the label becomes the current result
    pub fn succeed(&mut self, request: &PendingRequest, label: String) {
        self.resolve(request);
        tracing::debug!("Analysis #{} resolved with '{}'", request.sequence, label);
        self.outcome = Outcome::Result(SentimentResult {
            label,
            char_count: request.char_count(),
            sequence: request.sequence,
        });
    }

    /// Failure transition: the error replaces whatever was shown
    pub fn fail(&mut self, request: &PendingRequest, error: AnalysisError) {
        self.resolve(request);
        tracing::debug!("Analysis #{} failed: {}", request.sequence, error);
        self.outcome = Outcome::Error(error);
    }

    /// Edit transition: a shown error is dismissed, nothing else changes
    pub fn edit(&mut self) -> bool {
        if matches!(self.outcome, Outcome::Error(_)) {
            self.outcome = Outcome::Empty;
            return true;
        }
        false
    }

    fn resolve(&mut self, request: &PendingRequest) {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.loading = false;

        if self.latest_sequence() != Some(request.sequence) {
            // Last resolved wins, even when it was issued earlier
            tracing::debug!(
                "Analysis #{} resolved after newer request #{:?}",
                request.sequence,
                self.latest_sequence()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport_error() -> AnalysisError {
        AnalysisError::Transport {
            backend: "http://localhost:8000".to_string(),
        }
    }

    #[test]
    fn new_state_should_be_idle_without_result() {
        let state = AnalysisState::new();
        assert_eq!(state.request_state(), RequestState::Idle);
        assert!(state.result().is_none());
        assert!(state.error().is_none());
        assert_eq!(state.latest_sequence(), None);
    }

    #[test]
    fn begin_should_reject_blank_text() {
        let mut state = AnalysisState::new();
        for text in ["", "   ", "\n\t"] {
            assert_eq!(state.begin(text), Err(AnalysisError::EmptyInput));
            assert_eq!(
                state.request_state(),
                RequestState::Errored(AnalysisError::EmptyInput)
            );
        }
        assert_eq!(state.outstanding(), 0);
        assert_eq!(state.latest_sequence(), None);
    }

    #[test]
    fn begin_should_clear_previous_result_and_enter_loading() {
        let mut state = AnalysisState::new();
        let first = state.begin("good day").unwrap();
        state.succeed(&first, "positive".to_string());
        assert!(state.result().is_some());

        let second = state.begin("bad day").unwrap();
        assert_eq!(second.sequence, first.sequence + 1);
        assert_eq!(state.request_state(), RequestState::Loading);
        assert!(state.result().is_none());
    }

    #[test]
    fn begin_should_clear_previous_error() {
        let mut state = AnalysisState::new();
        let request = state.begin("text").unwrap();
        state.fail(&request, transport_error());
        assert!(state.error().is_some());

        state.begin("text").unwrap();
        assert!(state.error().is_none());
    }

    #[test]
    fn succeed_should_store_label_and_submitted_length() {
        let mut state = AnalysisState::new();
        let request = state.begin("I love this! ♥").unwrap();
        state.succeed(&request, "positive".to_string());

        assert_eq!(state.request_state(), RequestState::Idle);
        let result = state.result().unwrap();
        assert_eq!(result.label, "positive");
        assert_eq!(result.char_count, 14);
        assert_eq!(result.sentiment(), Some(Sentiment::Positive));
        assert!(result.treatment().is_some());
    }

    #[test]
    fn unknown_label_should_be_kept_without_treatment() {
        let mut state = AnalysisState::new();
        let request = state.begin("wow").unwrap();
        state.succeed(&request, "ecstatic".to_string());

        let result = state.result().unwrap();
        assert_eq!(result.label, "ecstatic");
        assert!(result.sentiment().is_none());
        assert!(result.treatment().is_none());
    }

    #[test]
    fn fail_should_stop_loading_and_leave_no_result() {
        let mut state = AnalysisState::new();
        let request = state.begin("text").unwrap();
        state.fail(&request, transport_error());

        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(
            state.request_state(),
            RequestState::Errored(transport_error())
        );
    }

    #[test]
    fn edit_should_only_clear_errors() {
        let mut state = AnalysisState::new();
        let _ = state.begin("  ");
        assert!(state.edit());
        assert_eq!(state.request_state(), RequestState::Idle);
        assert!(!state.edit());

        let request = state.begin("fine").unwrap();
        state.succeed(&request, "neutral".to_string());
        assert!(!state.edit());
        assert!(state.result().is_some());
    }

    #[test]
    fn edit_while_loading_should_keep_loading() {
        let mut state = AnalysisState::new();
        state.begin("text").unwrap();
        state.edit();
        assert_eq!(state.request_state(), RequestState::Loading);
    }

    #[test]
    fn last_resolution_should_win_even_if_issued_first() {
        let mut state = AnalysisState::new();
        let first = state.begin("first").unwrap();
        let second = state.begin("second!").unwrap();
        assert_eq!(state.outstanding(), 2);

        state.succeed(&second, "negative".to_string());
        state.succeed(&first, "positive".to_string());

        let result = state.result().unwrap();
        assert_eq!(result.label, "positive");
        assert_eq!(result.sequence, first.sequence);
        assert_eq!(result.char_count, 5);
        assert_eq!(state.outstanding(), 0);
    }

    #[test]
    fn late_failure_should_replace_earlier_success() {
        let mut state = AnalysisState::new();
        let first = state.begin("first").unwrap();
        let second = state.begin("second").unwrap();

        state.succeed(&second, "negative".to_string());
        state.fail(&first, transport_error());

        assert!(state.result().is_none());
        assert!(state.error().is_some());
    }
}
