//! # Status Line Model
//!
//! Encapsulates all state related to the status line display,
//! providing a clean interface for status bar rendering.

/// Reachability of the backend as last probed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Online,
    Offline,
}

impl BackendHealth {
    pub fn label(self) -> &'static str {
        match self {
            BackendHealth::Unknown => "checking",
            BackendHealth::Online => "online",
            BackendHealth::Offline => "offline",
        }
    }
}

/// Status line model containing all status bar display state
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Temporary status message to display
    status_message: Option<String>,

    /// Endpoint requests are sent to
    endpoint: String,

    /// Last health probe result
    backend_health: BackendHealth,
}

impl StatusLine {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            status_message: None,
            endpoint: endpoint.into(),
            backend_health: BackendHealth::Unknown,
        }
    }

    // === Status Message Methods ===

    /// Set a temporary status message
    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    // === Backend Methods ===

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn backend_health(&self) -> BackendHealth {
        self.backend_health
    }

    /// Record a probe result; returns true if it changed
    pub fn set_backend_health(&mut self, health: BackendHealth) -> bool {
        if self.backend_health == health {
            return false;
        }
        self.backend_health = health;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_should_start_unknown_without_message() {
        let status = StatusLine::new("http://localhost:8000/sentiment");
        assert_eq!(status.backend_health(), BackendHealth::Unknown);
        assert_eq!(status.status_message(), None);
        assert_eq!(status.endpoint(), "http://localhost:8000/sentiment");
    }

    #[test]
    fn status_message_should_set_and_clear() {
        let mut status = StatusLine::new("x");
        status.set_status_message("Input cleared");
        assert_eq!(status.status_message(), Some("Input cleared"));
        status.clear_status_message();
        assert_eq!(status.status_message(), None);
    }

    #[test]
    fn set_backend_health_should_report_changes() {
        let mut status = StatusLine::new("x");
        assert!(status.set_backend_health(BackendHealth::Online));
        assert!(!status.set_backend_health(BackendHealth::Online));
        assert_eq!(status.backend_health().label(), "online");
    }
}
