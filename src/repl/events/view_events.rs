//! # View Events
//!
//! Events emitted by the view model when part of the screen is stale.
//! The controller batches them and asks the renderer for the cheapest redraw.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Full screen redraw required (terminal resize, first frame)
    FullRedrawRequired,

    /// Input area content or scroll changed
    InputAreaRedrawRequired,

    /// Submit button, error banner or result panel changed
    OutcomeAreaRedrawRequired,

    /// Status bar needs updating
    StatusBarUpdateRequired,

    /// Only cursor position needs updating (cheapest)
    CursorUpdateRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_events_should_compare_by_variant() {
        assert_eq!(ViewEvent::FullRedrawRequired, ViewEvent::FullRedrawRequired);
        assert_ne!(
            ViewEvent::InputAreaRedrawRequired,
            ViewEvent::OutcomeAreaRedrawRequired
        );
    }
}
