//! # Application Controller
//!
//! The controller owns the view model, the renderer and the sentiment
//! service. It turns terminal events into command events, applies them,
//! hands analysis requests to the service, feeds responses back into the
//! view model and asks the renderer to redraw whatever went stale.

use crate::config::Settings;
use crate::repl::{
    commands::{CommandContext, CommandEvent, CommandRegistry, MovementDirection, ViewModelSnapshot},
    events::ViewEvent,
    io::{EventStream, RenderStream},
    services::{SentimentResponseMessage, SentimentService},
    view_models::ViewModel,
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use std::time::Duration;

/// How long one loop iteration waits for terminal input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller that orchestrates the MVVM pattern
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    service: SentimentService,
    event_stream: ES,
    should_quit: bool,
    health_probe_pending: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams
    pub fn with_io_streams(settings: &Settings, event_stream: ES, render_stream: RS) -> Result<Self> {
        let service = SentimentService::new(settings.endpoint.clone())?;
        let mut view_model = ViewModel::new(settings.endpoint.as_str());

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);

        tracing::info!("Controller ready for endpoint {}", settings.endpoint);

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            service,
            event_stream,
            should_quit: false,
            health_probe_pending: false,
        })
    }

    /// Run the main application loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.check_backend_health();
        self.view_model.collect_pending_view_events();
        self.view_renderer.render_full(&self.view_model)?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        if let Err(e) = self.view_renderer.cleanup() {
            tracing::error!("Terminal cleanup failed: {}", e);
        }
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.drain_service_responses();

            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_terminal_event(event)?;
            } else {
                // Let response tasks run on single-threaded runtimes
                tokio::task::yield_now().await;
            }

            if !self.should_quit {
                self.render_pending()?;
            }
        }
        Ok(())
    }

    /// Dispatch one terminal event
    pub fn handle_terminal_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                self.process_key_event(key_event)
            }
            Event::Paste(text) => {
                self.process_paste(&text);
                Ok(())
            }
            Event::Resize(width, height) => {
                self.view_model.update_terminal_size(width, height);
                self.view_renderer.update_size(width, height);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Route a key press through the command registry and apply the result
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::debug!("Received key event: {:?}", key_event);

        let context = CommandContext::new(ViewModelSnapshot::from_view_model(&self.view_model));
        let events = self.command_registry.process_event(key_event, &context)?;
        if !events.is_empty() {
            tracing::debug!("Command events generated: {:?}", events);
        }

        for event in events {
            self.apply_command_event(event);
        }
        Ok(())
    }

    /// Insert pasted text as a single edit
    pub fn process_paste(&mut self, text: &str) {
        tracing::debug!("Pasted {} characters", text.chars().count());
        self.view_model.insert_text(text);
    }

    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::CursorMoveRequested { direction } => match direction {
                MovementDirection::Left => self.view_model.move_cursor_left(),
                MovementDirection::Right => self.view_model.move_cursor_right(),
                MovementDirection::Up => self.view_model.move_cursor_up(),
                MovementDirection::Down => self.view_model.move_cursor_down(),
                MovementDirection::LineStart => self.view_model.move_cursor_to_line_start(),
                MovementDirection::LineEnd => self.view_model.move_cursor_to_line_end(),
            },
            CommandEvent::TextInsertRequested { text } => self.view_model.insert_text(&text),
            CommandEvent::TextDeleteRequested { direction } => match direction {
                MovementDirection::Left => self.view_model.delete_char_before_cursor(),
                MovementDirection::Right => self.view_model.delete_char_after_cursor(),
                other => tracing::warn!("Unsupported delete direction: {:?}", other),
            },
            CommandEvent::InputClearRequested => self.view_model.clear_input(),
            CommandEvent::AnalysisRequested => {
                self.request_analysis();
            }
            CommandEvent::QuitRequested => self.should_quit = true,
        }
    }

    /// Submit the current input for analysis
    ///
    /// Returns true when a request was sent. Blank input shows the validation
    /// error instead. Calls are not guarded against overlap; the response
    /// that resolves last decides the display.
    pub fn request_analysis(&mut self) -> bool {
        match self.view_model.submit() {
            Some(request) => {
                self.service.execute_async(request);
                true
            }
            None => false,
        }
    }

    /// Start a background probe of the backend health endpoint
    pub fn check_backend_health(&mut self) {
        self.health_probe_pending = self.service.check_health_async();
    }

    fn apply_service_message(&mut self, message: SentimentResponseMessage) {
        if matches!(message, SentimentResponseMessage::Health { .. }) {
            self.health_probe_pending = false;
        }
        self.view_model.apply_service_message(message);
    }

    /// Apply every response that has already arrived
    fn drain_service_responses(&mut self) {
        while let Some(message) = self.service.poll_response() {
            self.apply_service_message(message);
        }
    }

    /// Wait until every outstanding request and health probe has resolved,
    /// then render what changed
    pub async fn settle(&mut self, timeout: Duration) -> Result<()> {
        let deadline = tokio::time::Instant::now() + timeout;

        while self.view_model.analysis().outstanding() > 0 || self.health_probe_pending {
            match tokio::time::timeout_at(deadline, self.service.next_response()).await {
                Ok(Some(message)) => self.apply_service_message(message),
                Ok(None) => break,
                Err(_) => anyhow::bail!(
                    "Timed out after {:?} with {} request(s) outstanding",
                    timeout,
                    self.view_model.analysis().outstanding()
                ),
            }
        }

        self.render_pending()
    }

    /// Redraw the areas the view model marked stale
    pub fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }

        // Full redraw covers everything else
        if view_events.contains(&ViewEvent::FullRedrawRequired) {
            return self.view_renderer.render_full(&self.view_model);
        }

        for event in &view_events {
            self.view_renderer
                .handle_view_event(event, &self.view_model)?;
        }
        Ok(())
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
