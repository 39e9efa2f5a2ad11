use crate::output::render_text;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libwhois_lookup::{
    view::{show_clear, submit_control},
    LookupCoordinator, LookupMode,
};
use std::time::{Duration, Instant};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
pub const DEFAULT_DOMAIN: &str = "amazon.com";
const TOAST_TTL: Duration = Duration::from_secs(2);

/// A lookup the event loop should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub domain: String,
    pub mode: LookupMode,
}

pub struct App {
    pub input: String,
    pub mode: LookupMode,
    pub coordinator: LookupCoordinator,
    pub tick: usize,
    pub toast_message: Option<(String, Instant)>,
    pub quit: bool,
}

impl App {
    pub fn new(coordinator: LookupCoordinator, initial_domain: Option<String>, mode: LookupMode) -> Self {
        Self {
            input: initial_domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            mode,
            coordinator,
            tick: 0,
            toast_message: None,
            quit: false,
        }
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()]
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if let Some((_, created)) = &self.toast_message {
            if created.elapsed() > TOAST_TTL {
                self.toast_message = None;
            }
        }
    }

    fn toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// The request the submit control would send right now, if it is enabled.
    pub fn submit(&self) -> Option<LookupRequest> {
        let state = self.coordinator.snapshot();
        if !submit_control(&state).enabled || self.input.trim().is_empty() {
            return None;
        }
        Some(LookupRequest {
            domain: self.input.clone(),
            mode: self.mode,
        })
    }

    pub fn clear_results(&mut self) {
        if show_clear(&self.coordinator.snapshot()) {
            self.coordinator.clear();
            self.toast("Results cleared");
        }
    }

    fn copy_results_to_clipboard(&mut self) {
        let state = self.coordinator.snapshot();
        if !state.has_results() {
            return;
        }
        let text = render_text(&state, false);
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.toast("Copied results"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                self.toast("Clipboard unavailable");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LookupRequest> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::BackTab => self.mode = self.mode.toggle(),
            KeyCode::Char('x') if ctrl => self.clear_results(),
            KeyCode::Char('y') if ctrl => self.copy_results_to_clipboard(),
            KeyCode::Char('u') if ctrl => self.input.clear(),
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => {}
        }
        None
    }
}
