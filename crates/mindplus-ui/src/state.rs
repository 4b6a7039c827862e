//! UI-level state that drives rendering.
//! This is a read-only projection of the orchestrator and calm-session
//! state, updated each frame by draining the EventBus.

use mindplus_core::status::{format_overall_status, format_status_meta, latest_metadata};
use mindplus_core::timer::format_remaining;
use mindplus_types::{
    calm::TimerState,
    event::MindEvent,
    message::ChatMessage,
    session::{SessionPhase, StatusSnapshot},
};

/// Which screen fills the central panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Chat,
    Calm,
}

/// State visible to UI panels
pub struct UiState {
    /// Transcript as appended by the orchestrator
    pub messages: Vec<ChatMessage>,
    pub phase: SessionPhase,
    pub status: StatusSnapshot,
    /// Latest countdown state, once a calm session exists
    pub timer: Option<TimerState>,
    pub timer_finished: bool,
    /// Input field content
    pub input_text: String,
    /// Technique chip whose detail card is open
    pub selected_technique: Option<String>,
    /// Last error worth showing in the header
    pub error_text: Option<String>,
    pub screen: Screen,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            phase: SessionPhase::Uninitialized,
            status: StatusSnapshot::default(),
            timer: None,
            timer_finished: false,
            input_text: String::new(),
            selected_technique: None,
            error_text: None,
            screen: Screen::Chat,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<MindEvent>) {
        for event in events {
            match event {
                MindEvent::SessionStateChanged { phase } => {
                    match &phase {
                        SessionPhase::Ready => self.error_text = None,
                        SessionPhase::Uninitialized => {
                            self.messages.clear();
                            self.selected_technique = None;
                        }
                        _ => {}
                    }
                    self.phase = phase;
                }
                MindEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                MindEvent::StatusChanged { snapshot } => {
                    self.status = snapshot;
                }
                MindEvent::TimerStateChanged { state } => {
                    self.timer_finished = state.is_finished();
                    self.timer = Some(state);
                }
                MindEvent::TimerFinished => {
                    self.timer_finished = true;
                }
                MindEvent::Error { message } => {
                    log::debug!("UI error: {}", message);
                    self.error_text = Some(message);
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Whether the send button is enabled.
    pub fn can_send(&self) -> bool {
        self.phase.can_send() && !self.input_text.trim().is_empty()
    }

    /// Take the trimmed input for sending, clearing the field.
    pub fn take_input(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let text = self.input_text.trim().to_string();
        self.input_text.clear();
        Some(text)
    }

    /// Techniques suggested by the latest bot analysis.
    pub fn techniques(&self) -> Vec<String> {
        latest_metadata(&self.messages)
            .map(|m| m.techniques.clone())
            .unwrap_or_default()
    }

    /// Open a technique card, or close it when it is already open.
    pub fn toggle_technique(&mut self, name: &str) {
        if self.selected_technique.as_deref() == Some(name) {
            self.selected_technique = None;
        } else {
            self.selected_technique = Some(name.to_string());
        }
    }

    pub fn status_title(&self) -> &'static str {
        format_overall_status(self.status.overall_status)
    }

    pub fn status_meta(&self) -> String {
        format_status_meta(&self.status)
    }

    /// Header line for the current session phase.
    pub fn phase_text(&self) -> String {
        match &self.phase {
            SessionPhase::Uninitialized => "Not connected".to_string(),
            SessionPhase::Starting => "Connecting...".to_string(),
            SessionPhase::Ready => "Online".to_string(),
            SessionPhase::Sending => "MindPlus is thinking...".to_string(),
            SessionPhase::Failed(reason) => format!("Offline: {}", reason),
        }
    }

    pub fn timer_label(&self) -> String {
        self.timer
            .map(|t| format_remaining(t.remaining_seconds))
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn timer_progress(&self) -> f32 {
        self.timer.map(|t| t.progress_fraction()).unwrap_or(1.0)
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
