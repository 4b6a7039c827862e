use serde::{Deserialize, Serialize};

/// Visual and affirmation theme for a calm session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualPreset {
    pub label: String,
    pub title: String,
    pub affirmation_text: String,
    pub background_color: String,
    pub pulse_color: String,
    pub text_color: String,
}

/// Intensity tag paired with an emotion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lenient parse: only `low`, `medium` and `high` are accepted, anything
    /// else is `Low`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("medium") => Severity::Medium,
            Some("high") => Severity::High,
            _ => Severity::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// Countdown state for a calm session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub total_duration_seconds: u32,
    pub remaining_seconds: u32,
    pub running: bool,
}

impl TimerState {
    pub fn progress_fraction(&self) -> f32 {
        if self.total_duration_seconds == 0 {
            return 0.0;
        }
        (self.remaining_seconds as f32 / self.total_duration_seconds as f32).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }
}
