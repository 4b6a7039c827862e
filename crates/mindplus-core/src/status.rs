//! Session status aggregation and status-card copy.

use mindplus_types::{
    message::{ChatMessage, OverallStatus, StatusMetadata},
    session::StatusSnapshot,
};

/// Latest analysis in the transcript: the metadata of the most recent bot
/// message that carries one. Metadata-less bot notices are skipped.
pub fn latest_metadata(messages: &[ChatMessage]) -> Option<&StatusMetadata> {
    messages
        .iter()
        .rev()
        .filter(|m| m.is_bot())
        .find_map(|m| m.status_metadata.as_ref())
}

/// Derive the display status. Defaults to `Idle` with every detail unset.
pub fn derive_status(messages: &[ChatMessage]) -> StatusSnapshot {
    match latest_metadata(messages) {
        Some(meta) => StatusSnapshot {
            overall_status: meta.overall_status,
            emotion: meta.emotion.clone(),
            stress_level: meta.stress_level.clone(),
            academic_stress_category: meta.academic_stress_category.clone(),
            risk_level: meta.risk_level.clone(),
        },
        None => StatusSnapshot::default(),
    }
}

pub fn format_overall_status(status: OverallStatus) -> &'static str {
    match status {
        OverallStatus::Critical => "Critical · Please reach out for real-time help",
        OverallStatus::HighStress => "High stress detected",
        OverallStatus::ModerateStress => "Moderate stress",
        OverallStatus::LowStress => "Low stress",
        OverallStatus::Normal => "Stable for now",
        OverallStatus::Idle => "Tell me how you're feeling to get a snapshot",
    }
}

pub fn format_emotion(emotion: Option<&str>) -> String {
    match emotion {
        Some(e) if !e.is_empty() => format!("Emotion: {}", e),
        _ => "Emotion: pending".to_string(),
    }
}

pub fn format_stress_level(level: Option<&str>) -> String {
    match level {
        Some(l) if !l.is_empty() => format!("Stress: {}", l),
        _ => "Stress: pending".to_string(),
    }
}

pub fn format_risk_level(risk: Option<&str>) -> String {
    match risk {
        None | Some("") => "Risk: assessing".to_string(),
        Some("safe") => "Risk: safe".to_string(),
        Some("moderate_risk") => "Risk: needs care".to_string(),
        Some("high_risk") => "Risk: urgent".to_string(),
        Some(other) => format!("Risk: {}", other),
    }
}

pub fn format_academic_stress(label: Option<&str>) -> String {
    match label {
        None | Some("") => "Study stress: pending".to_string(),
        Some("burnout") => "Study stress: burnout".to_string(),
        Some("academic_stress_high") => "Study stress: high".to_string(),
        Some("academic_stress_medium") => "Study stress: medium".to_string(),
        Some("academic_stress_low") => "Study stress: low".to_string(),
        Some(other) => format!("Study stress: {}", other),
    }
}

/// Second line of the status card.
pub fn format_status_meta(snapshot: &StatusSnapshot) -> String {
    [
        format_emotion(snapshot.emotion.as_deref()),
        format_stress_level(snapshot.stress_level.as_deref()),
        format_academic_stress(snapshot.academic_stress_category.as_deref()),
        format_risk_level(snapshot.risk_level.as_deref()),
    ]
    .join(" · ")
}

/// Status-card colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTheme {
    pub background: &'static str,
    pub border: &'static str,
}

pub fn status_theme(status: OverallStatus) -> StatusTheme {
    let (background, border) = match status {
        OverallStatus::Critical => ("#FEE2E2", "#EF4444"),
        OverallStatus::HighStress => ("#FEF3C7", "#F59E0B"),
        OverallStatus::ModerateStress => ("#E0F2FE", "#38BDF8"),
        OverallStatus::LowStress => ("#DCFCE7", "#22C55E"),
        OverallStatus::Normal => ("#EEF2FF", "#6366F1"),
        OverallStatus::Idle => ("#EEF2FF", "#CBD5F5"),
    };
    StatusTheme { background, border }
}

/// Bot replies flagged critical get the alert bubble.
pub fn is_critical(message: &ChatMessage) -> bool {
    message
        .status_metadata
        .as_ref()
        .is_some_and(|m| m.overall_status == OverallStatus::Critical)
}
