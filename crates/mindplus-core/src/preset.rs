//! Preset resolver — maps an (emotion, severity) pair to a calm-session theme.
//!
//! Precedence:
//! 1. the curated table, keyed by `"<emotion>-<severity>"`, returned as is;
//! 2. the per-emotion fallback table, with `unknown` for anything unlisted,
//!    passed through [`apply_severity`].
//!
//! Resolution is total: every input produces a preset.

use mindplus_types::calm::{Severity, VisualPreset};

/// Static preset row; converted to an owned [`VisualPreset`] on lookup.
struct PresetEntry {
    label: &'static str,
    title: &'static str,
    affirmation: &'static str,
    background: &'static str,
    pulse: &'static str,
    text: &'static str,
}

impl PresetEntry {
    fn to_preset(&self) -> VisualPreset {
        VisualPreset {
            label: self.label.to_string(),
            title: self.title.to_string(),
            affirmation_text: self.affirmation.to_string(),
            background_color: self.background.to_string(),
            pulse_color: self.pulse.to_string(),
            text_color: self.text.to_string(),
        }
    }
}

const CURATED: &[(&str, PresetEntry)] = &[
    (
        "sadness-medium",
        PresetEntry {
            label: "Self-Compassion",
            title: "A kinder moment",
            affirmation: "I am safe, I am present, and I will move through this gently.",
            background: "#ECF2FF",
            pulse: "#A5B4FC",
            text: "#0F172A",
        },
    ),
    (
        "fear-high",
        PresetEntry {
            label: "Grounding Affirmation",
            title: "You are safe right now",
            affirmation: "I am safe, I am present. I can handle this moment, one breath at a time.",
            background: "#E7F5FF",
            pulse: "#7DD3FC",
            text: "#0B1E34",
        },
    ),
];

const FALLBACKS: &[(&str, PresetEntry)] = &[
    (
        "sadness",
        PresetEntry {
            label: "Self-Compassion",
            title: "A kinder moment",
            affirmation: "This feeling is valid. I can meet it with gentleness.",
            background: "#ECF2FF",
            pulse: "#A5B4FC",
            text: "#0F172A",
        },
    ),
    (
        "fear",
        PresetEntry {
            label: "Grounding Affirmation",
            title: "You are safe right now",
            affirmation: "I can slow down. In this moment, I am safe enough.",
            background: "#E7F5FF",
            pulse: "#7DD3FC",
            text: "#0B1E34",
        },
    ),
    (
        "anxiety",
        PresetEntry {
            label: "Steady Breath",
            title: "One step at a time",
            affirmation: "I can focus on one breath, then the next.",
            background: "#F3E8FF",
            pulse: "#C4B5FD",
            text: "#1F1147",
        },
    ),
    (
        "stress",
        PresetEntry {
            label: "Reset",
            title: "Return to balance",
            affirmation: "I can release what I cannot control and return to my breath.",
            background: "#FFF7ED",
            pulse: "#FDBA74",
            text: "#2A1606",
        },
    ),
    (
        "anger",
        PresetEntry {
            label: "Pause",
            title: "Respond with clarity",
            affirmation: "I can pause. I choose a calm and clear response.",
            background: "#FEF2F2",
            pulse: "#FCA5A5",
            text: "#2B0A0A",
        },
    ),
    (
        "joy",
        PresetEntry {
            label: "Gratitude",
            title: "Savor this moment",
            affirmation: "I allow myself to feel joy and appreciate this moment.",
            background: "#FFFBEB",
            pulse: "#FDE68A",
            text: "#1F1A05",
        },
    ),
    (
        "happy",
        PresetEntry {
            label: "Positive Moment",
            title: "Stay present",
            affirmation: "I notice this good feeling and let it fill my body.",
            background: "#FFFBEB",
            pulse: "#FDE68A",
            text: "#1F1A05",
        },
    ),
    (
        "calm",
        PresetEntry {
            label: "Calm Presence",
            title: "Keep it steady",
            affirmation: "I breathe slowly and stay grounded in the present.",
            background: "#ECFDF5",
            pulse: "#6EE7B7",
            text: "#062113",
        },
    ),
    (
        "neutral",
        PresetEntry {
            label: "Mindful Check-In",
            title: "Notice without judgment",
            affirmation: "I observe how I feel with curiosity and kindness.",
            background: "#F3F4F6",
            pulse: "#CBD5E1",
            text: "#0F172A",
        },
    ),
    (
        "surprise",
        PresetEntry {
            label: "Settle",
            title: "Find your center",
            affirmation: "I can pause and let my body settle.",
            background: "#FDF2F8",
            pulse: "#FBCFE8",
            text: "#2A0B1B",
        },
    ),
    (
        "disgust",
        PresetEntry {
            label: "Release",
            title: "Let it pass",
            affirmation: "I can soften my body and let this feeling pass through.",
            background: "#F7FEE7",
            pulse: "#BEF264",
            text: "#17210A",
        },
    ),
    (
        "confused",
        PresetEntry {
            label: "Clarity",
            title: "One thing at a time",
            affirmation: "I can slow down and focus on the next small step.",
            background: "#FFFBEB",
            pulse: "#FCD34D",
            text: "#1F1A05",
        },
    ),
    (
        "excited",
        PresetEntry {
            label: "Steady Energy",
            title: "Channel it gently",
            affirmation: "I can enjoy this energy while staying grounded.",
            background: "#FDF2F8",
            pulse: "#F9A8D4",
            text: "#2A0B1B",
        },
    ),
    (
        "love",
        PresetEntry {
            label: "Warmth",
            title: "Open-hearted breath",
            affirmation: "I allow warmth and care to flow through me.",
            background: "#FFF1F2",
            pulse: "#FDA4AF",
            text: "#2A0B12",
        },
    ),
    (UNKNOWN_EMOTION, UNKNOWN_ENTRY),
];

const UNKNOWN_EMOTION: &str = "unknown";

const UNKNOWN_ENTRY: PresetEntry = PresetEntry {
    label: "Grounding",
    title: "Return to the present",
    affirmation: "I breathe in. I breathe out. I am here, right now.",
    background: "#F3F4F6",
    pulse: "#CBD5E1",
    text: "#0F172A",
};

/// Canonical emotion label: trimmed, lower-cased, with aliases folded.
pub fn normalize_emotion(raw: Option<&str>) -> String {
    let key = raw.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    match key.as_str() {
        "" => UNKNOWN_EMOTION.to_string(),
        "sad" => "sadness".to_string(),
        "anxious" => "anxiety".to_string(),
        _ => key,
    }
}

/// Exact `"<emotion>-<severity>"` lookup in the curated table.
pub fn curated_preset(key: &str) -> Option<VisualPreset> {
    CURATED
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, entry)| entry.to_preset())
}

/// Per-emotion lookup in the fallback table.
pub fn emotion_fallback(emotion: &str) -> Option<VisualPreset> {
    FALLBACKS
        .iter()
        .find(|(k, _)| *k == emotion)
        .map(|(_, entry)| entry.to_preset())
}

/// Severity adjustment applied to fallback presets.
///
/// Currently the identity for every level: copy is not softened at low
/// severity nor intensified at high severity.
pub fn apply_severity(preset: VisualPreset, severity: Severity) -> VisualPreset {
    match severity {
        Severity::High | Severity::Medium | Severity::Low => preset,
    }
}

/// Resolve the calm-session preset for a raw emotion and severity.
pub fn resolve_preset(emotion: Option<&str>, severity: Option<&str>) -> VisualPreset {
    let emotion = normalize_emotion(emotion);
    let severity = Severity::normalize(severity);
    let key = format!("{}-{}", emotion, severity.as_str());

    if let Some(preset) = curated_preset(&key) {
        return preset;
    }

    let base = emotion_fallback(&emotion).unwrap_or_else(|| UNKNOWN_ENTRY.to_preset());
    apply_severity(base, severity)
}

/// Every emotion label the fallback table covers.
pub fn known_emotions() -> Vec<&'static str> {
    FALLBACKS.iter().map(|(k, _)| *k).collect()
}
