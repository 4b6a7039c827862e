use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// Coarse wellbeing classification reported by the chat service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    Critical,
    HighStress,
    ModerateStress,
    LowStress,
    Normal,
    #[default]
    Idle,
}

impl OverallStatus {
    /// Parse a wire label. Unknown or empty labels fall back to `Idle`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "critical" => OverallStatus::Critical,
            "high_stress" => OverallStatus::HighStress,
            "moderate_stress" => OverallStatus::ModerateStress,
            "low_stress" => OverallStatus::LowStress,
            "normal" => OverallStatus::Normal,
            _ => OverallStatus::Idle,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Critical => "critical",
            OverallStatus::HighStress => "high_stress",
            OverallStatus::ModerateStress => "moderate_stress",
            OverallStatus::LowStress => "low_stress",
            OverallStatus::Normal => "normal",
            OverallStatus::Idle => "idle",
        }
    }

    pub fn all() -> &'static [OverallStatus] {
        &[
            OverallStatus::Critical,
            OverallStatus::HighStress,
            OverallStatus::ModerateStress,
            OverallStatus::LowStress,
            OverallStatus::Normal,
            OverallStatus::Idle,
        ]
    }
}

/// Analysis attached to a genuine bot reply. Never mutated after creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMetadata {
    pub emotion: Option<String>,
    pub stress_level: Option<String>,
    pub academic_stress_category: Option<String>,
    pub risk_level: Option<String>,
    pub overall_status: OverallStatus,
    #[serde(default)]
    pub techniques: Vec<String>,
}

/// A single entry in the chat transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Role,
    pub text: String,
    /// Display label: the user's identity or the bot name
    pub label: String,
    /// Present only on bot replies that came from the chat service
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status_metadata: Option<StatusMetadata>,
    pub created_at: String,
}

impl ChatMessage {
    pub fn user(id: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: Role::User,
            text: text.into(),
            label: label.into(),
            status_metadata: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bot(
        id: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
        metadata: StatusMetadata,
    ) -> Self {
        Self {
            id: id.into(),
            sender: Role::Bot,
            text: text.into(),
            label: label.into(),
            status_metadata: Some(metadata),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A bot message synthesized locally, e.g. after a failed send.
    pub fn bot_notice(id: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sender: Role::Bot,
            text: text.into(),
            label: label.into(),
            status_metadata: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Role::Bot
    }
}

/// Wire reply of `POST /chat/message`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub bot_message: String,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub stress_level: Option<String>,
    #[serde(default)]
    pub academic_stress_category: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub overall_status: Option<String>,
    #[serde(default)]
    pub techniques: Option<Vec<String>>,
}

impl ChatReply {
    /// Split the reply into the bot text and its status metadata.
    pub fn into_parts(self) -> (String, StatusMetadata) {
        let overall_status = self
            .overall_status
            .as_deref()
            .map(OverallStatus::from_label)
            .unwrap_or_default();
        let metadata = StatusMetadata {
            emotion: non_empty(self.emotion),
            stress_level: non_empty(self.stress_level),
            academic_stress_category: non_empty(self.academic_stress_category),
            risk_level: non_empty(self.risk_level),
            overall_status,
            techniques: self.techniques.unwrap_or_default(),
        };
        (self.bot_message, metadata)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
