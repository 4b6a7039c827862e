use serde::{Deserialize, Serialize};
use crate::message::{ChatMessage, OverallStatus};

/// Lifecycle of a chat session.
///
/// `Uninitialized → Starting → Ready ⇄ Sending`; a failed bootstrap lands in
/// `Failed`, from which only an explicit restart leaves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Uninitialized,
    Starting,
    Ready,
    Sending,
    Failed(String),
}

impl SessionPhase {
    pub fn can_send(&self) -> bool {
        matches!(self, SessionPhase::Ready)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, SessionPhase::Starting | SessionPhase::Sending)
    }
}

/// A chat conversation bound to a server-issued session id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
}

/// Display status derived from the latest bot analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub overall_status: OverallStatus,
    pub emotion: Option<String>,
    pub stress_level: Option<String>,
    pub academic_stress_category: Option<String>,
    pub risk_level: Option<String>,
}
