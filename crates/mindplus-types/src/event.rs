use serde::{Deserialize, Serialize};
use crate::calm::TimerState;
use crate::message::ChatMessage;
use crate::session::{SessionPhase, StatusSnapshot};

/// Events emitted by the core.
/// The view layer subscribes to these instead of owning the state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MindEvent {
    /// The chat session moved to a new lifecycle phase
    SessionStateChanged { phase: SessionPhase },

    /// A message was appended to the transcript
    MessageAppended { message: ChatMessage },

    /// The derived wellbeing status changed
    StatusChanged { snapshot: StatusSnapshot },

    /// The calm-session countdown changed
    TimerStateChanged { state: TimerState },

    /// The countdown reached zero
    TimerFinished,

    /// Something failed that the user should see
    Error { message: String },
}
