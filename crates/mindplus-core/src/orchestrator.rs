//! Chat session orchestrator — owns the transcript and all chat-service traffic.
//!
//! Lifecycle:
//! 1. `start_session` obtains a session id (`Starting → Ready`, or `Failed`)
//! 2. `send_message` appends the user message immediately, calls the service
//!    and appends the bot reply (`Ready → Sending → Ready`)
//! 3. A failed send appends an apology instead of surfacing the error
//!
//! Methods take `&self`: the orchestrator is shared through `Rc` with the
//! view, and borrows are never held across an `.await`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use mindplus_types::{
    MindError, Result,
    config::MindConfig,
    event::MindEvent,
    message::ChatMessage,
    session::{ChatSession, SessionPhase, StatusSnapshot},
};
use crate::event_bus::EventBus;
use crate::ports::{ChatServicePort, IdentityPort};
use crate::status::derive_status;

pub const APOLOGY_TEXT: &str = "I had trouble connecting just now. Please try again in a moment.";

pub struct ChatOrchestrator {
    config: MindConfig,
    chat: Rc<dyn ChatServicePort>,
    identity: Rc<dyn IdentityPort>,
    event_bus: EventBus,
    phase: RefCell<SessionPhase>,
    session_id: RefCell<Option<String>>,
    messages: RefCell<Vec<ChatMessage>>,
    status: RefCell<StatusSnapshot>,
    next_seq: Cell<u64>,
}

impl ChatOrchestrator {
    pub fn new(
        config: MindConfig,
        chat: Rc<dyn ChatServicePort>,
        identity: Rc<dyn IdentityPort>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            config,
            chat,
            identity,
            event_bus,
            phase: RefCell::new(SessionPhase::Uninitialized),
            session_id: RefCell::new(None),
            messages: RefCell::new(Vec::new()),
            status: RefCell::new(StatusSnapshot::default()),
            next_seq: Cell::new(0),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.borrow().clone()
    }

    pub fn session_id(&self) -> Option<String> {
        self.session_id.borrow().clone()
    }

    pub fn is_sending(&self) -> bool {
        *self.phase.borrow() == SessionPhase::Sending
    }

    /// Snapshot of the transcript in chronological order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Current derived status, recomputed from the transcript.
    pub fn status(&self) -> StatusSnapshot {
        derive_status(&self.messages.borrow())
    }

    pub fn session(&self) -> Option<ChatSession> {
        self.session_id().map(|session_id| ChatSession {
            session_id,
            messages: self.messages(),
        })
    }

    /// Obtain a session id from the chat service.
    ///
    /// Allowed from `Uninitialized` and `Failed` (an explicit retry). If a
    /// session is already open its id is returned unchanged.
    pub async fn start_session(&self) -> Result<String> {
        match self.phase() {
            SessionPhase::Ready | SessionPhase::Sending => {
                if let Some(id) = self.session_id() {
                    return Ok(id);
                }
            }
            SessionPhase::Starting => return Err(MindError::SessionNotReady),
            SessionPhase::Uninitialized | SessionPhase::Failed(_) => {}
        }

        self.set_phase(SessionPhase::Starting);

        let result = self.chat.start_session().await.and_then(|id| {
            if id.trim().is_empty() {
                Err(MindError::Other("empty session id".to_string()))
            } else {
                Ok(id)
            }
        });

        match result {
            Ok(id) => {
                log::info!("Chat session started: {}", id);
                *self.session_id.borrow_mut() = Some(id.clone());
                self.set_phase(SessionPhase::Ready);
                Ok(id)
            }
            Err(e) => {
                let err = MindError::SessionStart(e.to_string());
                log::error!("{}", err);
                self.set_phase(SessionPhase::Failed(e.to_string()));
                self.event_bus.emit(MindEvent::Error {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Send one user message and append the bot's answer.
    ///
    /// Returns the appended bot message. Backend failures do not fail the
    /// call: the returned message is then the apology notice, without
    /// status metadata.
    pub async fn send_message(&self, text: &str) -> Result<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MindError::EmptyMessage);
        }

        let session_id = match self.phase() {
            SessionPhase::Sending => return Err(MindError::SendInFlight),
            SessionPhase::Ready => self.session_id().ok_or(MindError::SessionNotReady)?,
            _ => return Err(MindError::SessionNotReady),
        };

        self.set_phase(SessionPhase::Sending);

        let user_id = self.next_id("user");
        self.append(ChatMessage::user(user_id, self.identity.display_label(), text));

        let bot_message = match self.chat.send_message(&session_id, text).await {
            Ok(reply) => {
                let (bot_text, metadata) = reply.into_parts();
                ChatMessage::bot(self.next_id("bot"), &self.config.bot_label, bot_text, metadata)
            }
            Err(e) => {
                log::warn!("{}", MindError::SendFailure(e.to_string()));
                ChatMessage::bot_notice(self.next_id("error"), &self.config.bot_label, APOLOGY_TEXT)
            }
        };

        self.append(bot_message.clone());
        self.refresh_status();
        self.set_phase(SessionPhase::Ready);
        Ok(bot_message)
    }

    /// Drop the transcript and session id. Refused while a send is in flight.
    pub fn reset(&self) -> Result<()> {
        if self.is_sending() {
            return Err(MindError::SendInFlight);
        }
        self.messages.borrow_mut().clear();
        *self.session_id.borrow_mut() = None;
        self.next_seq.set(0);
        self.refresh_status();
        self.set_phase(SessionPhase::Uninitialized);
        Ok(())
    }

    fn next_id(&self, suffix: &str) -> String {
        let seq = self.next_seq.get() + 1;
        self.next_seq.set(seq);
        format!("{}-{}", seq, suffix)
    }

    fn append(&self, message: ChatMessage) {
        self.messages.borrow_mut().push(message.clone());
        self.event_bus.emit(MindEvent::MessageAppended { message });
    }

    fn refresh_status(&self) {
        let snapshot = self.status();
        let changed = *self.status.borrow() != snapshot;
        if changed {
            *self.status.borrow_mut() = snapshot.clone();
            self.event_bus.emit(MindEvent::StatusChanged { snapshot });
        }
    }

    fn set_phase(&self, phase: SessionPhase) {
        *self.phase.borrow_mut() = phase.clone();
        self.event_bus.emit(MindEvent::SessionStateChanged { phase });
    }
}
