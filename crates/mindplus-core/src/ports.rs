//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `mindplus-core` (pure Rust).
//! Implementations live in `mindplus-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use mindplus_types::{
    Result,
    coping::{CopingStrategy, EmotionPrediction},
    message::ChatReply,
};

// ─── Chat Service Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatServicePort {
    /// `POST /chat/start` — returns the server-issued session id
    async fn start_session(&self) -> Result<String>;

    /// `POST /chat/message` — one bot reply per user message.
    /// Implementations bound the call with a timeout.
    async fn send_message(&self, session_id: &str, text: &str) -> Result<ChatReply>;
}

// ─── Emotion Service Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait EmotionServicePort {
    /// `POST /predict`
    async fn predict(&self, text: &str) -> Result<EmotionPrediction>;

    /// `POST /coping-strategy`
    async fn coping_strategy(&self, emotion: &str, confidence: f64) -> Result<CopingStrategy>;
}

// ─── Identity Port ───────────────────────────────────────────

/// Who is talking. Injected so the core never reaches for a global auth handle.
pub trait IdentityPort {
    /// Label shown on the user's own messages
    fn display_label(&self) -> String;
}

// ─── Ticker Port ─────────────────────────────────────────────

/// A single periodic timer. Starting again replaces the previous callback.
pub trait TickerPort {
    /// `on_tick` returns whether to keep ticking; `false` stops the timer
    /// after that call.
    fn start(&mut self, period_ms: u32, on_tick: Box<dyn FnMut() -> bool>);

    /// Cancel the periodic timer. No callback may run afterwards.
    fn stop(&mut self);

    fn is_active(&self) -> bool;
}
