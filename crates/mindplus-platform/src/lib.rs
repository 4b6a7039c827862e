//! MindPlus platform adapters — browser implementations of the
//! `mindplus-core` port traits.

pub mod chat_api;
pub mod clock;
pub mod emotion_api;
pub mod http;
pub mod identity;
pub mod ticker;

pub use chat_api::ChatApiClient;
pub use emotion_api::EmotionServiceClient;
pub use identity::SessionIdentity;
pub use ticker::IntervalTicker;

#[cfg(test)]
mod tests;
