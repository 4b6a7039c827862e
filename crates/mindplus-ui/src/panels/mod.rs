pub mod calm;
pub mod chat;

pub use calm::{calm_panel, CalmAction, CalmAnimation};
pub use chat::{chat_panel, ChatAction};
