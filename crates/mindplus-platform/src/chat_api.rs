//! Chat service adapter.
//!
//! `POST /chat/start` opens a session, `POST /chat/message` returns one bot
//! reply with its wellbeing analysis. Both calls are bounded by
//! `ChatServiceConfig::request_timeout_ms` since inference can be slow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use mindplus_core::ports::ChatServicePort;
use mindplus_types::{
    MindError, Result,
    config::ChatServiceConfig,
    message::ChatReply,
};
use crate::http::{ensure_ok, post_json, read_json};

pub struct ChatApiClient {
    config: ChatServiceConfig,
}

impl ChatApiClient {
    pub fn new(config: ChatServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChatServiceConfig {
        &self.config
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    session_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct StartReply {
    #[serde(default)]
    pub(crate) session_id: Option<String>,
}

impl StartReply {
    pub(crate) fn into_session_id(self) -> Result<String> {
        self.session_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| MindError::Other("chat service returned no session id".to_string()))
    }
}

#[async_trait(?Send)]
impl ChatServicePort for ChatApiClient {
    async fn start_session(&self) -> Result<String> {
        let url = self.config.endpoint("/chat/start");
        let response = post_json(&url, None, Some(self.config.request_timeout_ms)).await?;
        let reply: StartReply = read_json(ensure_ok(response).await?).await?;
        reply.into_session_id()
    }

    async fn send_message(&self, session_id: &str, text: &str) -> Result<ChatReply> {
        let url = self.config.endpoint("/chat/message");
        let body = serde_json::to_value(MessageBody { session_id, text })?;
        let response = post_json(&url, Some(&body), Some(self.config.request_timeout_ms)).await?;
        read_json(ensure_ok(response).await?).await
    }
}
