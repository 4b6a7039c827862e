use serde::{Deserialize, Serialize};
use crate::error::MindError;

/// Top-level companion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MindConfig {
    pub chat: ChatServiceConfig,
    pub emotion: EmotionServiceConfig,
    pub calm: CalmConfig,
    /// Label shown on bot messages
    pub bot_label: String,
}

impl Default for MindConfig {
    fn default() -> Self {
        Self {
            chat: ChatServiceConfig::default(),
            emotion: EmotionServiceConfig::default(),
            calm: CalmConfig::default(),
            bot_label: DEFAULT_BOT_LABEL.to_string(),
        }
    }
}

impl MindConfig {
    /// Parse a JSON config, filling missing sections with defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: MindConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.chat.base_url.trim().is_empty() {
            return Err(MindError::Config("chat.base_url is empty".to_string()));
        }
        if self.emotion.base_url.trim().is_empty() {
            return Err(MindError::Config("emotion.base_url is empty".to_string()));
        }
        if self.chat.request_timeout_ms == 0 {
            return Err(MindError::Config("chat.request_timeout_ms must be positive".to_string()));
        }
        if self.calm.duration_seconds == 0 {
            return Err(MindError::Config("calm.duration_seconds must be positive".to_string()));
        }
        if self.calm.tick_interval_ms == 0 {
            return Err(MindError::Config("calm.tick_interval_ms must be positive".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatServiceConfig {
    pub base_url: String,
    /// Inference can be slow, so the ceiling is generous
    pub request_timeout_ms: u64,
}

impl Default for ChatServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            request_timeout_ms: 25_000,
        }
    }
}

impl ChatServiceConfig {
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionServiceConfig {
    pub base_url: String,
}

impl Default for EmotionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
        }
    }
}

impl EmotionServiceConfig {
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalmConfig {
    pub duration_seconds: u32,
    pub tick_interval_ms: u32,
}

impl Default for CalmConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 60,
            tick_interval_ms: 1000,
        }
    }
}

/// Strip trailing slashes from a base URL.
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", normalize_base_url(base), path.trim_start_matches('/'))
}

pub const DEFAULT_BOT_LABEL: &str = "MindPlus Bot";
