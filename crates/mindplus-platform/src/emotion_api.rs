//! Emotion / coping-strategy service adapter.
//!
//! Replies are lenient: any missing field falls back to a default instead of
//! failing the call. Non-2xx responses are hard failures, never retried.

use async_trait::async_trait;
use gloo_net::http::Response;
use serde::Deserialize;
use serde_json::json;

use mindplus_core::ports::EmotionServicePort;
use mindplus_types::{
    MindError, Result,
    calm::Severity,
    config::EmotionServiceConfig,
    coping::{CopingStrategy, EmotionPrediction},
};
use crate::http::{post_json, read_json};

pub struct EmotionServiceClient {
    config: EmotionServiceConfig,
}

impl EmotionServiceClient {
    pub fn new(config: EmotionServiceConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl EmotionServicePort for EmotionServiceClient {
    async fn predict(&self, text: &str) -> Result<EmotionPrediction> {
        let body = json!({ "text": text });
        let response = post_json(&self.config.endpoint("/predict"), Some(&body), None).await?;
        let reply: PredictReply = read_json(require_ok(response, "Emotion service error")?).await?;
        Ok(reply.into_prediction())
    }

    async fn coping_strategy(&self, emotion: &str, confidence: f64) -> Result<CopingStrategy> {
        let body = json!({ "emotion": emotion, "confidence": confidence });
        let response = post_json(&self.config.endpoint("/coping-strategy"), Some(&body), None).await?;
        let reply: StrategyReply = read_json(require_ok(response, "Coping strategy service error")?).await?;
        Ok(reply.into_strategy(emotion, confidence))
    }
}

fn require_ok(response: Response, context: &str) -> Result<Response> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        Err(MindError::Http {
            status,
            message: format!("{}: {}", context, status),
        })
    }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PredictReply {
    #[serde(default)]
    emotion: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    keywords: Option<Vec<String>>,
}

impl PredictReply {
    pub(crate) fn into_prediction(self) -> EmotionPrediction {
        EmotionPrediction {
            emotion: self.emotion.unwrap_or_else(|| "unknown".to_string()),
            confidence: self.confidence.unwrap_or(0.0),
            keywords: self.keywords.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StrategyReply {
    #[serde(default)]
    emotion: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    strategy: Option<String>,
}

impl StrategyReply {
    /// Fill gaps from the request that produced this reply.
    pub(crate) fn into_strategy(self, emotion: &str, confidence: f64) -> CopingStrategy {
        CopingStrategy {
            emotion: self.emotion.unwrap_or_else(|| emotion.to_string()),
            confidence: self.confidence.filter(|c| c.is_finite()).unwrap_or(confidence),
            severity: Severity::normalize(self.severity.as_deref()),
            strategy: self.strategy,
        }
    }
}
