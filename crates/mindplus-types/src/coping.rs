use serde::{Deserialize, Serialize};
use crate::calm::Severity;

/// Result of `POST /predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPrediction {
    pub emotion: String,
    pub confidence: f64,
    pub keywords: Vec<String>,
}

/// Result of `POST /coping-strategy`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopingStrategy {
    pub emotion: String,
    pub confidence: f64,
    pub severity: Severity,
    pub strategy: Option<String>,
}

/// One answered daily check-in question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInAnswer {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub emotion: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Dominant emotion across a day's answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInSummary {
    pub emotion: String,
    pub confidence: f64,
}
