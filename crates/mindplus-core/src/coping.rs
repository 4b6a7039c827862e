//! Coping flow: journal text → emotion → coping strategy → calm preset.
//!
//! Service failures are hard failures here; retrying is up to the caller.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use mindplus_types::{
    Result,
    calm::VisualPreset,
    coping::{CopingStrategy, EmotionPrediction},
};
use crate::ports::EmotionServicePort;
use crate::preset::resolve_preset;

/// Everything the coping screen needs to render a calm session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalmPlan {
    pub prediction: EmotionPrediction,
    pub strategy: CopingStrategy,
    pub preset: VisualPreset,
}

/// Hand-off point between a background coping lookup and the calm session
/// that asked for it. Each session takes a new generation; plans tagged
/// with an older generation are discarded on delivery.
#[derive(Clone, Default)]
pub struct PlanSlot {
    inner: Rc<RefCell<PlanSlotInner>>,
}

#[derive(Default)]
struct PlanSlotInner {
    generation: u64,
    plan: Option<CalmPlan>,
}

impl PlanSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate outstanding lookups and return the new generation.
    pub fn begin(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        inner.generation = inner.generation.wrapping_add(1);
        inner.plan = None;
        inner.generation
    }

    /// Store `plan` if `generation` is still current. Returns whether it was kept.
    pub fn deliver(&self, generation: u64, plan: CalmPlan) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.generation != generation {
            log::debug!("Dropping coping plan from closed calm session {}", generation);
            return false;
        }
        inner.plan = Some(plan);
        true
    }

    pub fn take(&self) -> Option<CalmPlan> {
        self.inner.borrow_mut().plan.take()
    }
}

/// Classify `text`, then fetch a strategy for the detected emotion.
pub async fn plan_from_text(service: &dyn EmotionServicePort, text: &str) -> Result<CalmPlan> {
    let prediction = service.predict(text).await?;
    log::info!(
        "Detected emotion '{}' ({:.2})",
        prediction.emotion,
        prediction.confidence
    );
    plan_from_prediction(service, prediction).await
}

/// Fetch a strategy for an already known emotion.
pub async fn plan_from_prediction(
    service: &dyn EmotionServicePort,
    prediction: EmotionPrediction,
) -> Result<CalmPlan> {
    let strategy = service
        .coping_strategy(&prediction.emotion, prediction.confidence)
        .await?;
    let preset = resolve_preset(Some(&strategy.emotion), Some(strategy.severity.as_str()));
    Ok(CalmPlan {
        prediction,
        strategy,
        preset,
    })
}
