//! WASM-target tests for mindplus-core.
//!
//! Runs EventBus, timer, preset and ChatOrchestrator tests under
//! wasm32-unknown-unknown via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use mindplus_core::event_bus::EventBus;
use mindplus_core::orchestrator::{ChatOrchestrator, APOLOGY_TEXT};
use mindplus_core::ports::*;
use mindplus_core::preset::resolve_preset;
use mindplus_core::status::derive_status;
use mindplus_core::timer::CountdownTimer;
use mindplus_types::config::MindConfig;
use mindplus_types::event::MindEvent;
use mindplus_types::message::*;
use mindplus_types::session::SessionPhase;
use mindplus_types::MindError;

use async_trait::async_trait;
use std::rc::Rc;

// ─── EventBus Tests ──────────────────────────────────────

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(MindEvent::TimerFinished);
    bus.emit(MindEvent::Error { message: "x".to_string() });

    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 2);
    assert!(!bus.has_pending());
}

// ─── Timer Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn timer_counts_down() {
    let mut timer = CountdownTimer::new(60, EventBus::new()).unwrap();
    timer.start(60).unwrap();
    for _ in 0..61 {
        timer.tick();
    }
    assert_eq!(timer.remaining_seconds(), 0);
    assert_eq!(timer.remaining_label(), "00:00");
}

// ─── Preset Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn preset_fallback_to_unknown() {
    let preset = resolve_preset(Some("unknown-garbage"), Some("nope"));
    assert_eq!(preset.label, "Grounding");
}

// ─── Orchestrator Tests (async) ──────────────────────────

struct EchoChat;

#[async_trait(?Send)]
impl ChatServicePort for EchoChat {
    async fn start_session(&self) -> mindplus_types::Result<String> {
        Ok("wasm-session".to_string())
    }

    async fn send_message(&self, _session_id: &str, text: &str) -> mindplus_types::Result<ChatReply> {
        if text.contains("fail") {
            return Err(MindError::Timeout(25_000));
        }
        Ok(ChatReply {
            bot_message: format!("echo: {}", text),
            emotion: Some("joy".to_string()),
            stress_level: Some("low".to_string()),
            academic_stress_category: None,
            risk_level: Some("safe".to_string()),
            overall_status: Some("low_stress".to_string()),
            techniques: Some(vec!["Mindful breathing".to_string()]),
        })
    }
}

struct Anonymous;

impl IdentityPort for Anonymous {
    fn display_label(&self) -> String {
        "You".to_string()
    }
}

fn orchestrator() -> ChatOrchestrator {
    ChatOrchestrator::new(
        MindConfig::default(),
        Rc::new(EchoChat),
        Rc::new(Anonymous),
        EventBus::new(),
    )
}

#[wasm_bindgen_test]
async fn orchestrator_round_trip() {
    let orch = orchestrator();
    orch.start_session().await.unwrap();
    let bot = orch.send_message("hello").await.unwrap();

    assert_eq!(bot.text, "echo: hello");
    assert_eq!(orch.phase(), SessionPhase::Ready);
    assert_eq!(derive_status(&orch.messages()).overall_status, OverallStatus::LowStress);
}

#[wasm_bindgen_test]
async fn orchestrator_failure_appends_apology() {
    let orch = orchestrator();
    orch.start_session().await.unwrap();
    let bot = orch.send_message("please fail").await.unwrap();

    assert_eq!(bot.text, APOLOGY_TEXT);
    assert!(bot.status_metadata.is_none());
    assert_eq!(orch.message_count(), 2);
}
