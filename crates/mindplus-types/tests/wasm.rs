//! WASM-target tests for mindplus-types.
//!
//! Runs message, config and error checks under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use mindplus_types::calm::*;
use mindplus_types::config::*;
use mindplus_types::message::*;
use mindplus_types::MindError;

// ─── Message Tests ───────────────────────────────────────

#[wasm_bindgen_test]
fn user_message_has_timestamp() {
    // chrono's wasmbind feature must supply the clock here
    let msg = ChatMessage::user("1-user", "You", "hello");
    assert!(!msg.created_at.is_empty());
    assert_eq!(msg.sender, Role::User);
}

#[wasm_bindgen_test]
fn chat_reply_parses_status() {
    let reply: ChatReply = serde_json::from_str(
        r#"{"bot_message": "ok", "overall_status": "critical", "techniques": []}"#,
    )
    .unwrap();
    let (_, meta) = reply.into_parts();
    assert_eq!(meta.overall_status, OverallStatus::Critical);
}

// ─── Calm Tests ──────────────────────────────────────────

#[wasm_bindgen_test]
fn severity_defaults_to_low() {
    assert_eq!(Severity::normalize(Some("garbage")), Severity::Low);
}

// ─── Config Tests ────────────────────────────────────────

#[wasm_bindgen_test]
fn default_config_validates() {
    assert!(MindConfig::default().validate().is_ok());
}

#[wasm_bindgen_test]
fn config_roundtrip() {
    let json = serde_json::to_string(&MindConfig::default()).unwrap();
    let back = MindConfig::from_json(&json).unwrap();
    assert_eq!(back, MindConfig::default());
}

// ─── Error Tests ─────────────────────────────────────────

#[wasm_bindgen_test]
fn error_display() {
    assert_eq!(MindError::SendInFlight.to_string(), "A message is already being sent");
}
