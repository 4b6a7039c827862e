#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::calm::*;
    use crate::coping::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = ChatMessage::user("1-user", "sam@uni.edu", "Hello");
        assert_eq!(msg.sender, Role::User);
        assert_eq!(msg.text, "Hello");
        assert_eq!(msg.label, "sam@uni.edu");
        assert!(msg.status_metadata.is_none());
        assert!(!msg.is_bot());
        assert!(!msg.created_at.is_empty());
    }

    #[test]
    fn test_message_bot_carries_metadata() {
        let meta = StatusMetadata {
            emotion: Some("fear".to_string()),
            overall_status: OverallStatus::HighStress,
            ..Default::default()
        };
        let msg = ChatMessage::bot("2-bot", "MindPlus Bot", "I hear you", meta.clone());
        assert!(msg.is_bot());
        assert_eq!(msg.status_metadata, Some(meta));
    }

    #[test]
    fn test_message_bot_notice_has_no_metadata() {
        let msg = ChatMessage::bot_notice("3-error", "MindPlus Bot", "Try again");
        assert!(msg.is_bot());
        assert!(msg.status_metadata.is_none());
    }

    #[test]
    fn test_message_without_metadata_skips_field() {
        let msg = ChatMessage::bot_notice("3-error", "MindPlus Bot", "Try again");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("status_metadata"));

        let back: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), r#""bot""#);
    }

    #[test]
    fn test_overall_status_wire_names() {
        let json = serde_json::to_string(&OverallStatus::HighStress).unwrap();
        assert_eq!(json, r#""high_stress""#);
        let status: OverallStatus = serde_json::from_str(r#""moderate_stress""#).unwrap();
        assert_eq!(status, OverallStatus::ModerateStress);
    }

    #[test]
    fn test_overall_status_from_label() {
        assert_eq!(OverallStatus::from_label("critical"), OverallStatus::Critical);
        assert_eq!(OverallStatus::from_label(" LOW_STRESS "), OverallStatus::LowStress);
        assert_eq!(OverallStatus::from_label("panic"), OverallStatus::Idle);
        assert_eq!(OverallStatus::from_label(""), OverallStatus::Idle);
    }

    #[test]
    fn test_overall_status_labels_match_parse() {
        for status in OverallStatus::all() {
            assert_eq!(OverallStatus::from_label(status.as_str()), *status);
        }
        assert_eq!(OverallStatus::default(), OverallStatus::Idle);
    }

    #[test]
    fn test_chat_reply_into_parts() {
        let json = r#"{
            "bot_message": "Exams can feel huge.",
            "emotion": "anxiety",
            "stress_level": "high",
            "academic_stress_category": "academic_stress_high",
            "risk_level": "safe",
            "overall_status": "high_stress",
            "techniques": ["Box breathing (4-4-4-4)"]
        }"#;
        let reply: ChatReply = serde_json::from_str(json).unwrap();
        let (text, meta) = reply.into_parts();
        assert_eq!(text, "Exams can feel huge.");
        assert_eq!(meta.emotion.as_deref(), Some("anxiety"));
        assert_eq!(meta.risk_level.as_deref(), Some("safe"));
        assert_eq!(meta.overall_status, OverallStatus::HighStress);
        assert_eq!(meta.techniques, vec!["Box breathing (4-4-4-4)"]);
    }

    #[test]
    fn test_chat_reply_missing_fields_default() {
        let reply: ChatReply = serde_json::from_str(r#"{"bot_message": "hi", "emotion": ""}"#).unwrap();
        let (_, meta) = reply.into_parts();
        assert!(meta.emotion.is_none());
        assert!(meta.stress_level.is_none());
        assert_eq!(meta.overall_status, OverallStatus::Idle);
        assert!(meta.techniques.is_empty());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serialization() {
        let event = MindEvent::SessionStateChanged { phase: SessionPhase::Ready };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SessionStateChanged"));
        assert!(json.contains("Ready"));
    }

    #[test]
    fn test_timer_event_carries_state() {
        let event = MindEvent::TimerStateChanged {
            state: TimerState {
                total_duration_seconds: 60,
                remaining_seconds: 42,
                running: true,
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("42"));
    }

    // ─── Calm Tests ──────────────────────────────────────────

    #[test]
    fn test_severity_normalize() {
        assert_eq!(Severity::normalize(Some("HIGH ")), Severity::High);
        assert_eq!(Severity::normalize(Some("medium")), Severity::Medium);
        assert_eq!(Severity::normalize(Some("low")), Severity::Low);
        assert_eq!(Severity::normalize(Some("extreme")), Severity::Low);
        assert_eq!(Severity::normalize(None), Severity::Low);
    }

    #[test]
    fn test_timer_state_progress() {
        let state = TimerState {
            total_duration_seconds: 60,
            remaining_seconds: 15,
            running: true,
        };
        assert!((state.progress_fraction() - 0.25).abs() < f32::EPSILON);
        assert!(!state.is_finished());
    }

    #[test]
    fn test_timer_state_progress_zero_total() {
        let state = TimerState {
            total_duration_seconds: 0,
            remaining_seconds: 0,
            running: false,
        };
        assert_eq!(state.progress_fraction(), 0.0);
    }

    // ─── Coping Tests ────────────────────────────────────────

    #[test]
    fn test_checkin_answer_optional_fields() {
        let answer: CheckInAnswer =
            serde_json::from_str(r#"{"question": "How was class?", "answer": "fine"}"#).unwrap();
        assert!(answer.emotion.is_none());
        assert!(answer.confidence.is_none());
        assert!(answer.keywords.is_empty());
    }

    #[test]
    fn test_coping_strategy_severity_wire() {
        let strategy: CopingStrategy = serde_json::from_str(
            r#"{"emotion": "fear", "confidence": 0.8, "severity": "high", "strategy": null}"#,
        )
        .unwrap();
        assert_eq!(strategy.severity, Severity::High);
        assert!(strategy.strategy.is_none());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = MindConfig::default();
        assert_eq!(config.chat.base_url, "http://localhost:8000");
        assert_eq!(config.chat.request_timeout_ms, 25_000);
        assert_eq!(config.emotion.base_url, "http://localhost:8001");
        assert_eq!(config.calm.duration_seconds, 60);
        assert_eq!(config.calm.tick_interval_ms, 1000);
        assert_eq!(config.bot_label, "MindPlus Bot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_partial_json_fills_defaults() {
        let config = MindConfig::from_json(r#"{"chat": {"base_url": "http://10.0.2.2:8000/"}}"#).unwrap();
        assert_eq!(config.chat.base_url, "http://10.0.2.2:8000/");
        assert_eq!(config.chat.request_timeout_ms, 25_000);
        assert_eq!(config.calm.duration_seconds, 60);
    }

    #[test]
    fn test_config_rejects_zero_duration() {
        let result = MindConfig::from_json(r#"{"calm": {"duration_seconds": 0}}"#);
        assert!(matches!(result, Err(MindError::Config(_))));
    }

    #[test]
    fn test_config_rejects_empty_url() {
        let mut config = MindConfig::default();
        config.emotion.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let chat = ChatServiceConfig {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout_ms: 1000,
        };
        assert_eq!(chat.endpoint("/chat/start"), "http://localhost:8000/chat/start");
        assert_eq!(normalize_base_url("http://host:1//"), "http://host:1");
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_phase_flags() {
        assert!(SessionPhase::Ready.can_send());
        assert!(!SessionPhase::Sending.can_send());
        assert!(!SessionPhase::Failed("down".to_string()).can_send());
        assert!(SessionPhase::Starting.is_busy());
        assert!(SessionPhase::Sending.is_busy());
        assert!(!SessionPhase::Uninitialized.is_busy());
    }

    #[test]
    fn test_status_snapshot_default_is_idle() {
        let snapshot = StatusSnapshot::default();
        assert_eq!(snapshot.overall_status, OverallStatus::Idle);
        assert!(snapshot.emotion.is_none());
        assert!(snapshot.risk_level.is_none());
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(MindError::InvalidDuration(-5).to_string(), "Invalid timer duration: -5s");
        assert_eq!(MindError::Timeout(25000).to_string(), "Timeout after 25000ms");
        assert_eq!(
            MindError::Http { status: 503, message: "busy".to_string() }.to_string(),
            "HTTP 503: busy"
        );
        assert_eq!(
            MindError::SessionStart("refused".to_string()).to_string(),
            "Failed to start chat session: refused"
        );
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: MindError = serde_err.into();
        assert!(matches!(err, MindError::Serialization(_)));
    }
}
