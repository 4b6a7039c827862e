#[cfg(test)]
mod tests {
    use crate::chat_api::{ChatApiClient, StartReply};
    use crate::emotion_api::{PredictReply, StrategyReply};
    use crate::http::error_message;
    use crate::identity::{SessionIdentity, ANONYMOUS_LABEL};
    use crate::ticker::IntervalTicker;
    use mindplus_core::ports::{IdentityPort, TickerPort};
    use mindplus_types::calm::Severity;
    use mindplus_types::config::ChatServiceConfig;
    use mindplus_types::MindError;

    // ─── Error Message Tests ─────────────────────────────────

    #[test]
    fn test_error_message_prefers_detail() {
        let body = r#"{"detail": "Session not found"}"#;
        assert_eq!(error_message(404, body), "Session not found");
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(502, "<html>Bad gateway</html>"), "Request failed (502)");
        assert_eq!(error_message(500, r#"{"error": "x"}"#), "Request failed (500)");
        assert_eq!(error_message(500, r#"{"detail": ""}"#), "Request failed (500)");
        assert_eq!(error_message(500, r#"{"detail": null}"#), "Request failed (500)");
        assert_eq!(error_message(500, ""), "Request failed (500)");
    }

    #[test]
    fn test_error_message_structured_detail() {
        let body = r#"{"detail": [{"loc": ["body", "text"], "msg": "field required"}]}"#;
        let message = error_message(422, body);
        assert!(message.contains("field required"));
    }

    // ─── Chat Client Tests ───────────────────────────────────

    #[test]
    fn test_start_reply_session_id() {
        let reply: StartReply = serde_json::from_str(r#"{"session_id": "abc"}"#).unwrap();
        assert_eq!(reply.into_session_id().unwrap(), "abc");
    }

    #[test]
    fn test_start_reply_missing_session_id() {
        let reply: StartReply = serde_json::from_str("{}").unwrap();
        assert!(matches!(reply.into_session_id(), Err(MindError::Other(_))));

        let blank: StartReply = serde_json::from_str(r#"{"session_id": "  "}"#).unwrap();
        assert!(blank.into_session_id().is_err());
    }

    #[test]
    fn test_chat_client_endpoints() {
        let client = ChatApiClient::new(ChatServiceConfig {
            base_url: "http://10.0.2.2:8000/".to_string(),
            request_timeout_ms: 25_000,
        });
        assert_eq!(client.config().endpoint("/chat/start"), "http://10.0.2.2:8000/chat/start");
        assert_eq!(client.config().request_timeout_ms, 25_000);
    }

    // ─── Emotion Client Tests ────────────────────────────────

    #[test]
    fn test_predict_reply_defaults() {
        let reply: PredictReply = serde_json::from_str("{}").unwrap();
        let prediction = reply.into_prediction();
        assert_eq!(prediction.emotion, "unknown");
        assert_eq!(prediction.confidence, 0.0);
        assert!(prediction.keywords.is_empty());
    }

    #[test]
    fn test_predict_reply_full() {
        let reply: PredictReply = serde_json::from_str(
            r#"{"emotion": "fear", "confidence": 0.91, "keywords": ["exam"], "model": "v2"}"#,
        )
        .unwrap();
        let prediction = reply.into_prediction();
        assert_eq!(prediction.emotion, "fear");
        assert_eq!(prediction.keywords, vec!["exam".to_string()]);
    }

    #[test]
    fn test_strategy_reply_falls_back_to_request() {
        let reply: StrategyReply = serde_json::from_str(r#"{"strategy": null}"#).unwrap();
        let strategy = reply.into_strategy("anger", 0.42);
        assert_eq!(strategy.emotion, "anger");
        assert_eq!(strategy.confidence, 0.42);
        assert_eq!(strategy.severity, Severity::Low);
        assert!(strategy.strategy.is_none());
    }

    #[test]
    fn test_strategy_reply_severity() {
        let reply: StrategyReply = serde_json::from_str(
            r#"{"emotion": "fear", "confidence": 0.8, "severity": "HIGH", "strategy": "Breathe"}"#,
        )
        .unwrap();
        let strategy = reply.into_strategy("sadness", 0.1);
        assert_eq!(strategy.emotion, "fear");
        assert_eq!(strategy.severity, Severity::High);
        assert_eq!(strategy.strategy.as_deref(), Some("Breathe"));
    }

    // ─── Identity Tests ──────────────────────────────────────

    #[test]
    fn test_identity_anonymous_label() {
        let identity = SessionIdentity::anonymous();
        assert_eq!(identity.display_label(), ANONYMOUS_LABEL);
        assert_eq!(SessionIdentity::new(Some("   ".to_string())).display_label(), "You");
    }

    #[test]
    fn test_identity_email_label() {
        let identity = SessionIdentity::new(Some(" sam@uni.edu ".to_string()));
        assert_eq!(identity.email(), Some("sam@uni.edu"));
        assert_eq!(identity.display_label(), "sam@uni.edu");
        assert!(SessionIdentity::new(None).email().is_none());
    }

    // ─── Ticker Tests ────────────────────────────────────────

    #[test]
    fn test_ticker_starts_inactive() {
        let mut ticker = IntervalTicker::new();
        assert!(!ticker.is_active());
        ticker.stop();
        assert!(!ticker.is_active());
    }
}
