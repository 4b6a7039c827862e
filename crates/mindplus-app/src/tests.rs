#[cfg(test)]
mod tests {
    use crate::settings::config_from_stored;
    use mindplus_types::config::MindConfig;

    // ─── Stored Config Tests ─────────────────────────────────

    #[test]
    fn test_missing_config_uses_defaults() {
        assert_eq!(config_from_stored(None), MindConfig::default());
        assert_eq!(config_from_stored(Some("  ")), MindConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = config_from_stored(Some(r#"{"chat": {"base_url": "http://10.0.2.2:8000"}}"#));
        assert_eq!(config.chat.base_url, "http://10.0.2.2:8000");
        assert_eq!(config.chat.request_timeout_ms, 25_000);
        assert_eq!(config.calm.duration_seconds, 60);
        assert_eq!(config.bot_label, "MindPlus Bot");
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        assert_eq!(config_from_stored(Some("{not json")), MindConfig::default());
        let zero_timer = r#"{"calm": {"duration_seconds": 0}}"#;
        assert_eq!(config_from_stored(Some(zero_timer)), MindConfig::default());
    }
}
