//! Startup configuration: a JSON `MindConfig` saved in `localStorage`,
//! falling back to the built-in defaults.

use mindplus_types::config::MindConfig;

pub const CONFIG_STORAGE_KEY: &str = "mindplus:config";

/// Parse the stored config. Missing or invalid config never blocks startup.
pub fn config_from_stored(stored: Option<&str>) -> MindConfig {
    let Some(json) = stored.filter(|s| !s.trim().is_empty()) else {
        log::info!("No stored config, using defaults");
        return MindConfig::default();
    };
    match MindConfig::from_json(json) {
        Ok(config) => {
            log::info!("Config restored from storage");
            config
        }
        Err(e) => {
            log::warn!("Ignoring stored config: {}", e);
            MindConfig::default()
        }
    }
}
