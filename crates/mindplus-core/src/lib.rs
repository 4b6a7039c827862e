//! MindPlus core — chat session orchestration, wellbeing status, calm-session
//! timing and preset resolution. No platform dependencies: I/O goes through
//! the traits in [`ports`].

pub mod animation;
pub mod calm;
pub mod checkin;
pub mod coping;
pub mod event_bus;
pub mod heatmap;
pub mod orchestrator;
pub mod ports;
pub mod preset;
pub mod status;
pub mod techniques;
pub mod timer;
