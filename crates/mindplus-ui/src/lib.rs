//! MindPlus UI — egui panels rendering a projection of the core state.

pub mod panels;
pub mod state;
pub mod theme;
