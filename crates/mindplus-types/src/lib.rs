pub mod message;
pub mod event;
pub mod calm;
pub mod coping;
pub mod config;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::MindError;
pub type Result<T> = std::result::Result<T, MindError>;
