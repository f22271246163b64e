// Core modules
pub mod config;
pub mod state;
pub mod streaming;
pub mod types;
pub mod web;

// Re-exports
pub use state::AppState;
pub use types::StreamEvent;
