// src/lib.rs
pub mod alerts;
pub mod analytics;
pub mod chart;
pub mod data;
pub mod error;
pub mod format;
pub mod handlers;
pub mod market;
pub mod metrics;
pub mod models;
pub mod session;
pub mod state;
pub mod store;

// Re-export commonly used items
pub use error::ApiError;
pub use models::*;
pub use state::AppState;
