// src/models/mod.rs

//! Domain models for the watcher.

mod config;
mod credentials;
mod record;
mod summary;

// Re-export all public types
pub use config::{Config, NotifierConfig, SourceConfig, StorageConfig};
pub use credentials::{BOT_TOKEN_VAR, CHAT_ID_VAR, Credentials};
pub use record::{Record, SeenSet};
pub use summary::RunSummary;
