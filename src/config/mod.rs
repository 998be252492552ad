//! Configuration management for the games exporter
//!
//! This module handles configuration loading from environment variables or a
//! TOML file, validation, and default values.

pub mod app;
pub mod rating;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, LoggingSettings, SourceSettings};
pub use rating::RatingConfig;
