//! Main application configuration
//!
//! This module defines the configuration structures for the exporter,
//! including environment variable and TOML file loading and validation.

use crate::config::RatingConfig;
use crate::error::LoaderError;
use crate::export::ExportOptions;
use crate::loader::DEFAULT_TABLES;
use crate::pipeline::CleanOptions;
use crate::types::Tour;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub cleaning: CleanOptions,
    pub export: ExportOptions,
    pub rating: RatingConfig,
    pub logging: LoggingSettings,
}

/// Where the archive lives and what to read from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Path to the `.mdb` archive
    pub mdb_file: Option<PathBuf>,
    /// Archive password
    #[serde(skip_serializing)]
    pub password: String,
    /// Which tour's tables to clean
    pub tour: Tour,
    /// Tables loaded up front
    pub tables: Vec<String>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            mdb_file: None,
            password: String::new(),
            tour: Tour::Atp,
            tables: DEFAULT_TABLES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {} value: {}", name, value))
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_toml(&text)?;
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Parse TOML text without environment overrides or validation
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration file")
    }

    fn apply_env(&mut self) -> Result<()> {
        // Source settings
        if let Ok(path) = env::var("MDB_FILE") {
            self.source.mdb_file = Some(PathBuf::from(path));
        }
        if let Ok(password) = env::var("MDB_PASSWORD") {
            self.source.password = password;
        }
        if let Ok(tour) = env::var("TOUR") {
            self.source.tour = parse_var("TOUR", &tour)?;
        }

        // Cleaning settings
        if let Ok(kind) = env::var("MATCH_KIND") {
            self.cleaning.kind = parse_var("MATCH_KIND", &kind)?;
        }
        if let Ok(guess) = env::var("GUESS_DATES") {
            self.cleaning.guess_dates = parse_var("GUESS_DATES", &guess)?;
        }
        if let Ok(surfaces) = env::var("ADD_SURFACES") {
            self.cleaning.add_surfaces = parse_var("ADD_SURFACES", &surfaces)?;
        }

        // Export settings
        if let Ok(sample) = env::var("SAMPLE_GAMES") {
            self.export.sample_games = parse_var("SAMPLE_GAMES", &sample)?;
        }
        if let Ok(scramble) = env::var("SCRAMBLE") {
            self.export.scramble = parse_var("SCRAMBLE", &scramble)?;
        }
        if let Ok(seed) = env::var("SCRAMBLE_SEED") {
            self.export.seed = parse_var("SCRAMBLE_SEED", &seed)?;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }
}

fn invalid(message: String) -> anyhow::Error {
    LoaderError::ConfigurationError { message }.into()
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.logging.level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(invalid(format!("Invalid log level: {}", config.logging.level))),
    }

    if let Some(path) = &config.source.mdb_file {
        if path.as_os_str().is_empty() {
            return Err(invalid("MDB file path cannot be empty".to_string()));
        }
    }
    if config.source.tables.iter().any(|t| t.trim().is_empty()) {
        return Err(invalid("Table names cannot be empty".to_string()));
    }

    // Validate rating settings
    if config.rating.k_factor <= 0.0 {
        return Err(invalid("Elo k-factor must be positive".to_string()));
    }
    if !config.rating.initial_rating.is_finite() {
        return Err(invalid("Initial rating must be finite".to_string()));
    }

    Ok(())
}
