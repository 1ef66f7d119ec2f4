//! # Settings Module
//!
//! ## Purpose
//! Keeps the start-up configuration of the kinetics explorer in one JSON file
//! (`kinetics_explorer.json` in the working directory) instead of constants
//! scattered over the front ends.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "initial": { "temperature": 298.0, "concentration_a": 1.0,
//!                "concentration_b": 1.0, "catalyst": false, "order": "Second" },
//!   "bounds": { "temperature": { "min": 273.0, "max": 373.0 },
//!               "concentration": { "min": 0.1, "max": 3.0 } },
//!   "sweeps": { "temperature":   { "start": 273.0, "stop": 373.0, "step": 5.0 },
//!               "concentration": { "start": 0.1,   "stop": 3.0,   "step": 0.1 },
//!               "arrhenius":     { "start": 273.0, "stop": 373.0, "step": 10.0 } },
//!   "log_level": "info"
//! }
//! ```
//! A missing file means defaults. A file that exists but cannot be parsed is
//! an error, so a typo is not silently replaced by defaults.

use crate::Kinetics::arrhenius::ReactionParameters;
use crate::Kinetics::explorer::ParameterBounds;
use crate::Kinetics::kinetics_errors::KineticsError;
use crate::Kinetics::series::SweepConfig;
use log::{LevelFilter, SetLoggerError, info};
use simplelog::{ColorChoice, Config, SimpleLogger, TermLogger, TerminalMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "kinetics_explorer.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// snapshot the explorer starts from
    pub initial: ReactionParameters,
    pub bounds: ParameterBounds,
    pub sweeps: SweepConfig,
    /// off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            initial: ReactionParameters::default(),
            bounds: ParameterBounds::default(),
            sweeps: SweepConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Parsed `log_level`. An unknown name gives `Err` with the message to
    /// log once a logger is installed; the caller falls back to info.
    pub fn level_filter(&self) -> Result<LevelFilter, String> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| format!("Unknown log level '{}', using info", self.log_level))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerKind {
    Terminal,
    Plain,
}

/// Installs the colored terminal logger, or the plain one when no terminal
/// is available. Fails only if a logger is already installed.
pub fn init_logger(level: LevelFilter) -> Result<LoggerKind, SetLoggerError> {
    if TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .is_ok()
    {
        return Ok(LoggerKind::Terminal);
    }
    SimpleLogger::init(level, Config::default())?;
    Ok(LoggerKind::Plain)
}

/// Loads and saves [`ExplorerConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: ExplorerConfig,
    config_file: PathBuf,
}

impl ConfigManager {
    /// Loads `kinetics_explorer.json` from the working directory, or defaults.
    pub fn new() -> Result<Self, KineticsError> {
        Self::with_config_file(DEFAULT_CONFIG_FILE)
    }

    pub fn with_config_file(config_file: impl AsRef<Path>) -> Result<Self, KineticsError> {
        let config_file = config_file.as_ref().to_path_buf();
        let config = Self::load_config(&config_file)?;
        Ok(Self {
            config,
            config_file,
        })
    }

    fn load_config(config_file: &Path) -> Result<ExplorerConfig, KineticsError> {
        if config_file.exists() {
            let content = fs::read_to_string(config_file)?;
            let config: ExplorerConfig = serde_json::from_str(&content)?;
            info!("configuration loaded from {}", config_file.display());
            Ok(config)
        } else {
            info!(
                "no configuration file {}, using defaults",
                config_file.display()
            );
            Ok(ExplorerConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), KineticsError> {
        let content = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_file, content)?;
        info!("configuration saved to {}", self.config_file.display());
        Ok(())
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Remember a new start snapshot (e.g. the current explorer state).
    pub fn set_initial(&mut self, params: ReactionParameters) -> Result<(), KineticsError> {
        self.config.bounds.check(&params)?;
        self.config.initial = params;
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) {
        self.config = ExplorerConfig::default();
    }
}
