//! CLI argument definitions for the CareFind application.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

use carefind_core::CareFindConfig;

/// CareFind — describe your symptoms, get hospital suggestions, book a visit.
#[derive(Parser, Debug)]
#[command(name = "carefind", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// TOML file of hospital listings (replaces the built-in directory).
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Seed for reply phrasing, for reproducible sessions.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Reply immediately instead of simulating typing and booking delays.
    #[arg(long = "no-delay")]
    pub no_delay: bool,

    /// Emit one JSON object per render event instead of formatted text.
    #[arg(long = "json")]
    pub json: bool,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > CAREFIND_CONFIG env var > platform default (~/.carefind/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("CAREFIND_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// True when the config path came from `--config` or `CAREFIND_CONFIG`
    /// rather than the platform default.
    pub fn config_path_is_explicit(&self) -> bool {
        self.config.is_some() || std::env::var_os("CAREFIND_CONFIG").is_some()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &CareFindConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }

    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut CareFindConfig) {
        if let Some(ref path) = self.directory {
            config.directory.path = Some(path.clone());
        }
        if self.seed.is_some() {
            config.chat.seed = self.seed;
        }
        if self.no_delay {
            config.chat.typing_delay_ms = 0;
            config.chat.booking_delay_ms = 0;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".carefind").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".carefind").join("config.toml");
    }
    PathBuf::from("config.toml")
}
