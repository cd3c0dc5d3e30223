use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Top-level configuration for the CareFind application.
///
/// Loaded from `~/.carefind/config.toml` by default. Every section is
/// optional and falls back to its `Default` impl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareFindConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl CareFindConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CareFindConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Conversation pacing and input limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial "typing" pause before a bot reply, in milliseconds.
    pub typing_delay_ms: u64,
    /// Pause before a booking confirmation, in milliseconds.
    pub booking_delay_ms: u64,
    /// Longest accepted utterance, in characters.
    pub max_message_chars: usize,
    /// Seed for acknowledgement phrase selection. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 2000,
            booking_delay_ms: 500,
            max_message_chars: 2000,
            seed: None,
        }
    }
}

/// Where hospital listings come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// TOML file of `[[hospitals]]` entries. `None` uses the built-in seed.
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CareFindError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = CareFindConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.typing_delay_ms, 2000);
        assert_eq!(config.chat.booking_delay_ms, 500);
        assert_eq!(config.chat.max_message_chars, 2000);
        assert!(config.chat.seed.is_none());
        assert!(config.directory.path.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[chat]
typing_delay_ms = 0
booking_delay_ms = 100
max_message_chars = 280
seed = 42

[directory]
path = "/etc/carefind/hospitals.toml"
"#;
        let file = create_temp_config(content);
        let config = CareFindConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.typing_delay_ms, 0);
        assert_eq!(config.chat.booking_delay_ms, 100);
        assert_eq!(config.chat.max_message_chars, 280);
        assert_eq!(config.chat.seed, Some(42));
        assert_eq!(
            config.directory.path.as_deref(),
            Some(Path::new("/etc/carefind/hospitals.toml"))
        );
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
seed = 7
"#;
        let file = create_temp_config(content);
        let config = CareFindConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.seed, Some(7));
        // Remaining fields use defaults
        assert_eq!(config.chat.typing_delay_ms, 2000);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = CareFindConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.max_message_chars, 2000);
        assert!(config.directory.path.is_none());
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("[chat\ntyping_delay_ms = ");
        let err = CareFindConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CareFindError::Config(_)));
    }

    #[test]
    fn test_config_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CareFindConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CareFindError::Io(_)));
    }
}
