//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the backend transport, the bot's command settings and the Matrix host.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            bail!("backend.base_url must not be empty");
        }
        let url = reqwest::Url::parse(&self.backend.base_url)
            .with_context(|| format!("backend.base_url is not a valid URL: {}", self.backend.base_url))?;
        if url.cannot_be_a_base() {
            bail!("backend.base_url cannot take a path: {}", self.backend.base_url);
        }
        if self.bot.marker.trim().is_empty() {
            bail!("bot.marker must not be blank");
        }
        Ok(())
    }
}

/// How the remote client spaces out its retries.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backoff {
    #[default]
    Fixed,
    Exponential,
}

/// Transport settings for the backend HTTP service.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default)]
    pub backoff: Backoff,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Delay slept after the failed attempt number `attempt` (zero based).
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let base = Duration::from_millis(self.retry_delay_ms);
        match self.backoff {
            Backoff::Fixed => base,
            Backoff::Exponential => base.saturating_mul(2u32.saturating_pow(attempt)),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            backoff: Backoff::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8001".to_string()
}
fn default_timeout_ms() -> u64 {
    30_000
}
fn default_max_retries() -> u32 {
    3
}
fn default_retry_delay_ms() -> u64 {
    2_000
}

/// Command handling settings.
#[derive(Debug, Deserialize, Clone)]
pub struct BotConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_admins")]
    pub admins: Vec<String>,
    #[serde(default = "default_attendance_literal")]
    pub attendance_literal: String,
    #[serde(default = "default_true")]
    pub reply_to_plain_text: bool,
    /// Rooms the bot answers in. Empty means every room.
    #[serde(default)]
    pub allowed_rooms: Vec<String>,
}

impl BotConfig {
    pub fn is_admin(&self, sender: &str) -> bool {
        self.admins.iter().any(|a| a == sender)
    }

    pub fn is_room_allowed(&self, room: &str) -> bool {
        self.allowed_rooms.is_empty() || self.allowed_rooms.iter().any(|r| r == room)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            admins: default_admins(),
            attendance_literal: default_attendance_literal(),
            reply_to_plain_text: true,
            allowed_rooms: Vec::new(),
        }
    }
}

fn default_marker() -> String {
    "!".to_string()
}
fn default_admins() -> Vec<String> {
    vec!["짬뽕순두부".to_string(), "채채".to_string()]
}
fn default_attendance_literal() -> String {
    "ㅊㅊ".to_string()
}
fn default_true() -> bool {
    true
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "data".to_string()
}

/// Configuration for the chat host services.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServicesConfig {
    #[serde(default)]
    pub matrix: Option<MatrixConfig>,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_yaml("{}").unwrap();
        assert_eq!(config.backend.timeout_ms, 30_000);
        assert_eq!(config.backend.max_retries, 3);
        assert_eq!(config.backend.retry_delay(2), Duration::from_millis(2_000));
        assert_eq!(config.bot.marker, "!");
        assert!(config.bot.is_admin("채채"));
        assert!(config.bot.reply_to_plain_text);
        assert!(config.services.matrix.is_none());
        assert_eq!(config.system.data_dir, "data");
    }

    #[test]
    fn exponential_backoff_doubles_per_attempt() {
        let backend = BackendConfig {
            retry_delay_ms: 100,
            backoff: Backoff::Exponential,
            ..BackendConfig::default()
        };
        assert_eq!(backend.retry_delay(0), Duration::from_millis(100));
        assert_eq!(backend.retry_delay(1), Duration::from_millis(200));
        assert_eq!(backend.retry_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn rejects_blank_marker_and_bad_url() {
        assert!(AppConfig::from_yaml("bot:\n  marker: \" \"\n").is_err());
        assert!(AppConfig::from_yaml("backend:\n  base_url: \"not a url\"\n").is_err());
    }

    #[test]
    fn rejects_base_url_without_path() {
        let err = AppConfig::from_yaml("backend:\n  base_url: \"mailto:x\"\n").unwrap_err();
        assert!(err.to_string().contains("cannot take a path"));
        assert!(AppConfig::from_yaml("backend:\n  base_url: \"http://backend:9000/api\"\n").is_ok());
    }

    #[test]
    fn room_allow_list() {
        let mut bot = BotConfig::default();
        assert!(bot.is_room_allowed("anything"));
        bot.allowed_rooms = vec!["DebugRoom".to_string()];
        assert!(bot.is_room_allowed("DebugRoom"));
        assert!(!bot.is_room_allowed("Other"));
    }

    #[test]
    fn loads_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(
            file,
            "backend:\n  base_url: http://backend:9000\n  backoff: exponential\nbot:\n  admins: [alice]\nservices:\n  matrix:\n    username: bot\n    password: pw\n    homeserver: https://matrix.example.org\n"
        )?;
        let config = AppConfig::load(file.path())?;
        assert_eq!(config.backend.base_url, "http://backend:9000");
        assert_eq!(config.backend.backoff, Backoff::Exponential);
        assert!(config.bot.is_admin("alice"));
        assert!(!config.bot.is_admin("채채"));
        assert_eq!(config.services.matrix.map(|m| m.username).as_deref(), Some("bot"));
        Ok(())
    }
}
