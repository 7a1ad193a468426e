//! Client configuration.
//!
//! The only setting is the base URL of the notes REST API. It is resolved from
//! an explicit value, then the `NOTES_API_URL` environment variable, then the
//! persisted config file, then the built-in default.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::{normalize_base_url, normalize_text_option};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const ENV_API_BASE_URL: &str = "NOTES_API_URL";

const CONFIG_DIR_NAME: &str = "notes";
const CONFIG_FILE_NAME: &str = "config.json";

/// Persisted client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default = "default_config_version")]
    pub version: u32,
    #[serde(default)]
    pub api_base_url: Option<String>,
}

const fn default_config_version() -> u32 {
    1
}

impl ConfigFile {
    /// Default location under the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::Config("Failed to resolve config directory".to_string()))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                version: default_config_version(),
                api_base_url: None,
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config = serde_json::from_str::<Self>(&raw).map_err(|error| {
            Error::Config(format!(
                "Failed to parse config at {}: {}",
                path.display(),
                error
            ))
        })?;
        config.api_base_url = normalize_text_option(config.api_base_url.take());
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

/// Where the resolved base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit,
    Environment,
    File,
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "command line",
            Self::Environment => ENV_API_BASE_URL,
            Self::File => "config file",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub source: ConfigSource,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            source: ConfigSource::Default,
        }
    }
}

impl ClientConfig {
    /// Resolve against the process environment and the default config file
    pub fn resolve(explicit: Option<String>) -> Result<Self> {
        let file = match ConfigFile::default_path() {
            Ok(path) => ConfigFile::load_from_path(&path)?,
            Err(error) => {
                tracing::debug!("Skipping config file: {}", error);
                ConfigFile::default()
            }
        };
        Self::resolve_with(explicit, |key| std::env::var(key).ok(), &file)
    }

    /// Resolve with an injectable environment lookup.
    ///
    /// The first non-blank candidate wins and must be a valid HTTP base URL.
    pub fn resolve_with<F>(explicit: Option<String>, env_lookup: F, file: &ConfigFile) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = [
            (normalize_text_option(explicit), ConfigSource::Explicit),
            (
                normalize_text_option(env_lookup(ENV_API_BASE_URL)),
                ConfigSource::Environment,
            ),
            (normalize_text_option(file.api_base_url.clone()), ConfigSource::File),
        ];

        for (value, source) in candidates {
            if let Some(value) = value {
                let api_base_url = normalize_base_url(&value)
                    .map_err(|error| Error::Config(format!("{error} (from {source})")))?;
                return Ok(Self {
                    api_base_url,
                    source,
                });
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn file_with(url: Option<&str>) -> ConfigFile {
        ConfigFile {
            version: 1,
            api_base_url: url.map(ToString::to_string),
        }
    }

    #[test]
    fn resolve_falls_back_to_default() {
        let config = ClientConfig::resolve_with(None, |_| None, &file_with(None)).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn resolve_prefers_explicit_then_env_then_file() {
        let file = file_with(Some("http://file.example.com"));
        let env = |key: &str| {
            (key == ENV_API_BASE_URL).then(|| "http://env.example.com/".to_string())
        };

        let explicit =
            ClientConfig::resolve_with(Some("https://cli.example.com".into()), env, &file)
                .unwrap();
        assert_eq!(explicit.api_base_url, "https://cli.example.com");
        assert_eq!(explicit.source, ConfigSource::Explicit);

        let from_env = ClientConfig::resolve_with(None, env, &file).unwrap();
        assert_eq!(from_env.api_base_url, "http://env.example.com");
        assert_eq!(from_env.source, ConfigSource::Environment);

        let from_file = ClientConfig::resolve_with(Some("  ".into()), |_| None, &file).unwrap();
        assert_eq!(from_file.api_base_url, "http://file.example.com");
        assert_eq!(from_file.source, ConfigSource::File);
    }

    #[test]
    fn resolve_rejects_invalid_url() {
        let error = ClientConfig::resolve_with(
            None,
            |_| Some("localhost:3000".to_string()),
            &file_with(None),
        )
        .unwrap_err();
        assert!(error.to_string().contains(ENV_API_BASE_URL));
    }

    #[test]
    fn config_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let missing = ConfigFile::load_from_path(&path).unwrap();
        assert_eq!(missing.api_base_url, None);
        assert_eq!(missing.version, 1);

        file_with(Some(" http://saved.example.com "))
            .save_to_path(&path)
            .unwrap();
        let loaded = ConfigFile::load_from_path(&path).unwrap();
        assert_eq!(loaded.api_base_url.as_deref(), Some("http://saved.example.com"));
    }

    #[test]
    fn config_file_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"version":1,"token":"x"}"#).unwrap();

        let error = ConfigFile::load_from_path(&path).unwrap_err();
        assert!(matches!(error, Error::Config(_)));
    }
}
