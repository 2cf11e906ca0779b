//! Configuration file handling

use super::ChainInfo;
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Probe settings
    #[serde(default)]
    pub probe: ProbeSettings,

    /// Extra or override chains
    #[serde(default)]
    pub chains: Vec<ChainInfo>,
}

/// Probe settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Per-probe timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Max probes in flight (0 = all at once)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Result rows shown before expanding
    #[serde(default = "default_preview_size")]
    pub preview_size: usize,
}

fn default_timeout() -> u64 {
    5
}

fn default_concurrency() -> usize {
    0
}

fn default_preview_size() -> usize {
    4
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            concurrency: default_concurrency(),
            preview_size: default_preview_size(),
        }
    }
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chainpulse")
            .join("config.toml")
    }

    /// Load from default path
    pub fn load_default() -> Result<Option<Self>> {
        let path = Self::default_path();
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    /// Load from a specific path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Save to a specific path
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::WriteError(format!("Failed to create directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::WriteError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Save to default path
    pub fn save_default(&self) -> Result<()> {
        self.save(&Self::default_path())
    }

    /// Commented template written by `config init`
    pub fn template() -> &'static str {
        r#"# chainpulse configuration

[probe]
# Per-probe timeout in seconds.
timeout_secs = 5
# Max probes in flight (0 = all at once).
concurrency = 0
# Result rows shown before expanding.
preview_size = 4

# Extra chains, or overrides for built-in ones (matched by name).
#
# [[chains]]
# name = "localnet"
# display_name = "Local Devnet"
# id = 31337
# public_rpcs = ["http://127.0.0.1:8545"]
#
#   [[chains.tokens]]
#   symbol = "WETH"
#   price = 2500.0
#   total = 12.5e18
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[probe]
timeout_secs = 2
concurrency = 8

[[chains]]
name = "localnet"
display_name = "Local Devnet"
id = 31337
public_rpcs = ["http://127.0.0.1:8545"]

[[chains.tokens]]
symbol = "WETH"
price = 2500.0
total = 12.5e18
"#;

        let config: ConfigFile = toml::from_str(toml).unwrap();
        assert_eq!(config.probe.timeout_secs, 2);
        assert_eq!(config.probe.concurrency, 8);
        // Unset fields fall back to defaults
        assert_eq!(config.probe.preview_size, 4);
        assert_eq!(config.chains.len(), 1);
        assert_eq!(config.chains[0].name, "localnet");
        assert_eq!(config.chains[0].public_rpcs.len(), 1);
        assert_eq!(config.chains[0].tokens[0].symbol, "WETH");
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(config.probe.timeout_secs, 5);
        assert_eq!(config.probe.concurrency, 0);
        assert_eq!(config.probe.preview_size, 4);
        assert!(config.chains.is_empty());
    }

    #[test]
    fn test_default_path() {
        let path = ConfigFile::default_path();
        assert!(path.to_string_lossy().contains("chainpulse"));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = ConfigFile::default();
        config.probe.timeout_secs = 9;
        config
            .chains
            .push(ChainInfo::new("localnet", 31337).with_rpc("http://127.0.0.1:8545"));

        config.save(&path).unwrap();
        let loaded = ConfigFile::load(&path).unwrap();
        assert_eq!(loaded.probe.timeout_secs, 9);
        assert_eq!(loaded.chains[0].id, 31337);
    }

    #[test]
    fn test_template_parses() {
        let config: ConfigFile = toml::from_str(ConfigFile::template()).unwrap();
        assert_eq!(config.probe.preview_size, 4);
        assert!(config.chains.is_empty());
    }
}
