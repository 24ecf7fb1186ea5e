//! Configuration module for dunemate
//!
//! Lookup order:
//! 1. Environment variables (DUNEMATE_*)
//! 2. Project config (<workspace root>/dunemate.toml)
//! 3. User config (~/.config/dunemate/dunemate.toml)
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DunemateError, DunemateResult};
use crate::workspace::AliasKind;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dune: DuneConfig,

    #[serde(default)]
    pub alias: AliasConfig,
}

/// External tool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DuneConfig {
    /// Executable used for promotion subcommands
    #[serde(default = "default_dune_bin")]
    pub bin: String,
}

impl Default for DuneConfig {
    fn default() -> Self {
        Self {
            bin: default_dune_bin(),
        }
    }
}

fn default_dune_bin() -> String {
    "dune".to_string()
}

/// Alias registration configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AliasConfig {
    /// Alias kind preselected in the picker and used non-interactively
    #[serde(default = "default_alias_name")]
    pub default_name: AliasKind,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            default_name: default_alias_name(),
        }
    }
}

fn default_alias_name() -> AliasKind {
    AliasKind::Runtest
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DunemateResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DunemateResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| DunemateError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(workspace_root: Option<&Path>) -> Self {
        if let Some(root) = workspace_root {
            let project_config = root.join("dunemate.toml");
            if project_config.exists() {
                if let Ok(config) = Self::load(&project_config) {
                    return config.with_env_overrides();
                }
            }
        }

        if let Some(user_config_dir) = dirs::config_dir() {
            let user_config = user_config_dir.join("dunemate/dunemate.toml");
            if user_config.exists() {
                if let Ok(config) = Self::load(&user_config) {
                    return config.with_env_overrides();
                }
            }
        }

        Self::default().with_env_overrides()
    }

    /// Apply environment variable overrides (DUNEMATE_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(bin) = std::env::var("DUNEMATE_DUNE_BIN") {
            if !bin.trim().is_empty() {
                self.dune.bin = bin;
            }
        }

        if let Ok(name) = std::env::var("DUNEMATE_DEFAULT_ALIAS") {
            if let Ok(kind) = name.trim().parse::<AliasKind>() {
                self.alias.default_name = kind;
            }
        }

        self
    }
}
