use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ReportError, Result};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Deposit, withdrawal and NAV summary for IBKR activity report exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ibkr-analyzer",
    about = "Deposit, withdrawal and NAV summary for IBKR activity report exports",
    version
)]
pub struct Settings {
    /// Configuration profile name, resolved to `config/<profile>.json`
    #[arg(default_value = "default")]
    pub profile: String,

    /// Folder containing the activity report exports
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Logging level
    #[arg(long, value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: Option<String>,

    /// Display theme
    #[arg(long, value_parser = ["light", "dark", "classic", "auto"])]
    pub theme: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

// ── ProfileConfig ──────────────────────────────────────────────────────────────

/// Per-profile configuration stored at `config/<profile>.json`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProfileConfig {
    /// Environment name recorded in the profile, e.g. `"PROD"`.
    pub environment: String,
    /// Logging level used when no CLI value is given.
    pub log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            environment: "PROD".to_string(),
            log_level: "INFO".to_string(),
            data_dir: None,
            theme: None,
        }
    }
}

impl ProfileConfig {
    /// Return the profile file path rooted at `base_dir`.
    pub fn config_path_in(base_dir: &Path, profile: &str) -> PathBuf {
        base_dir.join("config").join(format!("{}.json", profile))
    }

    /// Load the profile from `path`. When no file exists, a default profile
    /// is written there and returned. A present but unparseable file is an
    /// error.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ReportError::Config(format!("profile file {} is invalid: {}", path.display(), e))
        })
    }

    /// Atomically write the profile to `path`, creating parent directories
    /// if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("failed to serialize profile: {}", e)))?;

        // Write to a temp file then rename for atomicity.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }
}

// ── RunConfig ──────────────────────────────────────────────────────────────────

/// Fully-resolved runtime configuration after merging CLI and profile
/// values. CLI always wins; the profile fills the gaps; hard defaults fill
/// the rest.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub profile: String,
    pub environment: String,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub theme: String,
}

impl Settings {
    /// Load the selected profile from `base_dir` and merge it with the CLI
    /// arguments into a [`RunConfig`].
    pub fn into_run_config(self, base_dir: &Path) -> Result<RunConfig> {
        let path = ProfileConfig::config_path_in(base_dir, &self.profile);
        let profile = ProfileConfig::load_or_create(&path)?;

        let mut log_level = self.log_level.unwrap_or(profile.log_level);
        if self.debug {
            log_level = "DEBUG".to_string();
        }

        Ok(RunConfig {
            profile: self.profile,
            environment: profile.environment,
            log_level,
            data_dir: self
                .data_dir
                .or(profile.data_dir)
                .unwrap_or_else(|| base_dir.join("data")),
            theme: self
                .theme
                .or(profile.theme)
                .unwrap_or_else(|| "auto".to_string()),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
