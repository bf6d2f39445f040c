//! Domain types and validators for hostprep configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::plan::DEFAULT_PIP_PROGRAM;
use crate::domain::report::ErrorPolicy;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &["provision.on_error", "provision.pip"];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.hostprep/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HostprepConfig {
    /// Provisioning settings.
    #[serde(default)]
    pub provision: ProvisionConfig,
}

/// Provisioning settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionConfig {
    /// What to do after a failing step: `halt` (default) or `continue`.
    #[serde(default)]
    pub on_error: ErrorPolicy,
    /// Python package manager executable, e.g. `pip3` or `/opt/venv/bin/pip`.
    #[serde(default = "default_pip")]
    pub pip: String,
}

impl Default for ProvisionConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::default(),
            pip: default_pip(),
        }
    }
}

fn default_pip() -> String {
    DEFAULT_PIP_PROGRAM.to_string()
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    match key {
        "provision.on_error" if value.parse::<ErrorPolicy>().is_err() => {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: ErrorPolicy::VARIANTS.join(", "),
            }
            .into())
        }
        "provision.pip" if value.is_empty() || value.chars().any(char::is_whitespace) => {
            Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                valid: "a program name or path without whitespace".to_string(),
            }
            .into())
        }
        _ => Ok(()),
    }
}

/// Apply a validated key/value pair to `config`.
///
/// # Errors
///
/// Returns an error if the key or value fails validation.
pub fn apply_config_value(config: &mut HostprepConfig, key: &str, value: &str) -> Result<()> {
    validate_config_key(key)?;
    validate_config_value(key, value)?;
    match key {
        "provision.on_error" => config.provision.on_error = value.parse()?,
        "provision.pip" => config.provision.pip = value.to_string(),
        _ => anyhow::bail!("Unknown setting: {key}"),
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
