//! Application service — configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::{HostprepConfig, apply_config_value};
use crate::domain::report::ErrorPolicy;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if the config file exists but is unreadable or invalid.
pub fn load_config(store: &impl ConfigStore) -> Result<HostprepConfig> {
    store.load()
}

/// Validate, apply, and persist a single setting. Returns the updated config.
///
/// # Errors
///
/// Returns an error if the key/value is invalid or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<HostprepConfig> {
    let mut config = store.load()?;
    apply_config_value(&mut config, key, value)?;
    store.save(&config)?;
    Ok(config)
}

/// Resolve the effective error policy: CLI override wins over the config file.
#[must_use]
pub fn effective_policy(config: &HostprepConfig, cli_override: Option<ErrorPolicy>) -> ErrorPolicy {
    cli_override.unwrap_or(config.provision.on_error)
}
