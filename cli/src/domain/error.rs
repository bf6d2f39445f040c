//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Policy errors ─────────────────────────────────────────────────────────────

/// Errors parsing an error-propagation policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown error policy '{0}'. Valid policies: halt, continue")]
    Unknown(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}

// ── Process errors ────────────────────────────────────────────────────────────

/// Why a provisioning step produced no exit status.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started (usually: not on `PATH`).
    #[error("{program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The program started but waiting on it failed.
    #[error("waiting for {program}: {source}")]
    Wait {
        program: String,
        source: std::io::Error,
    },
}
