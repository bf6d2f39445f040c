//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed document on
//! stdout. Failures use the error-object schema from `format_error`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::config::HostprepConfig;
use crate::domain::health::DoctorChecks;
use crate::domain::plan::Step;
use crate::domain::report::{ErrorPolicy, RunReport};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders domain types as JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        emit(&serde_json::json!({ "version": version }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_plan(&self, steps: &[Step], policy: ErrorPolicy) -> Result<()> {
        emit(&serde_json::json!({ "policy": policy, "steps": steps }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_report(&self, report: &RunReport) -> Result<()> {
        emit(&serde_json::json!({
            "success": !report.has_failures(),
            "exit_code": report.exit_code(),
            "policy": report.policy,
            "outcomes": report.outcomes,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) -> Result<()> {
        emit(&serde_json::json!({
            "status": if issues.is_empty() { "healthy" } else { "unhealthy" },
            "checks": checks,
            "issues": issues,
        }))
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &HostprepConfig, path: &Path) -> Result<()> {
        emit(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }
}

fn emit(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}
