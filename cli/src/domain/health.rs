//! Health check domain types and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use serde::Serialize;

use crate::domain::plan::REQUIREMENTS_FILE;

// ── Types ─────────────────────────────────────────────────────────────────────

/// All check categories returned by the doctor command.
#[derive(Debug, Serialize)]
pub struct DoctorChecks {
    /// Package manager availability.
    pub tools: ToolChecks,
    /// Host preconditions.
    pub host: HostChecks,
}

/// Whether the two package managers are reachable on PATH.
#[derive(Debug, Serialize)]
pub struct ToolChecks {
    /// Whether `apt-get` responded to `--version`.
    pub apt_found: bool,
    /// Reported `apt` version (e.g. `"2.7.14"`), if found.
    pub apt_version: Option<String>,
    /// The pip executable that was probed.
    pub pip_program: String,
    /// Whether pip responded to `--version`.
    pub pip_found: bool,
    /// Reported pip version (e.g. `"24.0"`), if found.
    pub pip_version: Option<String>,
}

/// Host-level preconditions.
#[derive(Debug, Serialize)]
pub struct HostChecks {
    /// Whether the effective user id is 0.
    pub privileged: bool,
    /// Whether `requirements.txt` exists in the working directory.
    pub requirements_present: bool,
}

// ── Parsing helpers ───────────────────────────────────────────────────────────

/// Extract the version token from a `--version` banner.
///
/// Both `apt 2.7.14 (amd64)` and `pip 24.0 from /usr/lib/... (python 3.12)`
/// carry the version as the second whitespace-separated token of line one.
#[must_use]
pub fn parse_version_banner(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .map(str::to_owned)
}

/// Interpret `id -u` output.
#[must_use]
pub fn is_root_uid(stdout: &str) -> bool {
    stdout.trim() == "0"
}

// ── Diagnosis ─────────────────────────────────────────────────────────────────

/// Turn the checks into human-readable issues. Empty means healthy.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.tools.apt_found {
        issues.push("apt-get is not installed or not on PATH".to_string());
    }
    if !checks.tools.pip_found {
        issues.push(format!(
            "{} is not installed or not on PATH",
            checks.tools.pip_program
        ));
    }
    if !checks.host.privileged {
        issues.push("Not running as root (apt-get install will fail)".to_string());
    }
    if !checks.host.requirements_present {
        issues.push(format!("{REQUIREMENTS_FILE} not found in working directory"));
    }
    issues
}

// ── Unit tests ────────────────────────────────────────────────────────────────
