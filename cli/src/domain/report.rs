//! Run outcomes and the error-propagation policy.
//!
//! Pure types — the application layer translates process exit statuses into
//! these before any decision is made.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::PolicyError;
use crate::domain::plan::{Step, StepKind};

/// Exit code reported when a program could not be spawned.
pub const COMMAND_NOT_FOUND: i32 = 127;

/// Exit code for a step that started but whose status could not be read.
pub const GENERAL_FAILURE: i32 = 1;

/// Offset added to a terminating signal number.
pub const SIGNAL_EXIT_BASE: i32 = 128;

// ── Error policy ─────────────────────────────────────────────────────────────

/// What happens after a step exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first failing step; later steps are skipped.
    #[default]
    Halt,
    /// Attempt every step regardless of earlier failures.
    Continue,
}

impl ErrorPolicy {
    pub const VARIANTS: &[&str] = &["halt", "continue"];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::Continue => "continue",
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "halt" => Ok(Self::Halt),
            "continue" => Ok(Self::Continue),
            other => Err(PolicyError::Unknown(other.to_string())),
        }
    }
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcomes ─────────────────────────────────────────────────────────────────

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Failed { code: i32 },
    Skipped,
}

impl StepStatus {
    /// Map an exit code to a status.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Self::Succeeded
        } else {
            Self::Failed { code }
        }
    }

    /// Exit code for attempted steps; `None` when skipped.
    #[must_use]
    pub fn code(self) -> Option<i32> {
        match self {
            Self::Succeeded => Some(0),
            Self::Failed { code } => Some(code),
            Self::Skipped => None,
        }
    }
}

/// A step paired with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    #[serde(flatten)]
    pub step: Step,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Summary of a full provisioning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub policy: ErrorPolicy,
    pub outcomes: Vec<StepOutcome>,
}

impl RunReport {
    #[must_use]
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            policy,
            outcomes: Vec::with_capacity(StepKind::ALL.len()),
        }
    }

    /// Whether the next step may still be attempted.
    #[must_use]
    pub fn should_continue(&self) -> bool {
        match self.policy {
            ErrorPolicy::Continue => true,
            ErrorPolicy::Halt => !self.has_failures(),
        }
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.outcomes
            .iter()
            .any(|o| matches!(o.status, StepStatus::Failed { .. }))
    }

    /// Steps that exited non-zero, in order.
    #[must_use]
    pub fn failures(&self) -> Vec<&StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, StepStatus::Failed { .. }))
            .collect()
    }

    /// Status of the last attempted step, like a shell script's own exit status.
    ///
    /// Under `Halt` that is the first failure; under `Continue` it is the final
    /// step even when an earlier one failed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.outcomes
            .iter()
            .rev()
            .find_map(|o| o.status.code())
            .unwrap_or(0)
    }

    /// `exit_code()` narrowed to a process exit byte; out-of-range codes become 1.
    #[must_use]
    pub fn exit_byte(&self) -> u8 {
        u8::try_from(self.exit_code()).unwrap_or(1)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
