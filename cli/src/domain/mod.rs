//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod plan;
pub mod report;

pub use config::{HostprepConfig, ProvisionConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, PolicyError, ProcessError};
pub use health::{DoctorChecks, HostChecks, ToolChecks, collect_issues};
pub use plan::{Step, StepKind, provisioning_plan};
pub use report::{ErrorPolicy, RunReport, StepOutcome, StepStatus};
