//! Command implementations

pub mod config;
pub mod doctor;
pub mod plan;
pub mod run;
pub mod version;

use clap::Args;

use crate::domain::report::ErrorPolicy;

/// Error-propagation flags shared by `run` and `plan`.
#[derive(Args, Debug, Default)]
pub struct PolicyArgs {
    /// What to do after a step fails: halt or continue [default: from config, else halt]
    #[arg(long, value_name = "POLICY", conflicts_with = "keep_going")]
    pub on_error: Option<ErrorPolicy>,

    /// Attempt every step even after a failure (same as --on-error continue)
    #[arg(long)]
    pub keep_going: bool,
}

impl PolicyArgs {
    /// The policy requested on the command line, if any.
    #[must_use]
    pub fn cli_override(&self) -> Option<ErrorPolicy> {
        if self.keep_going {
            Some(ErrorPolicy::Continue)
        } else {
            self.on_error
        }
    }
}
