//! `hostprep plan` — print the commands `run` would execute. Spawns nothing.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::commands::PolicyArgs;
use crate::domain::plan::provisioning_plan;

/// Arguments for the plan command.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Render the provisioning plan under the effective configuration.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(app: &AppContext, args: &PlanArgs) -> Result<ExitCode> {
    let config = app.config()?;
    let policy = config_service::effective_policy(&config, args.policy.cli_override());
    let plan = provisioning_plan(&config.provision.pip);
    app.renderer().render_plan(&plan, policy)?;
    Ok(ExitCode::SUCCESS)
}
