//! `hostprep run` — provision the host.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::config_service;
use crate::application::services::provision::run_provision;
use crate::commands::PolicyArgs;
use crate::domain::plan::provisioning_plan;
use crate::output::TerminalReporter;
use crate::output::reporter::SilentReporter;

/// Arguments for the run command.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Run the provisioning steps and exit with the last attempted step's status.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the JSON report
/// cannot be rendered. Step failures are not errors; they set the exit code.
pub async fn run(app: &AppContext, args: &RunArgs) -> Result<ExitCode> {
    let config = app.config()?;
    let policy = config_service::effective_policy(&config, args.policy.cli_override());
    let plan = provisioning_plan(&config.provision.pip);

    tracing::info!(%policy, pip = %config.provision.pip, "starting provisioning");

    let report = if app.is_json() {
        run_provision(&app.runner, &SilentReporter, plan, policy).await
    } else {
        let reporter = TerminalReporter::new(&app.output);
        run_provision(&app.runner, &reporter, plan, policy).await
    };

    tracing::info!(exit_code = report.exit_code(), "provisioning finished");
    app.renderer().render_report(&report)?;
    Ok(ExitCode::from(report.exit_byte()))
}
