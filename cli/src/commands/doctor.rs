//! `hostprep doctor` — check provisioning prerequisites without changing anything.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::doctor::run_doctor;
use crate::domain::health::collect_issues;
use crate::output::reporter::SilentReporter;
use crate::output::{TerminalReporter, progress};

/// Run the doctor command. Exits non-zero when any issue is found.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or rendering fails.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let config = app.config()?;
    let pip = config.provision.pip.as_str();

    let checks = if app.is_json() {
        run_doctor(&app.runner, &SilentReporter, &app.fs, pip).await?
    } else if app.output.show_progress() {
        let pb = progress::spinner("checking prerequisites...");
        let checks = run_doctor(&app.runner, &SilentReporter, &app.fs, pip).await?;
        progress::finish_ok(&pb, "prerequisites checked");
        checks
    } else {
        let reporter = TerminalReporter::new(&app.output);
        run_doctor(&app.runner, &reporter, &app.fs, pip).await?
    };

    let issues = collect_issues(&checks);
    app.renderer().render_doctor(&checks, &issues)?;

    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
