//! Application service — host prerequisite diagnostics.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits. Nothing here mutates the
//! host.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::{CommandRunner, FileProbe, ProgressReporter};
use crate::domain::health::{
    DoctorChecks, HostChecks, ToolChecks, is_root_uid, parse_version_banner,
};
use crate::domain::plan::{APT_PROGRAM, REQUIREMENTS_FILE};

/// Upper bound for each read-only probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Run all probes and return the aggregated checks.
///
/// # Errors
///
/// Currently infallible in practice: probe failures are recorded as negative
/// checks rather than propagated.
pub async fn run_doctor(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    files: &impl FileProbe,
    pip: &str,
) -> Result<DoctorChecks> {
    reporter.step("checking package managers...");
    let (apt_found, apt_version) = probe_version(runner, APT_PROGRAM).await;
    let (pip_found, pip_version) = probe_version(runner, pip).await;

    reporter.step("checking host...");
    let privileged = probe_privilege(runner).await;
    let requirements_present = files.is_file(Path::new(REQUIREMENTS_FILE));

    reporter.success("diagnostics complete");

    Ok(DoctorChecks {
        tools: ToolChecks {
            apt_found,
            apt_version,
            pip_program: pip.to_string(),
            pip_found,
            pip_version,
        },
        host: HostChecks {
            privileged,
            requirements_present,
        },
    })
}

// ── Internal probes ───────────────────────────────────────────────────────────

async fn probe_version(runner: &impl CommandRunner, program: &str) -> (bool, Option<String>) {
    match runner
        .run_with_timeout(program, &["--version"], PROBE_TIMEOUT)
        .await
    {
        Ok(output) if output.status.success() => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            (true, parse_version_banner(&stdout))
        }
        Ok(output) => {
            tracing::debug!(program, status = ?output.status, "version probe exited non-zero");
            (false, None)
        }
        Err(e) => {
            tracing::debug!(program, error = %e, "version probe failed");
            (false, None)
        }
    }
}

async fn probe_privilege(runner: &impl CommandRunner) -> bool {
    match runner.run_with_timeout("id", &["-u"], PROBE_TIMEOUT).await {
        Ok(output) if output.status.success() => {
            is_root_uid(&String::from_utf8_lossy(&output.stdout))
        }
        _ => false,
    }
}
