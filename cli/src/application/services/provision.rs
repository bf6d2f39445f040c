//! Application service — the provisioning use-case.
//!
//! Runs the plan one step at a time through the injected `CommandRunner`.
//! Children inherit stdio; nothing here captures or rewrites tool output.

use std::process::ExitStatus;

use crate::application::ports::{CommandRunner, ProgressReporter};
use crate::domain::plan::Step;
use crate::domain::error::ProcessError;
use crate::domain::report::{
    COMMAND_NOT_FOUND, ErrorPolicy, GENERAL_FAILURE, RunReport, SIGNAL_EXIT_BASE, StepOutcome,
    StepStatus,
};

/// Execute `plan` in order under `policy`.
///
/// Never returns early: every step ends up in the report, either attempted or
/// `Skipped`. A step whose program cannot be spawned is recorded with exit
/// code 127, as a shell would for "command not found"; one whose status cannot
/// be collected is recorded with exit code 1.
pub async fn run_provision(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    plan: Vec<Step>,
    policy: ErrorPolicy,
) -> RunReport {
    let mut report = RunReport::new(policy);
    let mut halted = false;

    for step in plan {
        if !report.should_continue() {
            if !halted {
                reporter.warn("halting after failure; remaining steps skipped");
                halted = true;
            }
            tracing::debug!(step = %step.kind, "skipped");
            report.outcomes.push(StepOutcome {
                step,
                status: StepStatus::Skipped,
            });
            continue;
        }

        let status = run_step(runner, reporter, &step).await;
        report.outcomes.push(StepOutcome { step, status });
    }

    report
}

async fn run_step(
    runner: &impl CommandRunner,
    reporter: &impl ProgressReporter,
    step: &Step,
) -> StepStatus {
    reporter.step(&format!("{}: {}", step.kind.label(), step.command_line()));

    let args: Vec<&str> = step.args.iter().map(String::as_str).collect();
    tracing::debug!(step = %step.kind, program = %step.program, args = ?step.args, "spawning");

    let status = match runner.run_status(&step.program, &args).await {
        Ok(exit) => StepStatus::from_code(exit_code(exit)),
        Err(e) => {
            tracing::debug!(error = ?e, "no exit status");
            reporter.error(&e.to_string());
            StepStatus::Failed {
                code: failure_code(&e),
            }
        }
    };
    tracing::debug!(step = %step.kind, ?status, "finished");

    match status {
        StepStatus::Succeeded => reporter.success(step.kind.label()),
        StepStatus::Failed { code } => {
            reporter.warn(&format!("{} failed (exit {code})", step.kind));
        }
        StepStatus::Skipped => {}
    }
    status
}

/// Exit code recorded for a step that produced no status of its own.
#[must_use]
pub fn failure_code(error: &ProcessError) -> i32 {
    match error {
        ProcessError::Spawn { .. } => COMMAND_NOT_FOUND,
        ProcessError::Wait { .. } => GENERAL_FAILURE,
    }
}

/// Shell-style exit code: the process code, or 128 + signal when killed.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }
    GENERAL_FAILURE
}
