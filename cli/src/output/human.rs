//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::config::HostprepConfig;
use crate::domain::health::DoctorChecks;
use crate::domain::plan::Step;
use crate::domain::report::{ErrorPolicy, RunReport, StepStatus};
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("hostprep {version}");
    }

    /// Render the numbered command list `run` would execute.
    ///
    /// The plan is the primary output of `plan`, so it prints even when quiet.
    pub fn render_plan(&self, steps: &[Step], policy: ErrorPolicy) {
        if !self.ctx.quiet {
            println!(
                "  {}",
                format!("Provisioning plan (on error: {policy})").style(self.ctx.styles.header)
            );
            println!();
        }
        for (i, step) in steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step.command_line());
        }
    }

    /// Render the end-of-run summary on stderr.
    pub fn render_report(&self, report: &RunReport) {
        let failures = report.failures();
        if failures.is_empty() {
            self.ctx.success("host provisioned");
            return;
        }
        for outcome in failures {
            if let StepStatus::Failed { code } = outcome.status {
                self.ctx.error(&format!(
                    "{} failed with exit code {code}: {}",
                    outcome.step.kind,
                    outcome.step.command_line()
                ));
            }
        }
        let skipped = report
            .outcomes
            .iter()
            .filter(|o| o.status == StepStatus::Skipped)
            .count();
        if skipped > 0 {
            self.ctx.info(&format!(
                "{skipped} step(s) skipped. Re-run with --keep-going to attempt them anyway."
            ));
        }
    }

    /// Render doctor results and the derived issue list.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) {
        let s = &self.ctx.styles;
        println!();
        println!("  {}", "Package managers:".style(s.header));
        self.check_line(
            checks.tools.apt_found,
            &format!(
                "apt-get {}",
                checks.tools.apt_version.as_deref().unwrap_or("not found")
            ),
        );
        self.check_line(
            checks.tools.pip_found,
            &format!(
                "{} {}",
                checks.tools.pip_program,
                checks.tools.pip_version.as_deref().unwrap_or("not found")
            ),
        );
        println!();
        println!("  {}", "Host:".style(s.header));
        self.check_line(checks.host.privileged, "running as root");
        self.check_line(checks.host.requirements_present, "requirements.txt present");
        println!();

        if issues.is_empty() {
            println!("  {} Ready to provision.", "✓".style(s.success));
        } else {
            println!(
                "  {} {} issue(s) found:",
                "✗".style(s.error),
                issues.len()
            );
            for issue in issues {
                println!("    - {issue}");
            }
        }
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &HostprepConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<22} {}", "provision.on_error:", config.provision.on_error);
        println!("  {:<22} {}", "provision.pip:", config.provision.pip);
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        println!(
            "    {:<18} {}",
            format!("{CONFIG_ENV}:"),
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set)".to_string())
        );
        println!(
            "    {:<18} {}",
            "NO_COLOR:",
            std::env::var("NO_COLOR").unwrap_or_else(|_| "(not set)".to_string())
        );
    }

    fn check_line(&self, ok: bool, label: &str) {
        if ok {
            println!("    {} {label}", "✓".style(self.ctx.styles.success));
        } else {
            println!("    {} {label}", "✗".style(self.ctx.styles.error));
        }
    }
}
