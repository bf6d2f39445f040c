//! Application context — unified state passed to every command handler.
//!
//! Adding a new cross-cutting concern (e.g. a new output flag) requires only
//! one field change here; command signatures stay the same.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::HostprepConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::fs::LocalFs;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags passed from the top-level CLI.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Process runner for provisioning steps and probes.
    pub runner: TokioCommandRunner,
    /// Configuration persistence.
    pub config_store: YamlConfigStore,
    /// Filesystem probe.
    pub fs: LocalFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        // Under --json our stdout carries the report; tool output goes to stderr.
        let runner = if flags.json {
            TokioCommandRunner::default().with_stdout_to_stderr()
        } else {
            TokioCommandRunner::default()
        };

        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            runner,
            config_store: YamlConfigStore::from_env(),
            fs: LocalFs,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }

    /// Load the user configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn config(&self) -> Result<HostprepConfig> {
        self.config_store.load()
    }
}
