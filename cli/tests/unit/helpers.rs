//! Shared test helpers: a recording `CommandRunner`, fake ports, and output
//! constructors.

#![allow(dead_code, clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::process::{ExitStatus, Output};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Result, bail};
use hostprep::application::ports::{CommandRunner, FileProbe, ProgressReporter};
use hostprep::domain::ProcessError;

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── MockCommandRunner ────────────────────────────────────────────────────────

/// Scripted reply for one `run_status` call.
#[derive(Debug, Clone, Copy)]
pub enum StatusReply {
    Exit(i32),
    /// The program is not on `PATH`.
    SpawnError,
    /// The program started but its status could not be collected.
    WaitError,
}

/// A `CommandRunner` that records every `(program, args)` call.
///
/// `run_status` pops scripted replies in order (defaulting to exit 0 once the
/// script is exhausted). Captured runs answer from a per-program table; an
/// unknown program behaves like a spawn failure.
#[derive(Clone, Default)]
pub struct MockCommandRunner {
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
    statuses: Arc<Mutex<VecDeque<StatusReply>>>,
    outputs: Arc<Mutex<HashMap<String, Output>>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `run_status` replies, consumed one per call.
    pub fn with_statuses(self, replies: &[StatusReply]) -> Self {
        self.statuses
            .lock()
            .expect("mutex poisoned")
            .extend(replies.iter().copied());
        self
    }

    /// Canned captured output for `program`.
    pub fn with_output(self, program: &str, output: Output) -> Self {
        self.outputs
            .lock()
            .expect("mutex poisoned")
            .insert(program.to_string(), output);
        self
    }

    /// Snapshot of all recorded calls.
    pub fn recorded_calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    /// Recorded calls rendered as shell-style lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.recorded_calls()
            .into_iter()
            .map(|(p, a)| std::iter::once(p).chain(a).collect::<Vec<_>>().join(" "))
            .collect()
    }

    fn record(&self, program: &str, args: &[&str]) {
        self.calls.lock().expect("mutex poisoned").push((
            program.to_owned(),
            args.iter().map(|s| (*s).to_string()).collect(),
        ));
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, Duration::from_secs(30))
            .await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<Output> {
        self.record(program, args);
        match self.outputs.lock().expect("mutex poisoned").get(program) {
            Some(out) => Ok(out.clone()),
            None => bail!("failed to spawn {program}"),
        }
    }

    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus, ProcessError> {
        self.record(program, args);
        let reply = self
            .statuses
            .lock()
            .expect("mutex poisoned")
            .pop_front()
            .unwrap_or(StatusReply::Exit(0));
        match reply {
            StatusReply::Exit(code) => Ok(exit_status(code)),
            StatusReply::SpawnError => Err(ProcessError::Spawn {
                program: program.to_string(),
                source: std::io::ErrorKind::NotFound.into(),
            }),
            StatusReply::WaitError => Err(ProcessError::Wait {
                program: program.to_string(),
                source: std::io::ErrorKind::Interrupted.into(),
            }),
        }
    }
}

// ── Fake ports ───────────────────────────────────────────────────────────────

/// Reporter that discards every event.
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
    fn error(&self, _: &str) {}
}

/// `FileProbe` that reports a fixed answer for every path.
pub struct FakeFiles(pub bool);

impl FileProbe for FakeFiles {
    fn is_file(&self, _: &Path) -> bool {
        self.0
    }
}
