//! The provisioning plan: which commands run, in which order.
//!
//! Pure functions only — no I/O, no async, no process spawning.

use serde::Serialize;

// ── Constants ────────────────────────────────────────────────────────────────

/// OS package manager used for index refresh and library install.
pub const APT_PROGRAM: &str = "apt-get";

/// Default Python package manager executable.
pub const DEFAULT_PIP_PROGRAM: &str = "pip";

/// Native shared libraries required by the PDF/image stack (OpenGL, GLib, X11).
pub const OS_PACKAGES: &[&str] = &[
    "libgl1-mesa-glx",
    "libglib2.0-0",
    "libsm6",
    "libxext6",
    "libxrender-dev",
];

/// Python dependency manifest, resolved relative to the working directory.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Package that is always discarded and reinstalled.
///
/// `PyMuPDF` provides the `fitz` module; an unrelated `fitz` distribution on
/// PyPI can shadow it after a bulk install.
pub const FORCE_REINSTALL_PACKAGE: &str = "PyMuPDF";

// ── Types ────────────────────────────────────────────────────────────────────

/// The four provisioning steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    RefreshIndex,
    InstallOsLibraries,
    InstallRequirements,
    ForceReinstall,
}

impl StepKind {
    /// All steps in the order they must run.
    pub const ALL: [StepKind; 4] = [
        StepKind::RefreshIndex,
        StepKind::InstallOsLibraries,
        StepKind::InstallRequirements,
        StepKind::ForceReinstall,
    ];

    /// Short human label used in progress output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::RefreshIndex => "refreshing package index",
            Self::InstallOsLibraries => "installing OS libraries",
            Self::InstallRequirements => "installing Python requirements",
            Self::ForceReinstall => "force-reinstalling PyMuPDF",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RefreshIndex => "refresh-index",
            Self::InstallOsLibraries => "install-os-libraries",
            Self::InstallRequirements => "install-requirements",
            Self::ForceReinstall => "force-reinstall",
        };
        f.write_str(s)
    }
}

/// A single external command in the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    #[serde(rename = "step")]
    pub kind: StepKind,
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    fn new(kind: StepKind, program: &str, args: &[&str]) -> Self {
        Self {
            kind,
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Render as a single shell-style command line.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ── Plan construction ────────────────────────────────────────────────────────

/// Build the ordered provisioning plan.
///
/// `pip` is the Python package manager executable; everything else is fixed.
#[must_use]
pub fn provisioning_plan(pip: &str) -> Vec<Step> {
    let mut install = vec!["install", "-y"];
    install.extend_from_slice(OS_PACKAGES);

    vec![
        Step::new(StepKind::RefreshIndex, APT_PROGRAM, &["update"]),
        Step::new(StepKind::InstallOsLibraries, APT_PROGRAM, &install),
        Step::new(
            StepKind::InstallRequirements,
            pip,
            &["install", "--no-cache-dir", "-r", REQUIREMENTS_FILE],
        ),
        Step::new(
            StepKind::ForceReinstall,
            pip,
            &["install", "--force-reinstall", FORCE_REINSTALL_PACKAGE],
        ),
    ]
}

// ── Unit tests ───────────────────────────────────────────────────────────────
