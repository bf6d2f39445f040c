//! Unit tests for the doctor service.

#![allow(clippy::expect_used)]

use hostprep::application::services::doctor::run_doctor;
use hostprep::domain::health::collect_issues;

use crate::helpers::{FakeFiles, MockCommandRunner, NullReporter, err_output, ok_output};

fn healthy_runner() -> MockCommandRunner {
    MockCommandRunner::new()
        .with_output("apt-get", ok_output(b"apt 2.7.14 (amd64)\n"))
        .with_output(
            "pip",
            ok_output(b"pip 24.0 from /usr/lib/python3/dist-packages/pip (python 3.12)\n"),
        )
        .with_output("id", ok_output(b"0\n"))
}

#[tokio::test]
async fn test_doctor_healthy_host_has_no_issues() {
    let runner = healthy_runner();
    let checks = run_doctor(&runner, &NullReporter, &FakeFiles(true), "pip")
        .await
        .expect("doctor");

    assert!(checks.tools.apt_found);
    assert_eq!(checks.tools.apt_version.as_deref(), Some("2.7.14"));
    assert!(checks.tools.pip_found);
    assert_eq!(checks.tools.pip_version.as_deref(), Some("24.0"));
    assert!(checks.host.privileged);
    assert!(checks.host.requirements_present);
    assert!(collect_issues(&checks).is_empty());
}

#[tokio::test]
async fn test_doctor_probes_are_read_only() {
    let runner = healthy_runner();
    run_doctor(&runner, &NullReporter, &FakeFiles(true), "pip")
        .await
        .expect("doctor");

    assert_eq!(
        runner.command_lines(),
        ["apt-get --version", "pip --version", "id -u"]
    );
}

#[tokio::test]
async fn test_doctor_missing_pip_program_is_reported() {
    let runner = MockCommandRunner::new()
        .with_output("apt-get", ok_output(b"apt 2.7.14 (amd64)\n"))
        .with_output("id", ok_output(b"0\n"));
    let checks = run_doctor(&runner, &NullReporter, &FakeFiles(true), "pip3")
        .await
        .expect("doctor");

    assert!(!checks.tools.pip_found);
    assert_eq!(checks.tools.pip_program, "pip3");
    let issues = collect_issues(&checks);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("pip3"));
}

#[tokio::test]
async fn test_doctor_version_probe_nonzero_exit_means_not_found() {
    let runner = healthy_runner().with_output("apt-get", err_output(1, b"broken"));
    let checks = run_doctor(&runner, &NullReporter, &FakeFiles(true), "pip")
        .await
        .expect("doctor");

    assert!(!checks.tools.apt_found);
    assert!(checks.tools.apt_version.is_none());
}

#[tokio::test]
async fn test_doctor_unprivileged_and_missing_manifest() {
    let runner = healthy_runner().with_output("id", ok_output(b"1000\n"));
    let checks = run_doctor(&runner, &NullReporter, &FakeFiles(false), "pip")
        .await
        .expect("doctor");

    assert!(!checks.host.privileged);
    assert!(!checks.host.requirements_present);
    assert_eq!(collect_issues(&checks).len(), 2);
}
