//! Property-based tests for plan construction and run outcomes.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use hostprep::application::services::provision::run_provision;
use hostprep::domain::plan::{FORCE_REINSTALL_PACKAGE, StepKind, provisioning_plan};
use hostprep::domain::report::{ErrorPolicy, StepStatus};
use proptest::prelude::*;

use crate::helpers::{MockCommandRunner, NullReporter, StatusReply};

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(fut)
}

proptest! {
    /// Whatever pip executable is configured, the last step targets exactly
    /// one package with the force flag, and the manifest step disables caching.
    #[test]
    fn prop_python_steps_keep_their_flags(pip in "[a-z][a-z0-9./_-]{0,20}") {
        let plan = provisioning_plan(&pip);
        prop_assert_eq!(plan.len(), 4);

        let reinstall = &plan[3];
        prop_assert_eq!(reinstall.kind, StepKind::ForceReinstall);
        prop_assert_eq!(&reinstall.program, &pip);
        prop_assert!(reinstall.args.contains(&"--force-reinstall".to_string()));
        let targets: Vec<_> = reinstall
            .args
            .iter()
            .filter(|a| !a.starts_with('-') && a.as_str() != "install")
            .collect();
        prop_assert_eq!(targets, vec![FORCE_REINSTALL_PACKAGE]);

        prop_assert!(plan[2].args.contains(&"--no-cache-dir".to_string()));
    }

    /// Under `halt`, nothing is spawned after the first failure and the exit
    /// code is that failure's code. Under `continue`, all four run and the
    /// exit code is the final step's.
    #[test]
    fn prop_policy_controls_attempts_and_exit_code(
        codes in proptest::collection::vec(0i32..4, 4),
        halt in any::<bool>(),
    ) {
        let policy = if halt { ErrorPolicy::Halt } else { ErrorPolicy::Continue };
        let replies: Vec<_> = codes.iter().map(|c| StatusReply::Exit(*c)).collect();
        let runner = MockCommandRunner::new().with_statuses(&replies);

        let report = block_on(run_provision(&runner, &NullReporter, provisioning_plan("pip"), policy));
        prop_assert_eq!(report.outcomes.len(), 4);

        let first_failure = codes.iter().position(|c| *c != 0);
        match (policy, first_failure) {
            (ErrorPolicy::Halt, Some(i)) => {
                prop_assert_eq!(runner.recorded_calls().len(), i + 1);
                prop_assert_eq!(report.exit_code(), codes[i]);
                for o in &report.outcomes[i + 1..] {
                    prop_assert_eq!(o.status, StepStatus::Skipped);
                }
            }
            _ => {
                prop_assert_eq!(runner.recorded_calls().len(), 4);
                prop_assert_eq!(report.exit_code(), codes[3]);
            }
        }
    }
}
