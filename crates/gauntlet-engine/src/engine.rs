//! Execution engine - the per-module lifecycle state machine
//!
//! One call to [`run`] executes a single module: module setup, the
//! per-test loop over the selected indices in ascending order, module
//! teardown, and the summary. Outcome counters are local to the call;
//! nothing is shared between runs.

use crate::catalog::Catalog;
use crate::error::ModuleError;
use crate::mask::SelectionMask;
use crate::report::{HookStage, Reporter, TestStatus};
use serde::Serialize;

/// The five per-run tallies.
///
/// `total` counts attempted tests and always equals
/// `passed + failed + known_issue + disabled` at summary time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub known_issue: usize,
    pub disabled: usize,
}

impl Outcome {
    /// True when no invoked test failed. Disabled and known-issue
    /// skips do not count against cleanliness.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }

    fn checked(self) -> Self {
        debug_assert_eq!(
            self.total,
            self.passed + self.failed + self.known_issue + self.disabled,
            "outcome counters out of balance"
        );
        self
    }
}

/// Run one module with an optional selection mask.
///
/// `mask: None` runs every test; a mask restricts execution to its set
/// bits. Indices reported to the sink are always the 1-based catalog
/// positions, so running only test 3 of 10 still labels it "3".
///
/// Returns the final counters, or a [`ModuleError`] when module setup
/// failed or a selected record had no function bound. On either error
/// the module teardown hook is not invoked.
pub fn run(
    catalog: &Catalog,
    mask: Option<&SelectionMask>,
    reporter: &mut dyn Reporter,
) -> Result<Outcome, ModuleError> {
    let mut outcome = Outcome::default();

    reporter.module_header(catalog.id(), catalog.description());

    if let Some(setup) = catalog.setup() {
        reporter.hook_stage(catalog.description(), HookStage::ModuleSetup);
        if let Err(reason) = setup() {
            let err = ModuleError::SetupFailed {
                module: catalog.id().to_string(),
                reason,
            };
            reporter.module_error(&err);
            return Err(err);
        }
    }

    for (index, record) in catalog.records().iter().enumerate() {
        if let Some(mask) = mask {
            if !mask.contains(index) {
                continue;
            }
        }
        let number = index + 1;

        let Some(func) = record.func() else {
            reporter.test_line(number, record.description(), TestStatus::MissingFn);
            let err = ModuleError::MissingTestFn {
                module: catalog.id().to_string(),
                index: number,
            };
            reporter.module_error(&err);
            return Err(err);
        };

        if catalog.is_disabled(record) {
            outcome.total += 1;
            outcome.disabled += 1;
            reporter.test_line(number, record.description(), TestStatus::Disabled);
            continue;
        }

        if let Some(issue) = record.known_issue() {
            outcome.total += 1;
            outcome.known_issue += 1;
            reporter.test_line(number, record.description(), TestStatus::KnownIssue(issue));
            continue;
        }

        if let Some(pre) = catalog.pre_test() {
            if let Err(message) = pre() {
                reporter.hook_warning(HookStage::PreTest, &message);
                continue;
            }
        }

        outcome.total += 1;
        match func() {
            Ok(()) => {
                outcome.passed += 1;
                reporter.test_line(number, record.description(), TestStatus::Passed);
            }
            Err(message) => {
                outcome.failed += 1;
                reporter.test_line(
                    number,
                    record.description(),
                    TestStatus::Failed {
                        message: message.as_str(),
                    },
                );
            }
        }

        if let Some(post) = catalog.post_test() {
            if let Err(message) = post() {
                reporter.hook_warning(HookStage::PostTest, &message);
            }
        }
    }

    if let Some(teardown) = catalog.teardown() {
        reporter.hook_stage(catalog.description(), HookStage::ModuleTeardown);
        if let Err(message) = teardown() {
            // Reported, but prior results stand.
            reporter.hook_warning(HookStage::ModuleTeardown, &message);
        }
    }

    let outcome = outcome.checked();
    reporter.summary(
        catalog.description(),
        catalog.summary_comment(),
        &outcome,
    );
    Ok(outcome)
}
