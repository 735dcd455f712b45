//! Reporting sink - the engine's only output surface
//!
//! The engine never writes to stdout or stderr itself; everything a
//! user sees flows through the [`Reporter`] trait. Front ends install
//! a rendering adapter (the CLI ships a colored console one) and
//! embedders that want silence use [`NullReporter`].

use crate::catalog::ListEntry;
use crate::engine::Outcome;
use crate::error::{ModuleError, SelectionError};
use crate::registry::ModuleRow;

/// Which lifecycle hook an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStage {
    ModuleSetup,
    ModuleTeardown,
    PreTest,
    PostTest,
}

/// Computed status of one per-test output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus<'a> {
    /// The test ran and returned success.
    Passed,
    /// The test ran and returned failure.
    Failed { message: &'a str },
    /// Excluded by flag or policy; not invoked, no hooks run.
    Disabled,
    /// Documented unresolved defect; not invoked, no hooks run.
    KnownIssue(&'a str),
    /// No function bound to the record; fatal to the module.
    MissingFn,
}

/// Callback surface for rendering engine events.
///
/// All methods default to no-ops so adapters only implement what they
/// render. Test numbering passed to [`test_line`](Reporter::test_line)
/// is always the 1-based catalog index, independent of which subset
/// was selected.
pub trait Reporter {
    /// Start of a module run: header with description and optional
    /// list comment.
    fn module_header(&mut self, id: &str, description: &str) {
        let _ = (id, description);
    }

    /// A module setup or teardown hook is about to run.
    fn hook_stage(&mut self, description: &str, stage: HookStage) {
        let _ = (description, stage);
    }

    /// A non-fatal hook failure (per-test setup/teardown, or module
    /// teardown). The run continues.
    fn hook_warning(&mut self, stage: HookStage, message: &str) {
        let _ = (stage, message);
    }

    /// One per-test status line.
    fn test_line(&mut self, index: usize, description: &str, status: TestStatus<'_>) {
        let _ = (index, description, status);
    }

    /// A recoverable per-token selection error.
    fn selection_error(&mut self, error: &SelectionError) {
        let _ = error;
    }

    /// A fatal-to-module error (setup failure, missing function).
    fn module_error(&mut self, error: &ModuleError) {
        let _ = error;
    }

    /// End-of-module summary with the five outcome counters.
    fn summary(&mut self, description: &str, comment: Option<&str>, outcome: &Outcome) {
        let _ = (description, comment, outcome);
    }

    /// Registry-level listing rows (one per module).
    fn list_modules(&mut self, rows: &[ModuleRow]) {
        let _ = rows;
    }

    /// Detailed per-test listing for one catalog.
    fn list_tests(&mut self, description: &str, comment: Option<&str>, entries: &[ListEntry]) {
        let _ = (description, comment, entries);
    }
}

/// Reporter that renders nothing. Useful for embedding and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}
