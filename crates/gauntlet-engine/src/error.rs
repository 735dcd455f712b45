//! Error taxonomy for the execution engine
//!
//! Two families of errors exist:
//! - [`ModuleError`]: fatal to a single module's run (the rest of a
//!   batch still executes)
//! - [`SelectionError`]: recoverable, scoped to one request token
//!
//! A failing test is neither: it is an ordinary outcome tracked by the
//! run counters.

use thiserror::Error;

/// Errors that abort one module's run.
///
/// These never terminate the whole process; the batch driver reports
/// them and moves on to the next module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// The module setup hook signalled failure. No tests were executed
    /// and the teardown hook was not invoked.
    #[error("module '{module}' setup failed: {reason}")]
    SetupFailed { module: String, reason: String },

    /// A selected test record has no function bound. This is a
    /// configuration defect, distinct from a failing test.
    #[error("test {index} in module '{module}': function does not exist")]
    MissingTestFn { module: String, index: usize },
}

/// Per-token selection errors.
///
/// Each error covers exactly one token of a selection request; the
/// remaining tokens and requests in the batch still proceed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The requested module identifier is not in the registry.
    #[error("'{0}' is not a valid module name")]
    UnknownModule(String),

    /// A test number fell outside `[1, count]` for the module.
    #[error("test number {token} out of range for module '{module}' (1-{count})")]
    OutOfRange {
        module: String,
        token: usize,
        count: usize,
    },

    /// A test-number token did not parse as an integer.
    #[error("invalid test number '{token}' for module '{module}'")]
    InvalidToken { module: String, token: String },

    /// A range request was empty or fell outside `[1, count]`.
    #[error("invalid range {from}-{to} for module '{module}' (1-{count})")]
    InvalidRange {
        module: String,
        from: usize,
        to: usize,
        count: usize,
    },
}
