//! Gauntlet Engine - embeddable unit-test execution engine
//!
//! This library drives collections of statically registered test
//! modules in constrained environments: no dynamic discovery, no
//! reflection, tests registered at build time. It provides:
//! - Catalogs of test records with module-level and per-test hooks
//! - A build-once registry with lookup by module identifier
//! - Selection of tests to run (all, per module, by index, by range)
//! - A sequential execution engine with outcome accounting
//! - A reporting trait for external rendering
//!
//! Execution is single-threaded and deterministic: one test runs to
//! completion before the next begins, modules run in registry order,
//! and all per-run state (selection masks, counters) is owned by one
//! run invocation.
//!
//! # Example
//!
//! ```
//! use gauntlet_engine::{Catalog, NullReporter, Registry, TestRecord};
//!
//! fn check_addition() -> Result<(), String> {
//!     if 2 + 2 == 4 { Ok(()) } else { Err("math is broken".into()) }
//! }
//!
//! let registry = Registry::new(vec![Catalog::new(
//!     "math",
//!     "Arithmetic",
//!     vec![TestRecord::new("addition", check_addition)],
//! )]);
//!
//! let catalog = registry.lookup("math").unwrap();
//! let outcome = gauntlet_engine::run(catalog, None, &mut NullReporter).unwrap();
//! assert_eq!(outcome.passed, 1);
//! ```

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod catalog;
pub mod engine;
pub mod error;
pub mod harness;
pub mod mask;
pub mod registry;
pub mod report;
pub mod selection;

// Re-export commonly used types
pub use catalog::{Catalog, DisablePolicy, HookFn, ListEntry, ListStatus, TestFn, TestRecord};
pub use engine::{run, Outcome};
pub use error::{ModuleError, SelectionError};
pub use harness::{run_batch, BatchReport, ModuleOutcome};
pub use mask::SelectionMask;
pub use registry::{ModuleRow, Registry};
pub use report::{HookStage, NullReporter, Reporter, TestStatus};
pub use selection::{resolve, Plan, Resolution, SelectionRequest};
