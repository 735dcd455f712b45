//! Batch driver - runs selection requests against a registry
//!
//! Requests are processed independently in order: a bad module name or
//! a module aborted by its own setup never stops the rest of the
//! batch. The front end maps the final [`BatchReport`] to a process
//! exit disposition.

use crate::engine::{self, Outcome};
use crate::error::{ModuleError, SelectionError};
use crate::registry::Registry;
use crate::report::Reporter;
use crate::selection::{self, SelectionRequest};
use serde::Serialize;

/// Final counters of one module's run within a batch.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleOutcome {
    pub module: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Aggregated result of a whole batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-module counters, in execution order.
    pub outcomes: Vec<ModuleOutcome>,
    /// Recoverable per-token selection errors.
    pub selection_errors: Vec<SelectionError>,
    /// Fatal-to-module errors (setup failures, missing functions).
    pub module_errors: Vec<ModuleError>,
}

impl BatchReport {
    /// Exit disposition: success only when every request resolved to a
    /// known module and every resolved module ran without a fatal
    /// configuration error or setup failure. Out-of-range or
    /// unparsable index tokens are reported but do not fail the batch;
    /// failing tests never do.
    pub fn exit_success(&self) -> bool {
        self.module_errors.is_empty()
            && !self
                .selection_errors
                .iter()
                .any(|e| matches!(e, SelectionError::UnknownModule(_)))
    }

    /// Sum of all module outcomes.
    pub fn combined(&self) -> Outcome {
        let mut combined = Outcome::default();
        for m in &self.outcomes {
            combined.total += m.outcome.total;
            combined.passed += m.outcome.passed;
            combined.failed += m.outcome.failed;
            combined.known_issue += m.outcome.known_issue;
            combined.disabled += m.outcome.disabled;
        }
        combined
    }
}

/// Run a batch of requests in order against the registry.
///
/// Listing requests are pure projections over the catalogs; run
/// requests resolve to plans (whose selection masks live only for the
/// duration of this call) and execute in ascending index order.
pub fn run_batch(
    registry: &Registry,
    requests: &[SelectionRequest],
    reporter: &mut dyn Reporter,
) -> BatchReport {
    let mut report = BatchReport::default();

    for request in requests {
        match request {
            SelectionRequest::ListModules => {
                reporter.list_modules(&registry.modules());
            }
            SelectionRequest::ListTests { ids } => {
                for id in ids {
                    match registry.lookup(id) {
                        Some(catalog) => reporter.list_tests(
                            catalog.description(),
                            catalog.list_comment(),
                            &catalog.list(),
                        ),
                        None => {
                            let err = SelectionError::UnknownModule(id.clone());
                            reporter.selection_error(&err);
                            report.selection_errors.push(err);
                        }
                    }
                }
            }
            _ => {
                let resolution = selection::resolve(registry, request);
                for err in resolution.errors {
                    reporter.selection_error(&err);
                    report.selection_errors.push(err);
                }
                for plan in resolution.plans {
                    match engine::run(plan.catalog, plan.mask.as_ref(), reporter) {
                        Ok(outcome) => report.outcomes.push(ModuleOutcome {
                            module: plan.catalog.id().to_string(),
                            outcome,
                        }),
                        Err(err) => report.module_errors.push(err),
                    }
                }
            }
        }
    }

    report
}
