//! Selection resolver - from raw requests to concrete run plans
//!
//! A request names modules and optional 1-based test numbers; the
//! resolver range-checks every token against the catalog and produces
//! per-module plans of (catalog, optional selection mask). Bad tokens
//! are collected individually and never stop the rest of the batch.

use crate::catalog::Catalog;
use crate::error::SelectionError;
use crate::mask::SelectionMask;
use crate::registry::Registry;

/// One selection request, as produced by a front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionRequest {
    /// Run every registered module in registry order.
    RunAll,
    /// Run one module's full catalog.
    RunModule { id: String },
    /// Run one module restricted to explicit 1-based test numbers.
    /// Tokens are raw strings; parsing happens here so each bad token
    /// is reported on its own.
    RunTests { id: String, tokens: Vec<String> },
    /// Run a contiguous, inclusive 1-based range of one module.
    RunRange { id: String, from: usize, to: usize },
    /// List one row per registered module.
    ListModules,
    /// List the named modules' tests in detail.
    ListTests { ids: Vec<String> },
}

/// A resolved plan for one module: which catalog, and which subset.
/// `mask: None` means "all tests".
#[derive(Debug)]
pub struct Plan<'r> {
    pub catalog: &'r Catalog,
    pub mask: Option<SelectionMask>,
}

/// Result of resolving one request: zero or more plans plus the
/// per-token errors encountered along the way.
#[derive(Debug, Default)]
pub struct Resolution<'r> {
    pub plans: Vec<Plan<'r>>,
    pub errors: Vec<SelectionError>,
}

/// Resolve a run-type request into plans. Listing requests resolve to
/// no plans; they are pure projections handled by the batch driver.
pub fn resolve<'r>(registry: &'r Registry, request: &SelectionRequest) -> Resolution<'r> {
    let mut resolution = Resolution::default();

    match request {
        SelectionRequest::RunAll => {
            for catalog in registry.iter() {
                resolution.plans.push(Plan {
                    catalog,
                    mask: None,
                });
            }
        }
        SelectionRequest::RunModule { id } => match registry.lookup(id) {
            Some(catalog) => resolution.plans.push(Plan {
                catalog,
                mask: None,
            }),
            None => resolution
                .errors
                .push(SelectionError::UnknownModule(id.clone())),
        },
        SelectionRequest::RunTests { id, tokens } => {
            resolve_tokens(registry, id, tokens, &mut resolution)
        }
        SelectionRequest::RunRange { id, from, to } => {
            resolve_range(registry, id, *from, *to, &mut resolution)
        }
        SelectionRequest::ListModules | SelectionRequest::ListTests { .. } => {}
    }

    resolution
}

fn resolve_tokens<'r>(
    registry: &'r Registry,
    id: &str,
    tokens: &[String],
    resolution: &mut Resolution<'r>,
) {
    let Some(catalog) = registry.lookup(id) else {
        resolution
            .errors
            .push(SelectionError::UnknownModule(id.to_string()));
        return;
    };

    if tokens.is_empty() {
        // Bare module name: run everything, no mask.
        resolution.plans.push(Plan {
            catalog,
            mask: None,
        });
        return;
    }

    // One mask per module per invocation, shared by all its tokens.
    let mut mask = SelectionMask::new(catalog.len());
    for token in tokens {
        match token.parse::<usize>() {
            Ok(number) if (1..=catalog.len()).contains(&number) => {
                mask.set(number - 1);
            }
            Ok(number) => resolution.errors.push(SelectionError::OutOfRange {
                module: id.to_string(),
                token: number,
                count: catalog.len(),
            }),
            Err(_) => resolution.errors.push(SelectionError::InvalidToken {
                module: id.to_string(),
                token: token.clone(),
            }),
        }
    }

    resolution.plans.push(Plan {
        catalog,
        mask: Some(mask),
    });
}

fn resolve_range<'r>(
    registry: &'r Registry,
    id: &str,
    from: usize,
    to: usize,
    resolution: &mut Resolution<'r>,
) {
    let Some(catalog) = registry.lookup(id) else {
        resolution
            .errors
            .push(SelectionError::UnknownModule(id.to_string()));
        return;
    };

    if from == 0 || to < from || to > catalog.len() {
        resolution.errors.push(SelectionError::InvalidRange {
            module: id.to_string(),
            from,
            to,
            count: catalog.len(),
        });
        return;
    }

    let mut mask = SelectionMask::new(catalog.len());
    for number in from..=to {
        mask.set(number - 1);
    }
    resolution.plans.push(Plan {
        catalog,
        mask: Some(mask),
    });
}
