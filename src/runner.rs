//! Execution of demonstrations against the catalog.
//!
//! The runner resolves every requested name before anything executes, so an
//! unknown name fails the whole call without partial output. Execution
//! itself is isolated per demonstration: an internal logic fault in one
//! body becomes a `Fault` outcome for that entry and never disturbs its
//! siblings. With `parallel` set, bodies run on the rayon thread pool;
//! results always come back in the caller's requested order.

use std::panic;
use std::time::Instant;

use rayon::prelude::*;

use crate::models::{Category, Demo, ExecutionResult, Outcome};
use crate::registry::{DemoRegistry, RegistryError};

/// Options controlling a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Execute independent demonstrations on the rayon thread pool.
    /// Demonstrations share no mutable state by construction, and results
    /// are collected in request order regardless of completion order.
    pub parallel: bool,
}

/// Execute the named demonstrations in the given order.
///
/// Every name is resolved up front; if any is unknown the call fails with
/// `NotFound` naming it, and nothing executes. A fault inside one body is
/// captured in that entry's result rather than aborting the rest.
pub fn run(
    registry: &DemoRegistry,
    names: &[&str],
    options: &RunOptions,
) -> Result<Vec<ExecutionResult>, RegistryError> {
    let demos = names.iter().map(|name| registry.lookup(name)).collect::<Result<Vec<_>, _>>()?;
    Ok(execute_all(&demos, options))
}

/// Execute the whole catalog, or one category of it, in registration order.
pub fn run_all(
    registry: &DemoRegistry,
    category: Option<Category>,
    options: &RunOptions,
) -> Vec<ExecutionResult> {
    let demos: Vec<&Demo> = registry
        .iter()
        .filter(|d| category.map_or(true, |c| d.category == c))
        .collect();
    execute_all(&demos, options)
}

fn execute_all(demos: &[&Demo], options: &RunOptions) -> Vec<ExecutionResult> {
    if options.parallel {
        demos.par_iter().map(|demo| execute_one(demo)).collect()
    } else {
        demos.iter().map(|demo| execute_one(demo)).collect()
    }
}

/// Run one body, converting a panic into a `Fault` outcome.
///
/// Bodies are plain `fn` pointers and therefore unwind-safe; the panic
/// payload becomes the fault message.
fn execute_one(demo: &Demo) -> ExecutionResult {
    let started = Instant::now();
    let outcome = match panic::catch_unwind(demo.body) {
        Ok(lines) => Outcome::Lines(lines),
        Err(payload) => Outcome::Fault(fault_message(payload.as_ref())),
    };
    ExecutionResult { name: demo.name, outcome, elapsed: started.elapsed() }
}

fn fault_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "demonstration panicked".to_string()
    }
}
