//! Core data model for the demonstration catalog.
//!
//! A `Demo` couples a unique pattern name with a category and an executable
//! body. Executing a body yields an ordered sequence of output lines; the
//! runner wraps that sequence (or a fault) in an `ExecutionResult`, and the
//! validator compares it against an `ExpectedOutput`.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

/// The three classic pattern families, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    /// All categories in catalog order (creational, structural, behavioral).
    pub const ALL: [Category; 3] = [Category::Creational, Category::Structural, Category::Behavioral];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Creational => write!(f, "creational"),
            Category::Structural => write!(f, "structural"),
            Category::Behavioral => write!(f, "behavioral"),
        }
    }
}

/// Executable body of a demonstration.
///
/// Bodies are plain function pointers: deterministic, free of external I/O,
/// and unwind-safe, so the runner can isolate a fault in one body without
/// affecting its siblings.
pub type DemoFn = fn() -> Vec<String>;

/// A single runnable pattern demonstration.
///
/// Constructed once during catalog registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Demo {
    /// Unique, case-sensitive pattern name (e.g. "factory_method")
    pub name: &'static str,
    /// Pattern family this demonstration belongs to
    pub category: Category,
    /// Executable body producing the demonstration's output lines
    pub body: DemoFn,
}

impl Demo {
    pub fn new(name: &'static str, category: Category, body: DemoFn) -> Self {
        Self { name, category, body }
    }

    /// Run the demonstration body and collect its output lines.
    pub fn execute(&self) -> Vec<String> {
        (self.body)()
    }
}

/// What a single execution produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The demonstration completed and produced these output lines
    Lines(Vec<String>),
    /// The demonstration hit an internal logic error; the message names it
    Fault(String),
}

/// The captured output of running one demonstration once.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Name of the demonstration that ran
    pub name: &'static str,
    /// Captured output lines, or the fault that ended the run
    pub outcome: Outcome,
    /// Wall-clock time the body took; informational only, never validated
    pub elapsed: Duration,
}

impl ExecutionResult {
    /// The produced lines, or `None` if the execution faulted.
    pub fn lines(&self) -> Option<&[String]> {
        match &self.outcome {
            Outcome::Lines(lines) => Some(lines),
            Outcome::Fault(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self.outcome, Outcome::Fault(_))
    }
}

/// Golden output lines for one demonstration, supplied by the bundled
/// fixtures or by a test suite - never by demonstration code itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedOutput {
    pub name: &'static str,
    pub lines: &'static [&'static str],
}
