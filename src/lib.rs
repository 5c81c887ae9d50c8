//! Patternbook - Library for running and validating design pattern demonstrations
//!
//! This library provides functionality to:
//! - Register runnable demonstrations of the classic design patterns in a catalog
//! - Execute demonstrations and capture their output lines
//! - Validate captured output against bundled expected-output fixtures

pub mod cli;
pub mod fixtures;
pub mod models;
pub mod patterns;
pub mod registry;
pub mod runner;
pub mod validate;
