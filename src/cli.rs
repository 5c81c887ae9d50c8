//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::fixtures;
use crate::models::{Category, Outcome};
use crate::registry::DemoRegistry;
use crate::runner::{self, RunOptions};
use crate::validate::{format_report, validate_all};

/// Exit codes per the catalog contract
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Patternbook - Run and validate design pattern demonstrations
#[derive(Parser)]
#[command(name = "pat")]
#[command(about = "Patternbook - Run and validate design pattern demonstrations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute demonstrations and print their output lines
    Run {
        /// Pattern name to execute (e.g. "decorator")
        #[arg(required_unless_present_any = ["category", "all"], conflicts_with_all = ["category", "all"])]
        name: Option<String>,

        /// Execute every demonstration in this category
        #[arg(short, long, value_enum, conflicts_with = "all")]
        category: Option<Category>,

        /// Execute the whole catalog
        #[arg(long)]
        all: bool,

        /// Execute independent demonstrations on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },

    /// List registered pattern names grouped by category
    List {
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run every demonstration and compare against bundled expected output
    Validate {
        /// Execute independent demonstrations on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // The catalog is built once, before any command reads it
    let registry = match DemoRegistry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match cli.command {
        Commands::Run { name, category, all: _, parallel } => {
            run_demos(&registry, name.as_deref(), category, parallel)
        }
        Commands::List { format } => run_list(&registry, &format),
        Commands::Validate { parallel } => run_validate(&registry, parallel),
    }
}

/// Execute one named demonstration, or all of a category, or the catalog
fn run_demos(
    registry: &DemoRegistry,
    name: Option<&str>,
    category: Option<Category>,
    parallel: bool,
) -> ExitCode {
    let options = RunOptions { parallel };

    let results = match name {
        Some(name) => match runner::run(registry, &[name], &options) {
            Ok(results) => results,
            Err(e) => {
                // Unknown name is a caller error; nothing was executed or printed
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        },
        None => runner::run_all(registry, category, &options),
    };

    let print_headers = results.len() > 1;
    let mut faulted = false;

    for result in &results {
        if print_headers {
            println!("--- {} ---", result.name);
        }
        match &result.outcome {
            Outcome::Lines(lines) => {
                for line in lines {
                    println!("{}", line);
                }
            }
            Outcome::Fault(message) => {
                eprintln!("Error: demonstration '{}' faulted: {}", result.name, message);
                faulted = true;
            }
        }
    }

    if faulted {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Print the catalog grouped by category, in registration order
fn run_list(registry: &DemoRegistry, format: &str) -> ExitCode {
    match format {
        "text" => {
            for category in Category::ALL {
                println!("{}:", category);
                for name in registry.list(Some(category)) {
                    println!("  {}", name);
                }
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        "json" => {
            let patterns: Vec<_> = registry
                .iter()
                .map(|demo| serde_json::json!({ "name": demo.name, "category": demo.category }))
                .collect();
            let output = serde_json::json!({ "patterns": patterns, "total": registry.len() });
            println!("{}", output);
            ExitCode::from(EXIT_SUCCESS)
        }
        _ => {
            eprintln!("Error: --format must be 'text' or 'json'");
            ExitCode::from(EXIT_INVALID_ARGS)
        }
    }
}

/// Run the whole catalog and compare against the bundled fixtures
fn run_validate(registry: &DemoRegistry, parallel: bool) -> ExitCode {
    let options = RunOptions { parallel };
    let results = runner::run_all(registry, None, &options);
    let expectations = fixtures::expected_outputs();

    let reports = validate_all(&results, &expectations);
    let failed = reports.iter().filter(|r| !r.is_pass()).count();

    // Every failure is reported before the process exits
    for report in reports.iter().filter(|r| !r.is_pass()) {
        println!("{}", format_report(report));
    }
    println!(
        "validated {} demonstration(s): {} passed, {} failed",
        reports.len(),
        reports.len() - failed,
        failed
    );

    if failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
