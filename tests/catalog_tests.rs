//! Integration tests for the patternbook catalog
//!
//! These exercise the library end to end: registry construction, execution
//! through the runner, and validation of every demonstration against the
//! bundled expected-output fixtures.

use serial_test::serial;

use patternbook::fixtures::expected_outputs;
use patternbook::models::{Category, Demo, ExpectedOutput, Outcome};
use patternbook::registry::{DemoRegistry, RegistryError};
use patternbook::runner::{self, RunOptions};
use patternbook::validate::{format_report, validate, validate_all};

fn catalog() -> DemoRegistry {
    DemoRegistry::builtin().expect("built-in catalog must register cleanly")
}

#[test]
fn test_catalog_registers_23_patterns() {
    let registry = catalog();
    assert_eq!(registry.len(), 23);
    assert_eq!(registry.list(Some(Category::Creational)).len(), 6);
    assert_eq!(registry.list(Some(Category::Structural)).len(), 7);
    assert_eq!(registry.list(Some(Category::Behavioral)).len(), 10);
}

#[test]
fn test_every_registered_demo_executes_to_non_empty_output() {
    let registry = catalog();
    for name in registry.list(None) {
        let demo = registry.lookup(name).unwrap();
        let lines = demo.execute();
        assert!(!lines.is_empty(), "demonstration '{}' produced no output", name);
    }
}

#[test]
fn test_list_is_deterministic_across_calls() {
    let registry = catalog();
    let first = registry.list(None);
    let second = registry.list(None);
    assert_eq!(first, second);

    // Category listings are stable too, and together cover the catalog
    let mut grouped = Vec::new();
    for category in Category::ALL {
        grouped.extend(registry.list(Some(category)));
    }
    assert_eq!(grouped, first);
}

#[test]
fn test_catalog_order_is_source_listing_order() {
    let registry = catalog();
    let names = registry.list(None);
    assert_eq!(names.first(), Some(&"simple_factory"));
    assert_eq!(names.get(6), Some(&"adapter"));
    assert_eq!(names.get(13), Some(&"chain_of_responsibility"));
    assert_eq!(names.last(), Some(&"template_method"));
}

#[test]
fn test_execute_is_idempotent_for_every_demo() {
    let registry = catalog();
    for demo in registry.iter() {
        assert_eq!(
            demo.execute(),
            demo.execute(),
            "demonstration '{}' accumulated hidden state across calls",
            demo.name
        );
    }
}

#[test]
fn test_fixture_listing_matches_registration_order() {
    let registry = catalog();
    let fixture_names: Vec<_> = expected_outputs().iter().map(|f| f.name).collect();
    assert_eq!(fixture_names, registry.list(None));
}

#[test]
fn test_whole_catalog_matches_bundled_fixtures() {
    let registry = catalog();
    let results = runner::run_all(&registry, None, &RunOptions::default());
    let reports = validate_all(&results, &expected_outputs());

    assert_eq!(reports.len(), 23);
    for report in &reports {
        assert!(report.is_pass(), "{}", format_report(report));
    }
}

#[test]
fn test_parallel_catalog_run_matches_bundled_fixtures() {
    let registry = catalog();
    let results = runner::run_all(&registry, None, &RunOptions { parallel: true });
    let reports = validate_all(&results, &expected_outputs());

    for report in &reports {
        assert!(report.is_pass(), "{}", format_report(report));
    }
    // Request order survives parallel completion order
    let names: Vec<_> = results.iter().map(|r| r.name).collect();
    assert_eq!(names, registry.list(None));
}

#[test]
fn test_unknown_pattern_name_fails_fast() {
    let registry = catalog();
    let result = runner::run(&registry, &["decorator", "not_a_pattern"], &RunOptions::default());

    // The whole call fails naming the missing pattern; no partial results
    assert_eq!(result.unwrap_err(), RegistryError::NotFound("not_a_pattern".to_string()));
}

#[test]
fn test_decorator_scenario() {
    let registry = catalog();
    let lines = registry.lookup("decorator").unwrap().execute();

    assert_eq!(lines[0], "Simple coffee costs 10");
    assert_eq!(lines[1], "Simple coffee, milk costs 12");
    assert_eq!(lines[2], "Simple coffee, milk, whip costs 17");
}

#[test]
fn test_chain_of_responsibility_scenario() {
    let registry = catalog();
    let lines = registry.lookup("chain_of_responsibility").unwrap().execute();

    // Capacities [100, 200, 300] and a request for 259: exactly the third
    // handler accepts, and the report names it
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("teller cannot approve"));
    assert!(lines[1].starts_with("supervisor cannot approve"));
    assert_eq!(lines[2], "manager approved the request for 259");
}

#[test]
#[serial]
fn test_singleton_scenario_reports_one_shared_instance() {
    let registry = catalog();
    let demo = registry.lookup("singleton").unwrap();

    let first_run = demo.execute();
    assert_eq!(first_run[2], "both accesses share one instance: true");

    // The instance survives across executions of the demonstration too
    assert_eq!(demo.execute(), first_run);
}

#[test]
fn test_fault_in_one_demo_does_not_block_siblings() {
    fn broken() -> Vec<String> {
        panic!("seeded defect");
    }
    fn healthy() -> Vec<String> {
        vec!["fine".to_string()]
    }

    let mut registry = DemoRegistry::new();
    registry.register(Demo::new("healthy_a", Category::Creational, healthy)).unwrap();
    registry.register(Demo::new("broken", Category::Creational, broken)).unwrap();
    registry.register(Demo::new("healthy_b", Category::Creational, healthy)).unwrap();

    let results = runner::run_all(&registry, None, &RunOptions::default());
    assert_eq!(results.len(), 3);
    assert!(!results[0].is_fault());
    assert_eq!(results[1].outcome, Outcome::Fault("seeded defect".to_string()));
    assert!(!results[2].is_fault());

    // The fault is visible to validation as a failure, not a crash
    let reports = validate_all(
        &results,
        &[
            ExpectedOutput { name: "healthy_a", lines: &["fine"] },
            ExpectedOutput { name: "broken", lines: &["never"] },
            ExpectedOutput { name: "healthy_b", lines: &["fine"] },
        ],
    );
    assert!(reports[0].is_pass());
    assert!(!reports[1].is_pass());
    assert!(reports[2].is_pass());
}

#[test]
fn test_validation_is_pure() {
    let registry = catalog();
    let results = runner::run_all(&registry, None, &RunOptions::default());
    let expectations = expected_outputs();

    let first = validate(&results[0], &expectations[0]);
    let second = validate(&results[0], &expectations[0]);
    assert_eq!(first, second);
}
