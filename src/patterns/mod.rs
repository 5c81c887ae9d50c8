//! Built-in pattern demonstrations.
//!
//! One demonstration function per classic pattern, grouped by family.
//! Every body is deterministic: no external I/O, no randomness, and no
//! wall-clock dependence in its output (the mediator transcript uses the
//! fixed `[hh:mm]` placeholder instead of real timestamps). Bodies only
//! touch objects they construct themselves, so independent demonstrations
//! can run in parallel.

pub mod behavioral;
pub mod creational;
pub mod structural;

use crate::models::{Category, Demo};

/// The full built-in catalog, in source listing order.
///
/// This order is what `list` and `validate` report; it follows the classic
/// catalog ordering (creational, then structural, then behavioral), not
/// the alphabet.
pub fn builtin_demos() -> Vec<Demo> {
    vec![
        // Creational
        Demo::new("simple_factory", Category::Creational, creational::simple_factory),
        Demo::new("factory_method", Category::Creational, creational::factory_method),
        Demo::new("abstract_factory", Category::Creational, creational::abstract_factory),
        Demo::new("builder", Category::Creational, creational::builder),
        Demo::new("prototype", Category::Creational, creational::prototype),
        Demo::new("singleton", Category::Creational, creational::singleton),
        // Structural
        Demo::new("adapter", Category::Structural, structural::adapter),
        Demo::new("bridge", Category::Structural, structural::bridge),
        Demo::new("composite", Category::Structural, structural::composite),
        Demo::new("decorator", Category::Structural, structural::decorator),
        Demo::new("facade", Category::Structural, structural::facade),
        Demo::new("flyweight", Category::Structural, structural::flyweight),
        Demo::new("proxy", Category::Structural, structural::proxy),
        // Behavioral
        Demo::new(
            "chain_of_responsibility",
            Category::Behavioral,
            behavioral::chain_of_responsibility,
        ),
        Demo::new("command", Category::Behavioral, behavioral::command),
        Demo::new("iterator", Category::Behavioral, behavioral::iterator),
        Demo::new("mediator", Category::Behavioral, behavioral::mediator),
        Demo::new("memento", Category::Behavioral, behavioral::memento),
        Demo::new("observer", Category::Behavioral, behavioral::observer),
        Demo::new("visitor", Category::Behavioral, behavioral::visitor),
        Demo::new("strategy", Category::Behavioral, behavioral::strategy),
        Demo::new("state", Category::Behavioral, behavioral::state),
        Demo::new("template_method", Category::Behavioral, behavioral::template_method),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_23_entries() {
        assert_eq!(builtin_demos().len(), 23);
    }

    #[test]
    fn test_catalog_category_counts() {
        let demos = builtin_demos();
        let count = |c: Category| demos.iter().filter(|d| d.category == c).count();
        assert_eq!(count(Category::Creational), 6);
        assert_eq!(count(Category::Structural), 7);
        assert_eq!(count(Category::Behavioral), 10);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let demos = builtin_demos();
        let mut names: Vec<_> = demos.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), demos.len());
    }

    #[test]
    fn test_every_demo_produces_output() {
        for demo in builtin_demos() {
            let lines = demo.execute();
            assert!(!lines.is_empty(), "demonstration '{}' produced no output", demo.name);
        }
    }

    #[test]
    fn test_every_demo_is_idempotent() {
        for demo in builtin_demos() {
            assert_eq!(
                demo.execute(),
                demo.execute(),
                "demonstration '{}' is not idempotent",
                demo.name
            );
        }
    }
}
