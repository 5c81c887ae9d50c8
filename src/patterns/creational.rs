//! Creational pattern demonstrations.
//!
//! Each demonstration builds the objects it talks about from scratch and
//! reports what was constructed. Construction goes through explicit
//! factories, builders, and guarded initializers - never through hidden
//! globals or runtime subclassing.

use std::sync::OnceLock;

// ============================================================================
// Simple Factory
// ============================================================================

#[derive(Debug, PartialEq, Eq)]
enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

struct Shape {
    label: &'static str,
    corners: u32,
}

/// Single creation function switching on the requested kind.
fn make_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Circle => Shape { label: "circle", corners: 0 },
        ShapeKind::Square => Shape { label: "square", corners: 4 },
        ShapeKind::Triangle => Shape { label: "triangle", corners: 3 },
    }
}

/// One factory function decides which concrete shape to construct.
pub fn simple_factory() -> Vec<String> {
    [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle]
        .into_iter()
        .map(make_shape)
        .map(|shape| format!("made a {} with {} corners", shape.label, shape.corners))
        .collect()
}

// ============================================================================
// Factory Method
// ============================================================================

trait Transport {
    fn deliver(&self) -> String;
}

struct Truck;
struct Ship;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "delivering by land in a box".to_string()
    }
}

impl Transport for Ship {
    fn deliver(&self) -> String {
        "delivering by sea in a container".to_string()
    }
}

/// Creators defer the choice of concrete transport to implementations of
/// `create_transport`; `plan_delivery` is shared logic written against the
/// `Transport` interface only.
trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self) -> String {
        self.create_transport().deliver()
    }
}

struct RoadLogistics;
struct SeaLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

/// Each creator owns the decision of which transport to construct.
pub fn factory_method() -> Vec<String> {
    let planners: Vec<Box<dyn Logistics>> = vec![Box::new(RoadLogistics), Box::new(SeaLogistics)];
    planners.iter().map(|p| p.plan_delivery()).collect()
}

// ============================================================================
// Abstract Factory
// ============================================================================

struct FactoryChair {
    style: &'static str,
}

struct FactorySofa {
    style: &'static str,
}

/// A factory hands out a whole family of furniture in one consistent style.
trait FurnitureFactory {
    fn chair(&self) -> FactoryChair;
    fn sofa(&self) -> FactorySofa;
}

struct ModernFactory;
struct VictorianFactory;

impl FurnitureFactory for ModernFactory {
    fn chair(&self) -> FactoryChair {
        FactoryChair { style: "modern" }
    }

    fn sofa(&self) -> FactorySofa {
        FactorySofa { style: "modern" }
    }
}

impl FurnitureFactory for VictorianFactory {
    fn chair(&self) -> FactoryChair {
        FactoryChair { style: "victorian" }
    }

    fn sofa(&self) -> FactorySofa {
        FactorySofa { style: "victorian" }
    }
}

fn furnish(factory: &dyn FurnitureFactory) -> String {
    let chair = factory.chair();
    let sofa = factory.sofa();
    // Families produced by one factory never mix styles
    assert_eq!(chair.style, sofa.style);
    format!("furnished a room with a {} chair and a {} sofa", chair.style, sofa.style)
}

/// Whole product families come from one factory, so styles never mix.
pub fn abstract_factory() -> Vec<String> {
    vec![furnish(&ModernFactory), furnish(&VictorianFactory)]
}

// ============================================================================
// Builder
// ============================================================================

struct Burger {
    parts: Vec<&'static str>,
}

impl Burger {
    fn describe(&self) -> String {
        format!("built a burger with {}", self.parts.join(", "))
    }
}

/// Step-by-step assembly; optional steps are simply not called.
struct BurgerBuilder {
    parts: Vec<&'static str>,
}

impl BurgerBuilder {
    fn new() -> Self {
        Self { parts: Vec::new() }
    }

    fn bun(mut self, kind: &'static str) -> Self {
        self.parts.push(kind);
        self
    }

    fn patty(mut self, kind: &'static str) -> Self {
        self.parts.push(kind);
        self
    }

    fn cheese(mut self, kind: &'static str) -> Self {
        self.parts.push(kind);
        self
    }

    fn pickles(mut self) -> Self {
        self.parts.push("pickles");
        self
    }

    fn build(self) -> Burger {
        Burger { parts: self.parts }
    }
}

/// The same builder assembles differently configured products.
pub fn builder() -> Vec<String> {
    let loaded = BurgerBuilder::new()
        .bun("sesame bun")
        .patty("beef patty")
        .cheese("cheddar")
        .pickles()
        .build();
    let plain = BurgerBuilder::new().bun("plain bun").patty("bean patty").build();

    vec![loaded.describe(), plain.describe()]
}

// ============================================================================
// Prototype
// ============================================================================

#[derive(Clone)]
struct CircleProto {
    x: i32,
    y: i32,
    radius: u32,
}

/// New objects come from cloning a configured prototype, and edits to the
/// clone leave the original untouched.
pub fn prototype() -> Vec<String> {
    let original = CircleProto { x: 10, y: 20, radius: 15 };
    let mut copy = original.clone();
    copy.radius = 30;

    vec![
        format!("original circle at ({}, {}) with radius {}", original.x, original.y, original.radius),
        format!("cloned circle at ({}, {}) with radius {}", copy.x, copy.y, copy.radius),
        format!("original still has radius {}", original.radius),
    ]
}

// ============================================================================
// Singleton
// ============================================================================

struct AppSettings {
    app_name: &'static str,
    max_retries: u32,
}

/// The single documented access point for the process-wide settings
/// instance. Initialization is guarded by `OnceLock`, so the first caller
/// constructs the value exactly once and later callers (from any thread)
/// get the same reference.
fn settings() -> &'static AppSettings {
    static SETTINGS: OnceLock<AppSettings> = OnceLock::new();
    SETTINGS.get_or_init(|| AppSettings { app_name: "patternbook", max_retries: 3 })
}

/// Two independent accesses observe the same instance, checked by pointer
/// identity (the token itself is never printed - it is not reproducible).
pub fn singleton() -> Vec<String> {
    let first = settings();
    let second = settings();
    let same_instance = std::ptr::eq(first, second);
    assert!(same_instance);

    vec![
        format!("first access reads app name '{}'", first.app_name),
        format!("second access reads max retries {}", second.max_retries),
        format!("both accesses share one instance: {}", same_instance),
    ]
}
