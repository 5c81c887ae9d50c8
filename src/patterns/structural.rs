//! Structural pattern demonstrations.
//!
//! Composition over inheritance throughout: decorators own their wrapped
//! value, the composite is a recursive enum, and the adapter is a plain
//! struct translating one interface into another.

use std::collections::HashMap;
use std::f64::consts::SQRT_2;
use std::rc::Rc;

// ============================================================================
// Adapter
// ============================================================================

trait RoundPeg {
    fn radius(&self) -> f64;
}

struct StandardPeg {
    radius: f64,
}

impl RoundPeg for StandardPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

struct SquarePeg {
    width: f64,
}

/// Adapts a square peg to the round-peg interface by reporting the radius
/// of the smallest circle that encloses it.
struct SquarePegAdapter {
    peg: SquarePeg,
}

impl RoundPeg for SquarePegAdapter {
    fn radius(&self) -> f64 {
        self.peg.width * SQRT_2 / 2.0
    }
}

struct RoundHole {
    radius: f64,
}

impl RoundHole {
    fn fits(&self, peg: &dyn RoundPeg) -> bool {
        peg.radius() <= self.radius
    }
}

/// A square peg reaches the round-hole interface through an adapter.
pub fn adapter() -> Vec<String> {
    let hole = RoundHole { radius: 5.0 };

    let round = StandardPeg { radius: 5.0 };
    let small = SquarePegAdapter { peg: SquarePeg { width: 5.0 } };
    let large = SquarePegAdapter { peg: SquarePeg { width: 10.0 } };

    vec![
        format!("round peg with radius {:.2} fits the {:.2} hole: {}", round.radius(), hole.radius, hole.fits(&round)),
        format!(
            "square peg with width {:.2} adapts to radius {:.2}, fits: {}",
            small.peg.width,
            small.radius(),
            hole.fits(&small)
        ),
        format!(
            "square peg with width {:.2} adapts to radius {:.2}, fits: {}",
            large.peg.width,
            large.radius(),
            hole.fits(&large)
        ),
    ]
}

// ============================================================================
// Bridge
// ============================================================================

trait Device {
    fn name(&self) -> &'static str;
    fn volume(&self) -> u32;
    fn set_volume(&mut self, volume: u32);
}

struct Tv {
    volume: u32,
}

impl Device for Tv {
    fn name(&self) -> &'static str {
        "tv"
    }

    fn volume(&self) -> u32 {
        self.volume
    }

    fn set_volume(&mut self, volume: u32) {
        self.volume = volume;
    }
}

struct Radio {
    volume: u32,
}

impl Device for Radio {
    fn name(&self) -> &'static str {
        "radio"
    }

    fn volume(&self) -> u32 {
        self.volume
    }

    fn set_volume(&mut self, volume: u32) {
        self.volume = volume;
    }
}

/// The abstraction side of the bridge: one remote works against any
/// `Device` implementation.
struct Remote<D: Device> {
    device: D,
}

impl<D: Device> Remote<D> {
    fn volume_up(&mut self) -> String {
        let raised = self.device.volume() + 10;
        self.device.set_volume(raised);
        format!("remote raised {} volume to {}", self.device.name(), self.device.volume())
    }
}

/// One abstraction (the remote) drives two device implementations.
pub fn bridge() -> Vec<String> {
    let mut tv_remote = Remote { device: Tv { volume: 30 } };
    let mut radio_remote = Remote { device: Radio { volume: 50 } };

    vec![tv_remote.volume_up(), radio_remote.volume_up()]
}

// ============================================================================
// Composite
// ============================================================================

/// A node in the order tree: either a priced product or a package of
/// further nodes. Pricing treats both uniformly.
enum Item {
    Product { price: u32 },
    Package { contents: Vec<Item> },
}

impl Item {
    fn price(&self) -> u32 {
        match self {
            Item::Product { price } => *price,
            Item::Package { contents } => contents.iter().map(Item::price).sum(),
        }
    }
}

/// Leaves and packages answer the same question: what do you cost?
pub fn composite() -> Vec<String> {
    let hammer = Item::Product { price: 250 };
    let small_box = Item::Package {
        contents: vec![Item::Product { price: 230 }, Item::Product { price: 250 }],
    };
    let big_box = Item::Package { contents: vec![small_box, Item::Product { price: 700 }] };

    let mut lines = Vec::new();
    lines.push(format!("hammer alone costs {}", hammer.price()));
    if let Item::Package { contents } = &big_box {
        lines.push(format!("small box totals {}", contents[0].price()));
    }
    lines.push(format!("big box totals {}", big_box.price()));
    lines
}

// ============================================================================
// Decorator
// ============================================================================

trait Beverage {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

struct SimpleCoffee;

impl Beverage for SimpleCoffee {
    fn cost(&self) -> u32 {
        10
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

/// A decorating layer owns its wrapped beverage and adds its own cost and
/// description on top.
struct Milk<B: Beverage> {
    inner: B,
}

impl<B: Beverage> Beverage for Milk<B> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, milk", self.inner.description())
    }
}

struct Whip<B: Beverage> {
    inner: B,
}

impl<B: Beverage> Beverage for Whip<B> {
    fn cost(&self) -> u32 {
        self.inner.cost() + 5
    }

    fn description(&self) -> String {
        format!("{}, whip", self.inner.description())
    }
}

fn order_line(beverage: &dyn Beverage) -> String {
    format!("{} costs {}", beverage.description(), beverage.cost())
}

/// Cost and description accumulate additively through each wrapping layer,
/// in wrapping order.
pub fn decorator() -> Vec<String> {
    let base = SimpleCoffee;
    let first = order_line(&base);

    let with_milk = Milk { inner: base };
    let second = order_line(&with_milk);

    let with_whip = Whip { inner: with_milk };
    let third = order_line(&with_whip);

    assert_eq!(with_whip.cost(), 17);
    assert_eq!(with_whip.description(), "Simple coffee, milk, whip");

    vec![first, second, third]
}

// ============================================================================
// Facade
// ============================================================================

struct Screen;

impl Screen {
    fn lower(&self) -> String {
        "screen lowered".to_string()
    }
}

struct Projector;

impl Projector {
    fn power_on(&self) -> String {
        "projector powered on".to_string()
    }
}

struct Amplifier;

impl Amplifier {
    fn set_volume(&self, volume: u32) -> String {
        format!("amplifier volume set to {}", volume)
    }
}

/// One call drives the whole subsystem in the right order.
struct HomeTheater {
    screen: Screen,
    projector: Projector,
    amplifier: Amplifier,
}

impl HomeTheater {
    fn watch_movie(&self, title: &str) -> Vec<String> {
        vec![
            self.screen.lower(),
            self.projector.power_on(),
            self.amplifier.set_volume(5),
            format!("playing '{}'", title),
        ]
    }
}

/// The caller sees one method; the facade coordinates three subsystems.
pub fn facade() -> Vec<String> {
    let theater = HomeTheater { screen: Screen, projector: Projector, amplifier: Amplifier };
    theater.watch_movie("Big Buck Bunny")
}

// ============================================================================
// Flyweight
// ============================================================================

/// Intrinsic state shared between every tree of the same species/color.
struct TreeKind {
    species: &'static str,
    #[allow(dead_code)]
    color: &'static str,
}

struct Tree {
    x: u32,
    y: u32,
    kind: Rc<TreeKind>,
}

/// Hands out shared `TreeKind` values, allocating each distinct kind once.
#[derive(Default)]
struct Forest {
    kinds: HashMap<(&'static str, &'static str), Rc<TreeKind>>,
    trees: Vec<Tree>,
}

impl Forest {
    fn plant(&mut self, x: u32, y: u32, species: &'static str, color: &'static str) {
        let kind = self
            .kinds
            .entry((species, color))
            .or_insert_with(|| Rc::new(TreeKind { species, color }))
            .clone();
        self.trees.push(Tree { x, y, kind });
    }
}

/// Five trees, two distinct kinds; same-species trees share one allocation.
pub fn flyweight() -> Vec<String> {
    let mut forest = Forest::default();
    forest.plant(1, 1, "oak", "green");
    forest.plant(2, 2, "oak", "green");
    forest.plant(3, 3, "oak", "green");
    forest.plant(4, 4, "pine", "dark green");
    forest.plant(5, 5, "pine", "dark green");

    let oaks: Vec<&Tree> = forest.trees.iter().filter(|t| t.kind.species == "oak").collect();
    let shared = Rc::ptr_eq(&oaks[0].kind, &oaks[oaks.len() - 1].kind);
    assert!(shared);

    vec![
        format!("planted {} trees", forest.trees.len()),
        format!("allocated {} shared tree kinds", forest.kinds.len()),
        format!(
            "oaks at ({}, {}) and ({}, {}) share one kind: {}",
            oaks[0].x,
            oaks[0].y,
            oaks[oaks.len() - 1].x,
            oaks[oaks.len() - 1].y,
            shared
        ),
    ]
}

// ============================================================================
// Proxy
// ============================================================================

/// The expensive real subject; counts how often it is actually hit.
struct RemoteVideo {
    downloads: u32,
}

impl RemoteVideo {
    fn download(&mut self, id: &str) -> String {
        self.downloads += 1;
        format!("{} footage", id)
    }
}

/// Caching proxy in front of `RemoteVideo`: the first play downloads, every
/// later play is served from the cache.
struct CachingVideoProxy {
    remote: RemoteVideo,
    cache: HashMap<String, String>,
}

impl CachingVideoProxy {
    fn new() -> Self {
        Self { remote: RemoteVideo { downloads: 0 }, cache: HashMap::new() }
    }

    fn play(&mut self, id: &str) -> Vec<String> {
        if let Some(footage) = self.cache.get(id) {
            return vec![format!("playing {} from cache", footage)];
        }
        let footage = self.remote.download(id);
        let events = vec![
            format!("downloading '{}' from the network", id),
            format!("playing {}", footage),
        ];
        self.cache.insert(id.to_string(), footage);
        events
    }
}

/// Two plays of the same video hit the network exactly once.
pub fn proxy() -> Vec<String> {
    let mut player = CachingVideoProxy::new();

    let mut lines = Vec::new();
    lines.extend(player.play("intro"));
    lines.extend(player.play("intro"));
    assert_eq!(player.remote.downloads, 1);
    lines.push(format!("network downloads so far: {}", player.remote.downloads));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_translates_width_to_radius() {
        let lines = adapter();
        assert_eq!(lines[0], "round peg with radius 5.00 fits the 5.00 hole: true");
        assert_eq!(lines[1], "square peg with width 5.00 adapts to radius 3.54, fits: true");
        assert_eq!(lines[2], "square peg with width 10.00 adapts to radius 7.07, fits: false");
    }

    #[test]
    fn test_bridge_same_remote_both_devices() {
        let lines = bridge();
        assert_eq!(lines, vec!["remote raised tv volume to 40", "remote raised radio volume to 60"]);
    }

    #[test]
    fn test_composite_sums_recursively() {
        let lines = composite();
        assert_eq!(lines[0], "hammer alone costs 250");
        assert_eq!(lines[1], "small box totals 480");
        assert_eq!(lines[2], "big box totals 1180");
    }

    #[test]
    fn test_decorator_costs_accumulate() {
        let lines = decorator();
        assert_eq!(lines[0], "Simple coffee costs 10");
        assert_eq!(lines[1], "Simple coffee, milk costs 12");
        assert_eq!(lines[2], "Simple coffee, milk, whip costs 17");
    }

    #[test]
    fn test_decorator_description_is_order_dependent() {
        // Wrapping in the opposite order must flip the description suffix
        let reversed = Milk { inner: Whip { inner: SimpleCoffee } };
        assert_eq!(reversed.description(), "Simple coffee, whip, milk");
        // Cost stays additive either way
        assert_eq!(reversed.cost(), 17);
    }

    #[test]
    fn test_facade_runs_subsystems_in_order() {
        let lines = facade();
        assert_eq!(
            lines,
            vec![
                "screen lowered",
                "projector powered on",
                "amplifier volume set to 5",
                "playing 'Big Buck Bunny'"
            ]
        );
    }

    #[test]
    fn test_flyweight_shares_kinds() {
        let lines = flyweight();
        assert_eq!(lines[0], "planted 5 trees");
        assert_eq!(lines[1], "allocated 2 shared tree kinds");
        assert!(lines[2].ends_with("share one kind: true"));
    }

    #[test]
    fn test_proxy_downloads_once() {
        let lines = proxy();
        assert_eq!(lines[0], "downloading 'intro' from the network");
        assert_eq!(lines[1], "playing intro footage");
        assert_eq!(lines[2], "playing intro footage from cache");
        assert_eq!(lines[3], "network downloads so far: 1");
    }
}
