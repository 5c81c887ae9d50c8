//! Bundled expected-output fixtures.
//!
//! One golden line sequence per catalog entry, compiled in as constants and
//! listed in registration order. `pat validate` compares live executions
//! against these; demonstration code never reads them.

use crate::models::ExpectedOutput;

/// Expected output for every built-in demonstration, in catalog order.
pub fn expected_outputs() -> Vec<ExpectedOutput> {
    vec![
        ExpectedOutput {
            name: "simple_factory",
            lines: &[
                "made a circle with 0 corners",
                "made a square with 4 corners",
                "made a triangle with 3 corners",
            ],
        },
        ExpectedOutput {
            name: "factory_method",
            lines: &["delivering by land in a box", "delivering by sea in a container"],
        },
        ExpectedOutput {
            name: "abstract_factory",
            lines: &[
                "furnished a room with a modern chair and a modern sofa",
                "furnished a room with a victorian chair and a victorian sofa",
            ],
        },
        ExpectedOutput {
            name: "builder",
            lines: &[
                "built a burger with sesame bun, beef patty, cheddar, pickles",
                "built a burger with plain bun, bean patty",
            ],
        },
        ExpectedOutput {
            name: "prototype",
            lines: &[
                "original circle at (10, 20) with radius 15",
                "cloned circle at (10, 20) with radius 30",
                "original still has radius 15",
            ],
        },
        ExpectedOutput {
            name: "singleton",
            lines: &[
                "first access reads app name 'patternbook'",
                "second access reads max retries 3",
                "both accesses share one instance: true",
            ],
        },
        ExpectedOutput {
            name: "adapter",
            lines: &[
                "round peg with radius 5.00 fits the 5.00 hole: true",
                "square peg with width 5.00 adapts to radius 3.54, fits: true",
                "square peg with width 10.00 adapts to radius 7.07, fits: false",
            ],
        },
        ExpectedOutput {
            name: "bridge",
            lines: &["remote raised tv volume to 40", "remote raised radio volume to 60"],
        },
        ExpectedOutput {
            name: "composite",
            lines: &["hammer alone costs 250", "small box totals 480", "big box totals 1180"],
        },
        ExpectedOutput {
            name: "decorator",
            lines: &[
                "Simple coffee costs 10",
                "Simple coffee, milk costs 12",
                "Simple coffee, milk, whip costs 17",
            ],
        },
        ExpectedOutput {
            name: "facade",
            lines: &[
                "screen lowered",
                "projector powered on",
                "amplifier volume set to 5",
                "playing 'Big Buck Bunny'",
            ],
        },
        ExpectedOutput {
            name: "flyweight",
            lines: &[
                "planted 5 trees",
                "allocated 2 shared tree kinds",
                "oaks at (1, 1) and (3, 3) share one kind: true",
            ],
        },
        ExpectedOutput {
            name: "proxy",
            lines: &[
                "downloading 'intro' from the network",
                "playing intro footage",
                "playing intro footage from cache",
                "network downloads so far: 1",
            ],
        },
        ExpectedOutput {
            name: "chain_of_responsibility",
            lines: &[
                "teller cannot approve 259 and passes it on",
                "supervisor cannot approve 259 and passes it on",
                "manager approved the request for 259",
            ],
        },
        ExpectedOutput {
            name: "command",
            lines: &[
                "document reads 'hello'",
                "document reads 'hello world'",
                "undo restored 'hello'",
            ],
        },
        ExpectedOutput {
            name: "iterator",
            lines: &[
                "now playing intro",
                "now playing verse",
                "now playing chorus",
                "playlist exhausted after 3 tracks",
            ],
        },
        ExpectedOutput {
            name: "mediator",
            lines: &[
                "[hh:mm] alice says: hello everyone",
                "bob received: hello everyone",
                "[hh:mm] bob says: hi alice",
                "alice received: hi alice",
            ],
        },
        ExpectedOutput {
            name: "memento",
            lines: &[
                "editor reads 'draft one'",
                "snapshot taken",
                "editor reads 'draft two'",
                "restored editor reads 'draft one'",
            ],
        },
        ExpectedOutput {
            name: "observer",
            lines: &[
                "mailer observed 'order placed'",
                "audit log observed 'order placed'",
                "mailer observed 'order shipped'",
                "audit log observed 'order shipped'",
            ],
        },
        ExpectedOutput {
            name: "visitor",
            lines: &[
                "whiskers the cat says meow",
                "rex the dog says woof",
                "pip the sparrow says tweet",
                "total legs counted: 10",
            ],
        },
        ExpectedOutput {
            name: "strategy",
            lines: &[
                "driving 12 km takes 24 minutes",
                "cycling 12 km takes 48 minutes",
                "walking 12 km takes 144 minutes",
            ],
        },
        ExpectedOutput {
            name: "state",
            lines: &[
                "coin: turnstile unlocked",
                "push: arm rotates, turnstile locked",
                "push: blocked, turnstile stays locked",
            ],
        },
        ExpectedOutput {
            name: "template_method",
            lines: &[
                "boiling water",
                "steeping the tea",
                "pouring into cup",
                "adding lemon",
                "boiling water",
                "dripping coffee through a filter",
                "pouring into cup",
                "adding sugar and milk",
            ],
        },
    ]
}
