//! Behavioral pattern demonstrations.
//!
//! Collaboration shapes over locally constructed objects: a handler chain
//! that forwards until someone accepts, a mediator relaying between
//! participants, observers notified in subscription order, and a visitor
//! modeled as an exhaustively matched enum rather than double dispatch.
//! The mediator transcript uses the fixed `[hh:mm]` placeholder so output
//! stays reproducible.

// ============================================================================
// Chain of Responsibility
// ============================================================================

struct Approver {
    title: &'static str,
    capacity: u32,
}

/// The request walks the chain until the first handler with enough
/// capacity accepts it. A request nobody can approve is an internal
/// defect of the demonstration.
fn approve(chain: &[Approver], amount: u32, lines: &mut Vec<String>) -> &'static str {
    for approver in chain {
        if approver.capacity >= amount {
            lines.push(format!("{} approved the request for {}", approver.title, amount));
            return approver.title;
        }
        lines.push(format!("{} cannot approve {} and passes it on", approver.title, amount));
    }
    panic!("no handler in the chain could approve {}", amount);
}

/// Capacities [100, 200, 300]; a request for 259 is declined twice and
/// accepted by the third handler.
pub fn chain_of_responsibility() -> Vec<String> {
    let chain = [
        Approver { title: "teller", capacity: 100 },
        Approver { title: "supervisor", capacity: 200 },
        Approver { title: "manager", capacity: 300 },
    ];

    let mut lines = Vec::new();
    let accepted_by = approve(&chain, 259, &mut lines);
    assert_eq!(accepted_by, "manager");
    lines
}

// ============================================================================
// Command
// ============================================================================

enum EditCommand {
    Append(&'static str),
}

/// Invoker holding the document plus an undo history of prior states.
struct DocumentEditor {
    text: String,
    history: Vec<String>,
}

impl DocumentEditor {
    fn new() -> Self {
        Self { text: String::new(), history: Vec::new() }
    }

    fn apply(&mut self, command: EditCommand) {
        self.history.push(self.text.clone());
        match command {
            EditCommand::Append(suffix) => self.text.push_str(suffix),
        }
    }

    fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.text = previous;
        }
    }
}

/// Edits are reified as command values, so they can be undone.
pub fn command() -> Vec<String> {
    let mut editor = DocumentEditor::new();

    let mut lines = Vec::new();
    editor.apply(EditCommand::Append("hello"));
    lines.push(format!("document reads '{}'", editor.text));
    editor.apply(EditCommand::Append(" world"));
    lines.push(format!("document reads '{}'", editor.text));
    editor.undo();
    lines.push(format!("undo restored '{}'", editor.text));
    lines
}

// ============================================================================
// Iterator
// ============================================================================

struct Playlist {
    tracks: Vec<&'static str>,
}

impl Playlist {
    fn iter(&self) -> PlaylistIter<'_> {
        PlaylistIter { tracks: &self.tracks, pos: 0 }
    }
}

/// External iterator over the playlist; the collection's layout stays
/// hidden behind `next`.
struct PlaylistIter<'a> {
    tracks: &'a [&'static str],
    pos: usize,
}

impl<'a> Iterator for PlaylistIter<'a> {
    type Item = &'static str;

    fn next(&mut self) -> Option<&'static str> {
        let track = *self.tracks.get(self.pos)?;
        self.pos += 1;
        Some(track)
    }
}

/// Traversal goes through the standard `Iterator` contract.
pub fn iterator() -> Vec<String> {
    let playlist = Playlist { tracks: vec!["intro", "verse", "chorus"] };

    let mut lines: Vec<String> =
        playlist.iter().map(|track| format!("now playing {}", track)).collect();
    lines.push(format!("playlist exhausted after {} tracks", playlist.tracks.len()));
    lines
}

// ============================================================================
// Mediator
// ============================================================================

/// The chat room is the single place participants talk through; senders
/// never address each other directly. Timestamps are abstracted to the
/// fixed `[hh:mm]` placeholder so the transcript is reproducible.
struct ChatRoom {
    members: Vec<&'static str>,
}

impl ChatRoom {
    fn broadcast(&self, from: &'static str, text: &str) -> Vec<String> {
        let mut lines = vec![format!("[hh:mm] {} says: {}", from, text)];
        for member in self.members.iter().filter(|&&m| m != from) {
            lines.push(format!("{} received: {}", member, text));
        }
        lines
    }
}

/// Every message routes through the room, which relays it to the others.
pub fn mediator() -> Vec<String> {
    let room = ChatRoom { members: vec!["alice", "bob"] };

    let mut lines = Vec::new();
    lines.extend(room.broadcast("alice", "hello everyone"));
    lines.extend(room.broadcast("bob", "hi alice"));
    lines
}

// ============================================================================
// Memento
// ============================================================================

/// Opaque snapshot of the editor's state; only the editor can read it back.
struct Snapshot {
    text: String,
}

struct TextEditor {
    text: String,
}

impl TextEditor {
    fn snapshot(&self) -> Snapshot {
        Snapshot { text: self.text.clone() }
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.text.clone();
    }
}

/// State is captured, changed, and rolled back through an opaque snapshot.
pub fn memento() -> Vec<String> {
    let mut editor = TextEditor { text: "draft one".to_string() };

    let mut lines = Vec::new();
    lines.push(format!("editor reads '{}'", editor.text));
    let saved = editor.snapshot();
    lines.push("snapshot taken".to_string());
    editor.text = "draft two".to_string();
    lines.push(format!("editor reads '{}'", editor.text));
    editor.restore(&saved);
    lines.push(format!("restored editor reads '{}'", editor.text));
    lines
}

// ============================================================================
// Observer
// ============================================================================

trait Observer {
    fn name(&self) -> &'static str;

    fn notify(&self, event: &str) -> String {
        format!("{} observed '{}'", self.name(), event)
    }
}

struct Mailer;
struct AuditLog;

impl Observer for Mailer {
    fn name(&self) -> &'static str {
        "mailer"
    }
}

impl Observer for AuditLog {
    fn name(&self) -> &'static str {
        "audit log"
    }
}

/// Publisher notifying subscribers in subscription order.
struct OrderEvents {
    subscribers: Vec<Box<dyn Observer>>,
}

impl OrderEvents {
    fn publish(&self, event: &str) -> Vec<String> {
        self.subscribers.iter().map(|s| s.notify(event)).collect()
    }
}

/// Both subscribers see every event, in subscription order.
pub fn observer() -> Vec<String> {
    let events = OrderEvents { subscribers: vec![Box::new(Mailer), Box::new(AuditLog)] };

    let mut lines = Vec::new();
    lines.extend(events.publish("order placed"));
    lines.extend(events.publish("order shipped"));
    lines
}

// ============================================================================
// Visitor
// ============================================================================

/// Closed set of variants; every operation over it is an exhaustive match,
/// so adding a variant is a compile-time-checked change at each operation.
enum Animal {
    Cat { name: &'static str },
    Dog { name: &'static str },
    Sparrow { name: &'static str },
}

impl Animal {
    fn speak(&self) -> String {
        match self {
            Animal::Cat { name } => format!("{} the cat says meow", name),
            Animal::Dog { name } => format!("{} the dog says woof", name),
            Animal::Sparrow { name } => format!("{} the sparrow says tweet", name),
        }
    }

    fn legs(&self) -> u32 {
        match self {
            Animal::Cat { .. } | Animal::Dog { .. } => 4,
            Animal::Sparrow { .. } => 2,
        }
    }
}

/// Two independent operations dispatch over the same variant set.
pub fn visitor() -> Vec<String> {
    let zoo = [
        Animal::Cat { name: "whiskers" },
        Animal::Dog { name: "rex" },
        Animal::Sparrow { name: "pip" },
    ];

    let mut lines: Vec<String> = zoo.iter().map(Animal::speak).collect();
    let legs: u32 = zoo.iter().map(Animal::legs).sum();
    lines.push(format!("total legs counted: {}", legs));
    lines
}

// ============================================================================
// Strategy
// ============================================================================

trait RouteStrategy {
    fn label(&self) -> &'static str;
    fn minutes(&self, km: u32) -> u32;
}

struct Driving;
struct Cycling;
struct Walking;

impl RouteStrategy for Driving {
    fn label(&self) -> &'static str {
        "driving"
    }

    fn minutes(&self, km: u32) -> u32 {
        km * 2
    }
}

impl RouteStrategy for Cycling {
    fn label(&self) -> &'static str {
        "cycling"
    }

    fn minutes(&self, km: u32) -> u32 {
        km * 4
    }
}

impl RouteStrategy for Walking {
    fn label(&self) -> &'static str {
        "walking"
    }

    fn minutes(&self, km: u32) -> u32 {
        km * 12
    }
}

fn plan_route(strategy: &dyn RouteStrategy, km: u32) -> String {
    format!("{} {} km takes {} minutes", strategy.label(), km, strategy.minutes(km))
}

/// The same planning call runs with interchangeable routing algorithms.
pub fn strategy() -> Vec<String> {
    let strategies: [&dyn RouteStrategy; 3] = [&Driving, &Cycling, &Walking];
    strategies.iter().map(|s| plan_route(*s, 12)).collect()
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turnstile {
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy)]
enum TurnstileEvent {
    Coin,
    Push,
}

/// Transition table: each (state, event) pair yields the next state and a
/// report of what happened.
fn step(state: Turnstile, event: TurnstileEvent) -> (Turnstile, String) {
    match (state, event) {
        (Turnstile::Locked, TurnstileEvent::Coin) => {
            (Turnstile::Unlocked, "coin: turnstile unlocked".to_string())
        }
        (Turnstile::Locked, TurnstileEvent::Push) => {
            (Turnstile::Locked, "push: blocked, turnstile stays locked".to_string())
        }
        (Turnstile::Unlocked, TurnstileEvent::Coin) => {
            (Turnstile::Unlocked, "coin: already unlocked, coin returned".to_string())
        }
        (Turnstile::Unlocked, TurnstileEvent::Push) => {
            (Turnstile::Locked, "push: arm rotates, turnstile locked".to_string())
        }
    }
}

/// Behavior changes with the current state, never with flags in the caller.
pub fn state() -> Vec<String> {
    let events = [TurnstileEvent::Coin, TurnstileEvent::Push, TurnstileEvent::Push];

    let mut current = Turnstile::Locked;
    let mut lines = Vec::new();
    for event in events {
        let (next, line) = step(current, event);
        current = next;
        lines.push(line);
    }
    assert_eq!(current, Turnstile::Locked);
    lines
}

// ============================================================================
// Template Method
// ============================================================================

/// `prepare` fixes the brewing skeleton; concrete drinks fill in the two
/// varying steps.
trait HotDrink {
    fn brew(&self) -> String;
    fn condiments(&self) -> String;

    fn prepare(&self) -> Vec<String> {
        vec![
            "boiling water".to_string(),
            self.brew(),
            "pouring into cup".to_string(),
            self.condiments(),
        ]
    }
}

struct Tea;
struct Coffee;

impl HotDrink for Tea {
    fn brew(&self) -> String {
        "steeping the tea".to_string()
    }

    fn condiments(&self) -> String {
        "adding lemon".to_string()
    }
}

impl HotDrink for Coffee {
    fn brew(&self) -> String {
        "dripping coffee through a filter".to_string()
    }

    fn condiments(&self) -> String {
        "adding sugar and milk".to_string()
    }
}

/// Two drinks share the same fixed skeleton with different steps inside.
pub fn template_method() -> Vec<String> {
    let mut lines = Tea.prepare();
    lines.extend(Coffee.prepare());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_first_capable_handler_accepts() {
        let lines = chain_of_responsibility();
        assert_eq!(
            lines,
            vec![
                "teller cannot approve 259 and passes it on",
                "supervisor cannot approve 259 and passes it on",
                "manager approved the request for 259"
            ]
        );
    }

    #[test]
    fn test_chain_smaller_request_stops_earlier() {
        let chain = [
            Approver { title: "teller", capacity: 100 },
            Approver { title: "supervisor", capacity: 200 },
            Approver { title: "manager", capacity: 300 },
        ];
        let mut lines = Vec::new();
        assert_eq!(approve(&chain, 90, &mut lines), "teller");
        assert_eq!(lines.len(), 1);
    }

    #[test]
    #[should_panic(expected = "no handler in the chain could approve")]
    fn test_chain_unapprovable_request_is_a_fault() {
        let chain = [Approver { title: "teller", capacity: 100 }];
        approve(&chain, 5000, &mut Vec::new());
    }

    #[test]
    fn test_command_undo_restores_previous_state() {
        let lines = command();
        assert_eq!(lines[0], "document reads 'hello'");
        assert_eq!(lines[1], "document reads 'hello world'");
        assert_eq!(lines[2], "undo restored 'hello'");
    }

    #[test]
    fn test_iterator_walks_tracks_in_order() {
        let lines = iterator();
        assert_eq!(lines[0], "now playing intro");
        assert_eq!(lines[1], "now playing verse");
        assert_eq!(lines[2], "now playing chorus");
        assert_eq!(lines[3], "playlist exhausted after 3 tracks");
    }

    #[test]
    fn test_mediator_relays_to_other_members_only() {
        let lines = mediator();
        assert_eq!(lines[0], "[hh:mm] alice says: hello everyone");
        assert_eq!(lines[1], "bob received: hello everyone");
        assert_eq!(lines[2], "[hh:mm] bob says: hi alice");
        assert_eq!(lines[3], "alice received: hi alice");
    }

    #[test]
    fn test_mediator_uses_placeholder_timestamps() {
        // No real clock may leak into the transcript
        for line in mediator() {
            if line.contains("says:") {
                assert!(line.starts_with("[hh:mm] "));
            }
        }
    }

    #[test]
    fn test_memento_round_trip() {
        let lines = memento();
        assert_eq!(lines[0], "editor reads 'draft one'");
        assert_eq!(lines[3], "restored editor reads 'draft one'");
    }

    #[test]
    fn test_observer_notifies_in_subscription_order() {
        let lines = observer();
        assert_eq!(
            lines,
            vec![
                "mailer observed 'order placed'",
                "audit log observed 'order placed'",
                "mailer observed 'order shipped'",
                "audit log observed 'order shipped'"
            ]
        );
    }

    #[test]
    fn test_visitor_dispatches_exhaustively() {
        let lines = visitor();
        assert_eq!(lines[0], "whiskers the cat says meow");
        assert_eq!(lines[1], "rex the dog says woof");
        assert_eq!(lines[2], "pip the sparrow says tweet");
        assert_eq!(lines[3], "total legs counted: 10");
    }

    #[test]
    fn test_strategy_swaps_algorithms() {
        let lines = strategy();
        assert_eq!(lines[0], "driving 12 km takes 24 minutes");
        assert_eq!(lines[1], "cycling 12 km takes 48 minutes");
        assert_eq!(lines[2], "walking 12 km takes 144 minutes");
    }

    #[test]
    fn test_state_transitions() {
        let lines = state();
        assert_eq!(lines[0], "coin: turnstile unlocked");
        assert_eq!(lines[1], "push: arm rotates, turnstile locked");
        assert_eq!(lines[2], "push: blocked, turnstile stays locked");
    }

    #[test]
    fn test_state_coin_while_unlocked_is_returned() {
        let (next, line) = step(Turnstile::Unlocked, TurnstileEvent::Coin);
        assert_eq!(next, Turnstile::Unlocked);
        assert_eq!(line, "coin: already unlocked, coin returned");
    }

    #[test]
    fn test_template_method_fixes_the_skeleton() {
        let lines = template_method();
        assert_eq!(lines.len(), 8);
        // Both drinks share the invariant steps at the same offsets
        assert_eq!(lines[0], "boiling water");
        assert_eq!(lines[2], "pouring into cup");
        assert_eq!(lines[4], "boiling water");
        assert_eq!(lines[6], "pouring into cup");
        // And differ in the hook steps
        assert_eq!(lines[1], "steeping the tea");
        assert_eq!(lines[5], "dripping coffee through a filter");
    }
}
