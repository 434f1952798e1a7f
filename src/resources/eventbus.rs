//! Short-lived named event bus.
//!
//! UI screens and gameplay rules talk to the scene through named events:
//! anyone may [`fire`](EventBus::fire) a name, the scene
//! [`poll_and_consume`](EventBus::poll_and_consume)s the names it cares about
//! each frame. Events nobody consumed are dropped once they are older than
//! the bus TTL (one second by default), measured in simulated time.
//!
//! Subscribers registered with [`EventBus::subscribe`] are called
//! synchronously on every fire, in registration order.
use bevy_ecs::prelude::Resource;
use log::debug;
use serde_json::Value;

/// Quit the game loop.
pub const CLOSE_GAME: &str = "CloseGame";
/// Leave the pause menu and resume play.
pub const CLOSE_PAUSE_MENU: &str = "ClosePauseMenu";
/// Start a fresh run.
pub const RESTART: &str = "Restart";
/// Open the fish select screen.
pub const OPEN_FISH_SELECT: &str = "OpenFishSelect";
/// Close the fish select screen.
pub const CLOSE_FISH_SELECT: &str = "CloseFishSelect";
/// The player was eaten.
pub const GAME_OVER: &str = "GameOver";

pub const DEFAULT_EVENT_TTL: f32 = 1.0;

/// A named trigger stamped with the simulated time it was fired at.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    pub name: String,
    pub fired_at: f32,
    pub payload: Value,
}

impl GameEvent {
    pub fn age(&self, now: f32) -> f32 {
        now - self.fired_at
    }
}

pub type Subscriber = Box<dyn Fn(&GameEvent) + Send + Sync>;

#[derive(Resource)]
pub struct EventBus {
    events: Vec<GameEvent>,
    subscribers: Vec<Subscriber>,
    now: f32,
    ttl: f32,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_EVENT_TTL)
    }

    pub fn with_ttl(ttl: f32) -> Self {
        Self {
            events: Vec::new(),
            subscribers: Vec::new(),
            now: 0.0,
            ttl,
        }
    }

    /// Fire `name` with no payload.
    pub fn fire(&mut self, name: impl Into<String>) {
        self.fire_with(name, Value::Null);
    }

    /// Fire `name` carrying `payload`.
    pub fn fire_with(&mut self, name: impl Into<String>, payload: Value) {
        let event = GameEvent {
            name: name.into(),
            fired_at: self.now,
            payload,
        };
        debug!("event fired: {} at {:.3}", event.name, event.fired_at);
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
        self.events.push(event);
    }

    /// Call `subscriber` on every future fire.
    pub fn subscribe(&mut self, subscriber: impl Fn(&GameEvent) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// True if at least one `name` event is stored; all of them are removed.
    pub fn poll_and_consume(&mut self, name: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.name != name);
        self.events.len() != before
    }

    /// Remove and return every stored `name` event, oldest first.
    pub fn take(&mut self, name: &str) -> Vec<GameEvent> {
        let (taken, kept): (Vec<_>, Vec<_>) =
            self.events.drain(..).partition(|e| e.name == name);
        self.events = kept;
        taken
    }

    /// Peek without consuming.
    pub fn has_fired(&self, name: &str) -> bool {
        self.events.iter().any(|e| e.name == name)
    }

    /// Advance the bus clock to `now` and drop events older than the TTL.
    pub fn tick(&mut self, now: f32) {
        self.now = now;
        let ttl = self.ttl;
        self.events.retain(|e| e.age(now) <= ttl);
    }

    pub fn now(&self) -> f32 {
        self.now
    }

    pub fn ttl(&self) -> f32 {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
