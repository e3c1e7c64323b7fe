//! Collision event bus following Game Engine Architecture Ch 16.8
//!
//! Key principles:
//! - Publishing never blocks: events are queued, not delivered inline
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Delivery happens when the owner calls [`EventBus::dispatch`]

use crate::ecs::Entity;
use crate::physics::collision_groups::CollisionGroups;

/// One detected overlap, published once per ordered pair and tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollisionEvent {
    /// Entity that observed the overlap
    pub from: Entity,
    /// Entity it overlapped with
    pub to: Entity,
    /// Groups matched by `from.active & to.passive`
    pub matched: CollisionGroups,
}

impl CollisionEvent {
    /// Create a new collision event
    pub fn new(from: Entity, to: Entity, matched: CollisionGroups) -> Self {
        Self { from, to, matched }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &CollisionEvent) -> bool;
}

/// Queued publish/subscribe bus for collision events
#[derive(Default)]
pub struct EventBus {
    queue: Vec<CollisionEvent>,
    handlers: Vec<Box<dyn EventHandler>>,
}

impl EventBus {
    /// Create a new empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; handlers are offered events in registration order
    pub fn register_handler(&mut self, handler: Box<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Queue an event for the next dispatch
    pub fn publish(&mut self, event: CollisionEvent) {
        self.queue.push(event);
    }

    /// Events waiting for dispatch, oldest first
    pub fn pending(&self) -> &[CollisionEvent] {
        &self.queue
    }

    /// Deliver all queued events to the registered handlers
    ///
    /// Each event stops at the first handler that consumes it.
    pub fn dispatch(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for event in &queued {
            for handler in &mut self.handlers {
                if handler.on_event(event) {
                    break;
                }
            }
        }
    }

    /// Take all queued events without dispatching them
    pub fn drain(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}
