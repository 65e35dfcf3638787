use crate::dynamics::{RigidBodyHandle, RigidBodySet};
use crate::query::Mtv;

/// The kind of a [`CollisionEvent`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionEventKind {
    /// Two solid colliders overlapped and were pushed apart.
    Collision,
    /// At least one of the two overlapping colliders is a trigger.
    Trigger,
}

/// Reports that the collider of `body` overlapped the collider of `other`.
///
/// Every overlapping pair produces two events: one for each body.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CollisionEvent {
    /// Whether this is a collision or a trigger event.
    pub kind: CollisionEventKind,
    /// The body receiving this event.
    pub body: RigidBodyHandle,
    /// The body `body` overlapped.
    pub other: RigidBodyHandle,
    /// The overlap that was detected, before any resolution, with its axis pointing
    /// from `other` toward `body`.
    ///
    /// The two events of a pair therefore carry opposite axes: the event of the second
    /// body holds [`Mtv::flipped`] of the first one. Either body can move itself out of
    /// the overlap with `mtv.translation()`.
    pub mtv: Mtv,
}

impl CollisionEvent {
    /// Is this a trigger event?
    #[inline]
    pub fn is_trigger(&self) -> bool {
        self.kind == CollisionEventKind::Trigger
    }
}

/// Trait implemented by types that receive the events generated by the physics world.
pub trait EventHandler {
    /// Handles an overlap between two bodies.
    ///
    /// `bodies` reflects the state of the bodies after the overlap was resolved.
    fn handle_collision_event(&mut self, bodies: &RigidBodySet, event: CollisionEvent);
}

impl EventHandler for () {
    fn handle_collision_event(&mut self, _bodies: &RigidBodySet, _event: CollisionEvent) {}
}

/// An event handler that stores every event it receives.
#[derive(Clone, Debug, Default)]
pub struct EventCollector {
    /// The events received so far, in the order they were generated.
    pub events: Vec<CollisionEvent>,
}

impl EventCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all the events collected so far.
    pub fn drain(&mut self) -> std::vec::Drain<'_, CollisionEvent> {
        self.events.drain(..)
    }

    /// The events received by `body`.
    pub fn events_for(&self, body: RigidBodyHandle) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter().filter(move |e| e.body == body)
    }
}

impl EventHandler for EventCollector {
    fn handle_collision_event(&mut self, _bodies: &RigidBodySet, event: CollisionEvent) {
        self.events.push(event);
    }
}
