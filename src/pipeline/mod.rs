//! The physics world and the stages of its step.

pub use self::broad_phase::{BroadPhase, BroadPhaseBruteForce};
pub use self::event_handler::{CollisionEvent, CollisionEventKind, EventCollector, EventHandler};
pub use self::narrow_phase::{pair_overlap, resolve_collision, PairOverlap};
pub use self::physics_world::PhysicsWorld;

mod broad_phase;
mod event_handler;
mod narrow_phase;
mod physics_world;
