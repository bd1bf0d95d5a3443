//! # Gridlock Core
//!
//! Grid collision core for the Gridlock simulation engine.
//!
//! This crate provides collision handling for discrete-position entities on
//! an integer lattice: pairwise axis-aligned overlap detection each tick, and
//! positional resolution that nudges movable entities to free neighboring
//! cells while notifying both sides of every contact.
//!
//! ## Architecture
//!
//! - **Grid** ([`grid`]): cells, the named unit directions, and the fixed
//!   neighbor scan order that makes tie-breaks deterministic.
//! - **Entities** ([`entity`]): the entity record, the optional rigid-body
//!   capability, and the [`entity::Collidable`] seam the resolver works
//!   against.
//! - **Resolver** ([`resolver`]): the pure overlap predicate and the bounded
//!   work-loop that settles a tick or fails loudly.
//! - **World** ([`world`]): the entity registry and tick driver (movement
//!   first, then per-layer resolution).
//!
//! Resolution is positional, not physical: entities teleport to free cells,
//! momentum is not conserved, and sub-step (continuous) collision is out of
//! scope, as are broad-phase structures — candidate sets are meant to stay
//! small.
//!
//! ## Usage
//!
//! ```
//! use gridlock_core::{Cell, RigidBody, World};
//!
//! let mut world = World::new();
//!
//! // Two stationary bodies contesting one cell get deterministically
//! // separated, and each hears about the other exactly once.
//! for _ in 0..2 {
//!     let id = world.spawn_at(Cell::new(3, 3));
//!     if let Some(entity) = world.get_mut(id) {
//!         entity.has_collider = true;
//!         entity.attach_rigid_body(RigidBody::new());
//!     }
//! }
//!
//! let events = world.step().expect("scene has free cells");
//! assert_eq!(events.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Core modules
pub mod entity;
pub mod grid;
pub mod resolver;
pub mod world;

// Re-exports for convenience
pub use entity::{Collidable, Entity, EntityId, RigidBody};
pub use grid::Cell;
pub use resolver::{
    is_collision_detected, resolve_collisions, CollisionEvent, CollisionResolver, ResolveError,
};
pub use world::World;

#[cfg(test)]
mod tests;
