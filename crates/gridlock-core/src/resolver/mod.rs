//! Collision detection and resolution.
//!
//! The resolver is the write phase of a tick: the driver applies rigid-body
//! movement first, then hands the candidate entities here. Detection is a
//! pure pairwise predicate; resolution mutates entity positions in place and
//! fires the notification hook on both sides of every overlapping pair.
//!
//! # Invariants
//!
//! - Resolution is deterministic: candidate order, pair order, and the
//!   neighbor scan order are all fixed.
//! - Only entities carrying a rigid body are ever displaced; a pair of plain
//!   colliders can detect an overlap but never triggers resolution.
//! - Filtering by collider flag or layer happens before entities get here;
//!   the resolver treats every candidate it is given as eligible.
//!
//! # Available pieces
//!
//! - [`is_collision_detected`] / [`aabb_overlap`]: the standalone predicate
//! - [`CollisionResolver`]: the bounded work-loop that settles a tick
//! - [`resolve_collisions`]: one-shot resolution with default settings

mod collision;
mod detect;

pub use collision::{
    resolve_collisions, CollisionEvent, CollisionResolver, ResolveError, DEFAULT_MAX_PASSES,
};
pub use detect::{aabb_overlap, is_collision_detected};
