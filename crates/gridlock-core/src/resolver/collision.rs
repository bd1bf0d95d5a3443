//! The collision resolver: a bounded work-loop that settles a tick.
//!
//! Resolution repeats sweep/notify/displace passes until a sweep finds no
//! overlap involving a rigid body:
//!
//! 1. **Sweep**: examine every unordered candidate pair once, in index order,
//!    and collect the pairs that overlap with at least one rigid body
//!    involved.
//! 2. **Notify**: fire the collision hook on both sides of every collected
//!    pair, against the positions the sweep saw, and record an event per
//!    pair. An entity stacked with several others is told about each peer
//!    separately.
//! 3. **Displace**: settle each collected pair in order. Pairs a previous
//!    displacement already separated are skipped. A stationary body is moved
//!    to its first free neighbor (scan order: west, south, east, north,
//!    judged against a snapshot of every candidate's current cell); a moving
//!    body keeps the cell its velocity carried it to; entities without a body
//!    never move.
//!
//! A displacement can create overlaps that did not exist before, which is
//! why the loop re-sweeps from scratch instead of trying to patch the pair
//! list. Progress is guaranteed per pass or reported: a pass that triggers
//! but displaces nothing can never terminate (positions are the only state),
//! so it fails fast as [`ResolveError::Stalled`]; oscillating configurations
//! are cut off by the pass budget as [`ResolveError::DidNotConverge`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::entity::{Collidable, EntityId};
use crate::grid::{unoccupied_cell, Cell};

use super::detect::{aabb_overlap, is_collision_detected};

/// Default pass budget for [`CollisionResolver::new`].
///
/// Generous for the small candidate sets this crate targets: every productive
/// pass moves at least one entity, and scenes settle in a handful of passes.
pub const DEFAULT_MAX_PASSES: u32 = 64;

/// One notified collision between two entities.
///
/// `first` and `second` follow candidate order, and `pass` is the 1-based
/// resolution pass that saw the overlap; the same pair can appear in several
/// passes if displacement keeps them in contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionEvent {
    /// The pair member that comes first in candidate order.
    pub first: EntityId,
    /// The other pair member.
    pub second: EntityId,
    /// 1-based pass in which the overlap was swept.
    pub pass: u32,
}

/// Terminal failures of collision resolution.
///
/// Both variants mean the tick's configuration cannot be settled: more
/// contesting movable entities than free cells, or an overlap no displacement
/// rule applies to (for example a moving body parked inside a plain
/// collider). Scenario design is expected to avoid these; the resolver's job
/// is to report them instead of spinning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A pass found overlaps but could not move anything; the configuration
    /// is permanently stuck.
    #[error("collision resolution stalled with {overlaps} overlap(s) after {passes} pass(es)")]
    Stalled {
        /// Passes completed when the stall was detected.
        passes: u32,
        /// Overlapping pairs still unresolved.
        overlaps: usize,
    },

    /// The pass budget ran out before a sweep came back clean.
    #[error("collision resolution did not converge within {max_passes} pass(es)")]
    DidNotConverge {
        /// The budget that was exhausted.
        max_passes: u32,
    },
}

/// Resolver for grid collisions among a candidate set of entities.
///
/// # Example
///
/// ```
/// use gridlock_core::entity::{Entity, EntityId, RigidBody};
/// use gridlock_core::grid::{DOWN, LEFT};
/// use gridlock_core::resolver::CollisionResolver;
///
/// let mut a = Entity::new(EntityId::new(0));
/// a.attach_rigid_body(RigidBody::new());
/// let mut b = Entity::new(EntityId::new(1));
/// b.attach_rigid_body(RigidBody::new());
///
/// // Two stationary bodies contest the origin; the tie-break is fixed.
/// let mut entities = [a, b];
/// let events = CollisionResolver::new().resolve(&mut entities).unwrap();
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(entities[0].position, LEFT);
/// assert_eq!(entities[1].position, DOWN);
/// ```
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    /// Upper bound on sweep/displace passes per resolution call.
    max_passes: u32,
}

impl CollisionResolver {
    /// Creates a resolver with the default pass budget.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
        }
    }

    /// Creates a resolver with a custom pass budget.
    ///
    /// Useful for tests and for embedders that prefer to fail earlier.
    #[must_use]
    pub fn with_max_passes(max_passes: u32) -> Self {
        Self { max_passes }
    }

    /// Returns the pass budget.
    #[must_use]
    pub fn max_passes(&self) -> u32 {
        self.max_passes
    }

    /// Resolves collisions among all entities in the slice.
    ///
    /// Entities are mutated in place; the returned events list every notified
    /// pair in the order the hooks fired.
    ///
    /// # Errors
    ///
    /// [`ResolveError::Stalled`] when overlaps remain that no displacement
    /// rule can move, [`ResolveError::DidNotConverge`] when the pass budget
    /// runs out.
    pub fn resolve<T: Collidable>(
        &self,
        entities: &mut [T],
    ) -> Result<Vec<CollisionEvent>, ResolveError> {
        let members: Vec<usize> = (0..entities.len()).collect();
        self.resolve_members(entities, &members)
    }

    /// Resolves collisions among the subset of `entities` selected by
    /// `members` (indices into the slice, in candidate order).
    ///
    /// This is the entry point for drivers that keep one backing slice and
    /// resolve layer groups separately.
    ///
    /// # Errors
    ///
    /// As [`CollisionResolver::resolve`].
    pub fn resolve_members<T: Collidable>(
        &self,
        entities: &mut [T],
        members: &[usize],
    ) -> Result<Vec<CollisionEvent>, ResolveError> {
        let mut events = Vec::new();
        let mut pass: u32 = 0;

        loop {
            let triggered = sweep(entities, members);
            if triggered.is_empty() {
                debug!(passes = pass, events = events.len(), "collision resolution settled");
                return Ok(events);
            }

            if pass >= self.max_passes {
                warn!(
                    max_passes = self.max_passes,
                    overlaps = triggered.len(),
                    "collision resolution ran out of passes"
                );
                return Err(ResolveError::DidNotConverge {
                    max_passes: self.max_passes,
                });
            }
            pass += 1;

            // Both sides of every overlapping pair hear about each other
            // before anything moves, so notifications reflect the positions
            // the sweep saw.
            for &(i, j) in &triggered {
                let first = entities[i].id();
                let second = entities[j].id();
                entities[i].on_collision(&[second]);
                entities[j].on_collision(&[first]);
                events.push(CollisionEvent {
                    first,
                    second,
                    pass,
                });
            }

            let mut displaced = false;
            for &(i, j) in &triggered {
                // An earlier displacement this pass may already have pulled
                // the pair apart.
                if !is_collision_detected(&entities[i], &entities[j]) {
                    continue;
                }

                let mut occupied: Vec<Cell> =
                    members.iter().map(|&k| entities[k].position()).collect();

                let target = unoccupied_cell(entities[i].position(), &occupied);
                displaced |= settle(&mut entities[i], target);

                // The first member may have moved; the second must not pick
                // the same cell.
                occupied.push(entities[i].position());
                let target = unoccupied_cell(entities[j].position(), &occupied);
                displaced |= settle(&mut entities[j], target);
            }

            if !displaced {
                warn!(
                    passes = pass,
                    overlaps = triggered.len(),
                    "collision resolution stalled"
                );
                return Err(ResolveError::Stalled {
                    passes: pass,
                    overlaps: triggered.len(),
                });
            }
        }
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves collisions among `entities` with a default-configured resolver.
///
/// # Errors
///
/// As [`CollisionResolver::resolve`].
pub fn resolve_collisions<T: Collidable>(
    entities: &mut [T],
) -> Result<Vec<CollisionEvent>, ResolveError> {
    CollisionResolver::new().resolve(entities)
}

/// Collects every unordered candidate pair that overlaps with a rigid body
/// involved, in candidate order.
fn sweep<T: Collidable>(entities: &[T], members: &[usize]) -> Vec<(usize, usize)> {
    let mut triggered = Vec::new();
    for (slot, &i) in members.iter().enumerate() {
        for &j in &members[slot + 1..] {
            let overlap = aabb_overlap(
                entities[i].position(),
                entities[i].size(),
                entities[j].position(),
                entities[j].size(),
            );
            // Two plain colliders can overlap forever; only rigid bodies
            // make a pair resolvable.
            let movable = entities[i].rigid_body().is_some() || entities[j].rigid_body().is_some();
            if overlap && movable {
                triggered.push((i, j));
            }
        }
    }
    triggered
}

/// Applies the settle rule to one pair member. Returns `true` if the entity
/// actually moved.
fn settle<T: Collidable>(entity: &mut T, target: Cell) -> bool {
    let Some(body) = entity.rigid_body() else {
        return false;
    };
    if !body.is_stationary() {
        // The body's own velocity placed it this tick; that cell stands.
        return false;
    }
    if entity.position() == target {
        return false;
    }
    entity.set_position(target);
    true
}
