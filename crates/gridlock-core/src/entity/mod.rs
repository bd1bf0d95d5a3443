//! Entity types for the collision core.
//!
//! This module provides:
//! - [`EntityId`]: unique identifier for entities
//! - [`Entity`]: the concrete simulation entity (cell, extent, layer,
//!   collider flag, optional rigid body)
//! - [`Collidable`]: the seam the collision resolver works against
//!
//! # Architecture
//!
//! The resolver never owns entities and never spawns or destroys them; it
//! only reads and writes positions and fires the collision hook. Everything
//! it needs is expressed by the [`Collidable`] trait, so tests (and embedders
//! with their own entity representation) substitute doubles by implementing
//! the trait rather than by subclassing anything.
//!
//! The rigid-body capability is an explicit `Option<RigidBody>` owned by the
//! entity: attached on request, absent by default, never looked up by type.

pub mod components;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::Cell;

pub use components::RigidBody;

/// Unique identifier for an entity.
///
/// `EntityId` is a newtype wrapper around `u64` that provides type safety and
/// a clear semantic meaning. Entity IDs are immutable once assigned and must
/// be unique within a [`crate::world::World`].
///
/// # Ordering
///
/// Entity IDs are ordered by their numeric value. Spawn order and ID order
/// coincide, which keeps candidate iteration deterministic.
///
/// # Example
///
/// ```
/// use gridlock_core::entity::EntityId;
///
/// let id1 = EntityId::new(1);
/// let id2 = EntityId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// The interface the collision resolver requires of a candidate entity.
///
/// [`Entity`] implements this with a no-op collision hook. Custom entity
/// types (including test probes) implement it to observe collisions.
pub trait Collidable {
    /// Returns the entity's unique identifier.
    fn id(&self) -> EntityId;

    /// Returns the low corner of the entity's box.
    fn position(&self) -> Cell;

    /// Moves the entity to `cell` (positional correction only).
    fn set_position(&mut self, cell: Cell);

    /// Returns the extent from the low corner to the high corner.
    fn size(&self) -> Cell;

    /// Returns the rigid-body capability, if attached.
    fn rigid_body(&self) -> Option<&RigidBody>;

    /// Returns the rigid-body capability mutably, if attached.
    fn rigid_body_mut(&mut self) -> Option<&mut RigidBody>;

    /// Collision notification hook; default is a no-op.
    ///
    /// Called once per colliding pair the entity is part of, with the peer's
    /// ID as a one-element slice. An entity overlapping several others in the
    /// same pass receives one call per pair, not one aggregated call.
    fn on_collision(&mut self, hit: &[EntityId]) {
        let _ = hit;
    }
}

/// A simulation entity occupying an axis-aligned box on the grid.
///
/// `position` is the low corner of the box and `size` the extent to the high
/// corner; the default size of zero makes the entity a single cell. `layer`
/// groups colliders: the driver only resolves entities against others on the
/// same layer. `has_collider` opts the entity into collision handling at all.
///
/// # Example
///
/// ```
/// use gridlock_core::entity::{Entity, EntityId, RigidBody};
/// use gridlock_core::grid::{Cell, RIGHT};
///
/// let mut walker = Entity::new(EntityId::new(7));
/// walker.position = Cell::new(2, 5);
/// walker.has_collider = true;
/// walker.attach_rigid_body(RigidBody::with_velocity(RIGHT));
///
/// assert!(walker.rigid_body().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    /// Low corner of the entity's box.
    pub position: Cell,
    /// Extent from the low corner to the high corner; zero means one cell.
    pub size: Cell,
    /// Collision group; only same-layer entities are resolved together.
    pub layer: i32,
    /// Whether the entity takes part in collision handling at all.
    pub has_collider: bool,
    body: Option<RigidBody>,
}

impl Entity {
    /// Creates an entity at the origin: point-sized, layer 0, collider off,
    /// no rigid body.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: Cell::ZERO,
            size: Cell::ZERO,
            layer: 0,
            has_collider: false,
            body: None,
        }
    }

    /// Returns the entity's unique identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Attaches a rigid body, replacing any existing one, and returns it for
    /// further configuration.
    pub fn attach_rigid_body(&mut self, body: RigidBody) -> &mut RigidBody {
        self.body.insert(body)
    }

    /// Returns the rigid-body capability, if attached.
    #[must_use]
    pub const fn rigid_body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    /// Returns the rigid-body capability mutably, if attached.
    pub fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }

    /// Applies the rigid body's velocity to the entity's position.
    ///
    /// The driver calls this once per tick, before collision resolution.
    /// Entities without a body do not move.
    pub fn advance(&mut self) {
        if let Some(body) = self.body.as_mut() {
            let step = body.advance();
            self.position += step;
        }
    }
}

impl Collidable for Entity {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Cell {
        self.position
    }

    fn set_position(&mut self, cell: Cell) {
        self.position = cell;
    }

    fn size(&self) -> Cell {
        self.size
    }

    fn rigid_body(&self) -> Option<&RigidBody> {
        self.body.as_ref()
    }

    fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        self.body.as_mut()
    }
}
