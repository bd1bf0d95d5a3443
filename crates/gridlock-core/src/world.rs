//! World: the entity container and tick driver.
//!
//! The `World` owns every entity, assigns their IDs, and drives the two
//! phases of a tick in the required order: rigid-body movement first, then
//! collision resolution. Collision work is split by layer: colliders only
//! ever meet colliders on their own layer, and entities without the collider
//! flag are invisible to resolution entirely.
//!
//! # Determinism
//!
//! Entities are stored in spawn order and IDs are handed out monotonically,
//! so candidate order inside a layer group, and the order layer groups run
//! in, are stable across runs. Replaying the same setup yields the same
//! positions and the same event list.
//!
//! # Example
//!
//! ```
//! use gridlock_core::entity::RigidBody;
//! use gridlock_core::grid::{Cell, RIGHT};
//! use gridlock_core::world::World;
//!
//! let mut world = World::new();
//! let walker = world.spawn_at(Cell::new(0, 0));
//! if let Some(entity) = world.get_mut(walker) {
//!     entity.has_collider = true;
//!     entity.attach_rigid_body(RigidBody::with_velocity(RIGHT));
//! }
//!
//! let events = world.step().expect("open scene settles");
//! assert!(events.is_empty());
//! assert_eq!(world.get(walker).unwrap().position, Cell::new(1, 0));
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entity::{Entity, EntityId};
use crate::grid::Cell;
use crate::resolver::{CollisionEvent, CollisionResolver, ResolveError};

/// Entity container and tick driver.
///
/// Spawning registers an entity into the active set; despawning removes it.
/// The collision subsystem itself never creates or destroys entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// Active entities in spawn order.
    entities: Vec<Entity>,
    /// Next ID to hand out; IDs are never reused within a world.
    next_id: u64,
    /// Completed ticks.
    tick: u64,
    /// Resolver configuration for this world.
    #[serde(skip)]
    resolver: CollisionResolver,
}

impl World {
    /// Creates an empty world with a default-configured resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty world that resolves with the given resolver.
    #[must_use]
    pub fn with_resolver(resolver: CollisionResolver) -> Self {
        Self {
            resolver,
            ..Self::default()
        }
    }

    /// Spawns a default entity at the origin and returns its ID.
    pub fn spawn(&mut self) -> EntityId {
        self.spawn_at(Cell::ZERO)
    }

    /// Spawns a default entity at `cell` and returns its ID.
    ///
    /// The entity starts point-sized on layer 0 with its collider off and no
    /// rigid body; configure it through [`World::get_mut`].
    pub fn spawn_at(&mut self, cell: Cell) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;

        let mut entity = Entity::new(id);
        entity.position = cell;
        self.entities.push(entity);
        id
    }

    /// Removes an entity from the active set, returning it if present.
    pub fn despawn(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|entity| entity.id() == id)?;
        Some(self.entities.remove(index))
    }

    /// Returns the entity with `id`, if present.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// Returns the entity with `id` mutably, if present.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.id() == id)
    }

    /// Iterates over all active entities in spawn order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Returns the number of active entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the world has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Runs one tick: apply rigid-body movement, then resolve collisions per
    /// layer. Returns the tick's collision events in notification order.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from the first layer group that cannot be
    /// settled; positions already mutated this tick are kept.
    pub fn step(&mut self) -> Result<Vec<CollisionEvent>, ResolveError> {
        self.tick += 1;

        let mut moved = 0usize;
        for entity in &mut self.entities {
            entity.advance();
            if entity
                .rigid_body()
                .is_some_and(|body| body.moved_this_tick())
            {
                moved += 1;
            }
        }
        trace!(tick = self.tick, moved, "advanced rigid bodies");

        let mut layers: Vec<i32> = self
            .entities
            .iter()
            .filter(|entity| entity.has_collider)
            .map(|entity| entity.layer)
            .collect();
        layers.sort_unstable();
        layers.dedup();

        let mut events = Vec::new();
        for layer in layers {
            let members: Vec<usize> = self
                .entities
                .iter()
                .enumerate()
                .filter(|(_, entity)| entity.has_collider && entity.layer == layer)
                .map(|(index, _)| index)
                .collect();
            events.extend(self.resolver.resolve_members(&mut self.entities, &members)?);
        }

        trace!(tick = self.tick, events = events.len(), "tick resolved");
        Ok(events)
    }
}
