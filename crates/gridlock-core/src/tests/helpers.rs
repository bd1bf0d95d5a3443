//! Test helper functions and doubles for collision scenarios.

use crate::entity::{Collidable, Entity, EntityId, RigidBody};
use crate::grid::Cell;
use crate::world::World;

// =============================================================================
// Collision double
// =============================================================================

/// A [`Collidable`] double that records every collision notification.
///
/// Wraps a real [`Entity`] for geometry and capability state; the hook
/// appends each call's payload so tests can assert both the count and the
/// exact peers reported.
#[derive(Debug, Clone)]
pub struct Probe {
    entity: Entity,
    /// One entry per `on_collision` call, in call order.
    pub hits: Vec<Vec<EntityId>>,
}

impl Probe {
    /// A point collider at `cell` with no rigid body.
    pub fn collider_at(id: u64, cell: Cell) -> Self {
        let mut entity = Entity::new(EntityId::new(id));
        entity.position = cell;
        entity.has_collider = true;
        Self {
            entity,
            hits: Vec::new(),
        }
    }

    /// A point collider at `cell` with a stationary rigid body.
    pub fn stationary_body_at(id: u64, cell: Cell) -> Self {
        let mut probe = Self::collider_at(id, cell);
        probe.entity.attach_rigid_body(RigidBody::new());
        probe
    }

    /// A point collider at `cell` with a rigid body moving at `velocity`.
    pub fn moving_body_at(id: u64, cell: Cell, velocity: Cell) -> Self {
        let mut probe = Self::collider_at(id, cell);
        probe.entity.attach_rigid_body(RigidBody::with_velocity(velocity));
        probe
    }

    /// Applies this probe's velocity, as the driver would before resolution.
    pub fn advance(&mut self) {
        self.entity.advance();
    }

    /// Number of collision notifications received.
    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

impl Collidable for Probe {
    fn id(&self) -> EntityId {
        self.entity.id()
    }

    fn position(&self) -> Cell {
        self.entity.position
    }

    fn set_position(&mut self, cell: Cell) {
        self.entity.position = cell;
    }

    fn size(&self) -> Cell {
        self.entity.size
    }

    fn rigid_body(&self) -> Option<&RigidBody> {
        self.entity.rigid_body()
    }

    fn rigid_body_mut(&mut self) -> Option<&mut RigidBody> {
        self.entity.rigid_body_mut()
    }

    fn on_collision(&mut self, hit: &[EntityId]) {
        self.hits.push(hit.to_vec());
    }
}

// =============================================================================
// World factory functions
// =============================================================================

/// Spawns a point collider (no rigid body) at `cell`.
pub fn spawn_collider(world: &mut World, cell: Cell) -> EntityId {
    let id = world.spawn_at(cell);
    world.get_mut(id).unwrap().has_collider = true;
    id
}

/// Spawns a collider with a stationary rigid body at `cell`.
pub fn spawn_stationary_body(world: &mut World, cell: Cell) -> EntityId {
    spawn_moving_body(world, cell, Cell::ZERO)
}

/// Spawns a collider with a rigid body moving at `velocity` at `cell`.
pub fn spawn_moving_body(world: &mut World, cell: Cell, velocity: Cell) -> EntityId {
    let id = spawn_collider(world, cell);
    world
        .get_mut(id)
        .unwrap()
        .attach_rigid_body(RigidBody::with_velocity(velocity));
    id
}

/// Returns the position of `id`, panicking if it is not present.
pub fn position_of(world: &World, id: EntityId) -> Cell {
    world.get(id).unwrap().position
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RIGHT;
    use crate::resolver::resolve_collisions;

    #[test]
    fn probe_records_nothing_by_default() {
        let probe = Probe::collider_at(0, Cell::ZERO);
        assert_eq!(probe.hit_count(), 0);
        assert!(probe.rigid_body().is_none());
    }

    #[test]
    fn probe_advance_applies_velocity() {
        let mut probe = Probe::moving_body_at(0, Cell::ZERO, RIGHT);
        probe.advance();
        assert_eq!(probe.position(), RIGHT);
    }

    #[test]
    fn probe_hook_captures_the_peer() {
        let mut probes = [
            Probe::stationary_body_at(0, Cell::ZERO),
            Probe::stationary_body_at(1, Cell::ZERO),
        ];
        resolve_collisions(&mut probes).unwrap();
        assert_eq!(probes[0].hits, vec![vec![EntityId::new(1)]]);
        assert_eq!(probes[1].hits, vec![vec![EntityId::new(0)]]);
    }

    #[test]
    fn factories_wire_the_world() {
        let mut world = World::new();
        let walker = spawn_moving_body(&mut world, Cell::new(1, 1), RIGHT);
        let block = spawn_collider(&mut world, Cell::new(5, 5));

        assert!(world.get(walker).unwrap().rigid_body().is_some());
        assert!(world.get(block).unwrap().has_collider);
        assert_eq!(position_of(&world, block), Cell::new(5, 5));
    }
}
