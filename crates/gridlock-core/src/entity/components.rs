//! Optional entity capabilities.
//!
//! The only capability the collision core knows is [`RigidBody`]: movement by
//! whole cells each tick, plus the settle behavior the resolver invokes when
//! the body is involved in an overlap.

use serde::{Deserialize, Serialize};

use crate::grid::Cell;

/// Movement capability for an entity.
///
/// A rigid body carries a velocity in cells per tick. The driver applies it
/// once per tick via [`RigidBody::advance`]; the collision resolver then uses
/// the body's state to decide how an overlap settles:
///
/// - a **stationary** body (zero velocity) is nudged to an explicitly chosen
///   free neighbor cell;
/// - a **moving** body keeps the cell its own velocity carried it to, even if
///   that cell is contested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Displacement applied to the owner each tick, in cells.
    pub velocity: Cell,
    /// Whether the last `advance` actually moved the owner. Per-tick state,
    /// not persisted.
    #[serde(skip)]
    moved: bool,
}

impl RigidBody {
    /// Creates a stationary rigid body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a rigid body with the given velocity.
    #[must_use]
    pub fn with_velocity(velocity: Cell) -> Self {
        Self {
            velocity,
            moved: false,
        }
    }

    /// Records whether this tick's movement is real and returns the
    /// displacement to apply to the owner's position.
    pub fn advance(&mut self) -> Cell {
        self.moved = self.velocity != Cell::ZERO;
        self.velocity
    }

    /// Whether the body had nonzero velocity when the tick's movement was
    /// applied.
    #[must_use]
    pub const fn moved_this_tick(&self) -> bool {
        self.moved
    }

    /// Whether the body currently has zero velocity.
    ///
    /// Stationary bodies are the ones the resolver actively displaces.
    #[must_use]
    pub fn is_stationary(&self) -> bool {
        self.velocity == Cell::ZERO
    }
}
