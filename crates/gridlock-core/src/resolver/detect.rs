//! Pairwise overlap detection for axis-aligned boxes on the grid.

use crate::entity::Collidable;
use crate::grid::Cell;

/// Returns `true` if two axis-aligned boxes overlap.
///
/// Boxes span the closed interval from their low corner to `low + size`, so
/// boxes that merely touch along an edge or corner count as overlapping, and
/// zero-sized boxes overlap exactly when their cells coincide. The test finds
/// a separating axis and reports overlap when none exists.
///
/// # Example
///
/// ```
/// use gridlock_core::grid::Cell;
/// use gridlock_core::resolver::aabb_overlap;
///
/// let unit = Cell::new(1, 1);
/// // Touching corners still collide: the interval test is inclusive.
/// assert!(aabb_overlap(Cell::ZERO, unit, Cell::new(1, 1), unit));
/// assert!(!aabb_overlap(Cell::ZERO, unit, Cell::new(3, 0), unit));
/// ```
#[must_use]
pub fn aabb_overlap(a_low: Cell, a_size: Cell, b_low: Cell, b_size: Cell) -> bool {
    let a_high = a_low + a_size;
    let b_high = b_low + b_size;

    // A gap on either axis is a separating axis: no overlap.
    if a_high.x < b_low.x || a_low.x > b_high.x {
        return false;
    }
    if a_high.y < b_low.y || a_low.y > b_high.y {
        return false;
    }

    true
}

/// Returns `true` if the boxes of two entities overlap.
///
/// Pure and symmetric. Collider flags and layers are not consulted; callers
/// filter candidates before asking.
#[must_use]
pub fn is_collision_detected<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable,
    B: Collidable,
{
    aabb_overlap(a.position(), a.size(), b.position(), b.size())
}
