//! Test module for the collision core.
//!
//! - `helpers.rs`: factory functions and the `Probe` collision double
//! - `integration.rs`: end-to-end scenarios for resolver and world
//! - `determinism.rs`: replay and ordering guarantees
//! - `properties.rs`: property-based tests for the algebraic invariants

mod helpers;

// Re-export for convenience
pub use helpers::*;
