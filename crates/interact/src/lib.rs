//! World Interaction: ray-stepped block targeting and edits.
//!
//! # Invariants
//! - Edits go through the chunk manager; the ray never holds entity references
//!   across a mutation.
//! - A scan that reaches nothing is a no-op, distinct from placement into
//!   unloaded space.

pub mod edit;
pub mod ray;

pub use edit::{place_block, remove_block, EditOutcome};
pub use ray::RaySteps;
