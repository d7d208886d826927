//! Shared Types: entity handles, block palette, transforms, bounding boxes, config.
//!
//! # Invariants
//! - Value types only; no world state lives here.
//! - Bounding boxes are anchored at the owner's position (min corner), never centered.

pub mod config;
pub mod types;

pub use config::{ConfigError, GameConfig};
pub use types::{BlockId, BoundingBox, EntityId, Transform};
