//! World Kernel: chunked entity storage and spatial routing.
//!
//! # Invariants
//! - The chunk manager exclusively owns chunks; each chunk exclusively owns its entities.
//! - Queries return `EntityId` handles, never references that outlive the borrow.
//! - "Nothing there" is an empty `Option`; only placement into unloaded space is an error.

pub mod chunk;
pub mod entity;
pub mod manager;

pub use chunk::Chunk;
pub use entity::Entity;
pub use manager::{CellCoord, ChunkManager, WorldError};
