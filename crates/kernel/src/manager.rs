use std::collections::HashMap;

use blockworld_common::{BlockId, EntityId};
use glam::Vec3;

use crate::chunk::Chunk;
use crate::entity::Entity;

/// A 2D cell coordinate in the world grid (ignoring Y axis for partitioning).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellCoord {
    pub x: i32,
    pub z: i32,
}

impl CellCoord {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

/// Errors from world mutations. Lookups that find nothing stay `Option`.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("no chunk covers ({x:.1}, {z:.1})")]
    OutOfBounds { x: f32, z: f32 },
}

/// Owns every chunk and routes world positions to the chunk covering them.
///
/// The loaded region is fixed at construction; a coordinate outside every
/// loaded chunk resolves to `None` and signals out-of-bounds to the caller.
pub struct ChunkManager {
    cell_size: f32,
    chunks: HashMap<CellCoord, Chunk>,
}

impl ChunkManager {
    /// Create a manager with no loaded chunks.
    pub fn new(cell_size: f32) -> Self {
        assert!(cell_size > 0.0, "cell_size must be positive");
        Self {
            cell_size,
            chunks: HashMap::new(),
        }
    }

    /// Pre-create empty chunks for every cell in `[-half_extent, half_extent]²`.
    pub fn load_square(&mut self, half_extent: i32) {
        for x in -half_extent..=half_extent {
            for z in -half_extent..=half_extent {
                let coord = CellCoord::new(x, z);
                self.chunks.entry(coord).or_insert_with(|| {
                    tracing::debug!(?coord, "loading chunk");
                    Chunk::new(coord)
                });
            }
        }
    }

    /// A bounded world with one layer of `surface` blocks at y = 0 across
    /// every loaded chunk.
    pub fn flat_world(half_extent: i32, cell_size: f32, surface: BlockId) -> Self {
        let mut manager = Self::new(cell_size);
        manager.load_square(half_extent);

        let span = cell_size as i32;
        for (coord, chunk) in manager.chunks.iter_mut() {
            for bx in 0..span {
                for bz in 0..span {
                    let position = Vec3::new(
                        (coord.x * span + bx) as f32,
                        0.0,
                        (coord.z * span + bz) as f32,
                    );
                    chunk.insert(Entity::block_at(surface, position));
                }
            }
        }
        manager
    }

    /// Cell size used for routing.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Convert a world (x, z) to a cell coordinate.
    pub fn cell_at(&self, x: f32, z: f32) -> CellCoord {
        CellCoord {
            x: (x / self.cell_size).floor() as i32,
            z: (z / self.cell_size).floor() as i32,
        }
    }

    /// The chunk covering world (x, z), if that cell is loaded.
    pub fn chunk_by_xz(&self, x: f32, z: f32) -> Option<&Chunk> {
        self.chunks.get(&self.cell_at(x, z))
    }

    pub fn chunk_by_xz_mut(&mut self, x: f32, z: f32) -> Option<&mut Chunk> {
        let coord = self.cell_at(x, z);
        self.chunks.get_mut(&coord)
    }

    pub fn chunk(&self, coord: CellCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Insert an entity into the chunk covering its own position.
    pub fn add_entity(&mut self, entity: Entity) -> Result<(CellCoord, EntityId), WorldError> {
        let p = entity.position();
        let coord = self.cell_at(p.x, p.z);
        let chunk = self.chunks.get_mut(&coord).ok_or(WorldError::OutOfBounds {
            x: p.x,
            z: p.z,
        })?;
        let id = chunk.insert(entity);
        tracing::debug!(?coord, ?id, "entity added");
        Ok((coord, id))
    }

    /// Erase an entity from the chunk covering world (x, z).
    ///
    /// The caller passes the coordinates it already resolved the entity at,
    /// so only that chunk is touched.
    pub fn remove_entity(&mut self, x: f32, z: f32, id: EntityId) -> Option<Entity> {
        let removed = self.chunk_by_xz_mut(x, z)?.remove(id);
        if removed.is_some() {
            tracing::debug!(?id, "entity removed");
        }
        removed
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Total entities across all chunks.
    pub fn entity_count(&self) -> usize {
        self.chunks.values().map(Chunk::len).sum()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }
}
