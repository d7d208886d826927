use blockworld_common::EntityId;
use blockworld_kernel::{CellCoord, ChunkManager};
use blockworld_sim::Player;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the chunked world and the player for
/// debugging and development UI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world and player state.
    pub fn summary(world: &ChunkManager, player: &Player) -> WorldSummary {
        let p = player.position();
        WorldSummary {
            chunk_count: world.chunk_count(),
            entity_count: world.entity_count(),
            player_position: [p.x, p.y, p.z],
            player_grounded: player.on_ground(),
        }
    }

    /// Look up a specific entity in the chunk covering world (x, z).
    pub fn inspect_entity(
        world: &ChunkManager,
        x: f32,
        z: f32,
        id: EntityId,
    ) -> Option<EntityInfo> {
        let chunk = world.chunk_by_xz(x, z)?;
        chunk.get(id).map(|e| {
            let p = e.position();
            EntityInfo {
                id,
                block: format!("{:?}", e.block),
                position: [p.x, p.y, p.z],
            }
        })
    }

    /// All loaded cells with their entity counts, in a stable order.
    pub fn list_chunks(world: &ChunkManager) -> Vec<(CellCoord, usize)> {
        let mut cells: Vec<_> = world.chunks().map(|c| (c.coord(), c.len())).collect();
        cells.sort_by_key(|(coord, _)| (coord.x, coord.z));
        cells
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone)]
pub struct WorldSummary {
    pub chunk_count: usize,
    pub entity_count: usize,
    pub player_position: [f32; 3],
    pub player_grounded: bool,
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "World: chunks={} entities={} player=({:.2}, {:.2}, {:.2}) grounded={}",
            self.chunk_count,
            self.entity_count,
            self.player_position[0],
            self.player_position[1],
            self.player_position[2],
            self.player_grounded
        )
    }
}

/// Detailed info about a single entity.
#[derive(Debug, Clone)]
pub struct EntityInfo {
    pub id: EntityId,
    pub block: String,
    pub position: [f32; 3],
}

impl std::fmt::Display for EntityInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entity [{:.8}] {} at ({:.2}, {:.2}, {:.2})",
            &self.id.0.to_string()[..8],
            self.block,
            self.position[0],
            self.position[1],
            self.position[2]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_common::{BlockId, GameConfig};
    use blockworld_kernel::Entity;
    use glam::Vec3;

    #[test]
    fn summary_counts_world_and_player() {
        let manager = ChunkManager::flat_world(1, 16.0, BlockId::DirtGrass);
        let player = Player::new(GameConfig::default());

        let summary = WorldInspector::summary(&manager, &player);
        assert_eq!(summary.chunk_count, 9);
        assert_eq!(summary.entity_count, 9 * 16 * 16);
        assert!(summary.player_grounded);
        assert!(format!("{summary}").contains("entities=2304"));
    }

    #[test]
    fn inspect_entity_resolves_handles() {
        let mut manager = ChunkManager::new(16.0);
        manager.load_square(1);
        let (_, id) = manager
            .add_entity(Entity::block_at(BlockId::OakLog, Vec3::new(3.0, 0.0, 3.0)))
            .unwrap();

        let info = WorldInspector::inspect_entity(&manager, 3.0, 3.0, id).unwrap();
        assert_eq!(info.position, [3.0, 0.0, 3.0]);
        assert!(format!("{info}").contains("OakLog"));

        // A stale handle resolves to nothing.
        manager.remove_entity(3.0, 3.0, id);
        assert!(WorldInspector::inspect_entity(&manager, 3.0, 3.0, id).is_none());
    }

    #[test]
    fn chunk_listing_is_sorted() {
        let manager = ChunkManager::flat_world(1, 16.0, BlockId::Dirt);
        let cells = WorldInspector::list_chunks(&manager);
        assert_eq!(cells.len(), 9);
        assert_eq!(cells.first().unwrap().0, CellCoord::new(-1, -1));
        assert_eq!(cells.last().unwrap().0, CellCoord::new(1, 1));
    }
}
