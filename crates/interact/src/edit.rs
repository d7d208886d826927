use blockworld_common::{BlockId, EntityId, GameConfig};
use blockworld_kernel::{CellCoord, ChunkManager, Entity};
use glam::Vec3;

use crate::ray::RaySteps;

/// What a block edit did. Scans that reach nothing are no-ops; placement into
/// unloaded space is reported separately so callers can tell "nothing in
/// range" from a configuration problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    Placed {
        cell: CellCoord,
        id: EntityId,
        position: Vec3,
    },
    Removed {
        cell: CellCoord,
        id: EntityId,
    },
    NothingInRange,
    OutOfBounds,
}

/// Walk the view ray and erase the first entity it passes through.
///
/// The owning chunk is re-resolved at every sample; rays cross chunk
/// boundaries freely, and samples over unloaded cells are skipped.
pub fn remove_block(
    manager: &mut ChunkManager,
    eye: Vec3,
    forward: Vec3,
    config: &GameConfig,
) -> EditOutcome {
    for point in RaySteps::new(eye, forward, config.ray_step_size, config.ray_steps) {
        let hit = manager
            .chunk_by_xz(point.x, point.z)
            .and_then(|chunk| chunk.entity_at_point(point).map(|id| (chunk.coord(), id)));

        if let Some((cell, id)) = hit {
            manager.remove_entity(point.x, point.z, id);
            tracing::debug!(?cell, ?id, "block removed");
            return EditOutcome::Removed { cell, id };
        }
    }
    EditOutcome::NothingInRange
}

/// Walk the view ray until it passes into an entity, then place a block of
/// the selected type at the previous sample, floor-rounded onto the block
/// grid.
///
/// A hit on the very first sample (the eye is inside something) yields no
/// placement; there is no previous sample to place at.
pub fn place_block(
    manager: &mut ChunkManager,
    eye: Vec3,
    forward: Vec3,
    block: BlockId,
    config: &GameConfig,
) -> EditOutcome {
    let samples = RaySteps::new(eye, forward, config.ray_step_size, config.ray_steps);
    for (i, point) in samples.enumerate() {
        let occupied = manager
            .chunk_by_xz(point.x, point.z)
            .is_some_and(|chunk| chunk.entity_at_point(point).is_some());
        if !occupied {
            continue;
        }
        if i == 0 {
            return EditOutcome::NothingInRange;
        }

        let previous = eye + ((i - 1) as f32 * config.ray_step_size) * forward;
        let position = previous.floor();
        return match manager.add_entity(Entity::block_at(block, position)) {
            Ok((cell, id)) => {
                tracing::debug!(?cell, ?id, ?position, "block placed");
                EditOutcome::Placed { cell, id, position }
            }
            Err(err) => {
                tracing::debug!(%err, "placement out of bounds");
                EditOutcome::OutOfBounds
            }
        };
    }
    EditOutcome::NothingInRange
}
