use std::collections::BTreeMap;

use blockworld_common::{BoundingBox, EntityId};
use glam::Vec3;

use crate::entity::Entity;
use crate::manager::CellCoord;

/// A spatial partition owning the entities inside its bounds.
///
/// Storage is a `BTreeMap` keyed by `EntityId`, so iteration (and therefore
/// which entity a query reports "first") is deterministic. Duplicate
/// placements at one position are allowed; the chunk does not deduplicate.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    coord: CellCoord,
    entities: BTreeMap<EntityId, Entity>,
}

impl Chunk {
    pub fn new(coord: CellCoord) -> Self {
        Self {
            coord,
            entities: BTreeMap::new(),
        }
    }

    /// The cell this chunk covers.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Insert an entity and return its handle.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new();
        self.entities.insert(id, entity);
        id
    }

    /// Erase a specific entity. Returns its data if the handle was live.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// First entity whose box strictly contains `point`, if any.
    ///
    /// Used for ray-cast block targeting; a point resting exactly on a face
    /// does not count as inside.
    pub fn entity_at_point(&self, point: Vec3) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, e)| e.bounds.contains(e.position(), point))
            .map(|(id, _)| *id)
    }

    /// First entity the candidate box would collide with when anchored at
    /// `position`, if any.
    ///
    /// The test places the candidate's min corner against each entity's box
    /// and requires the strict per-axis check to pass on all three axes. The
    /// candidate bounds ride along for the swept call shape; their dimensions
    /// must be positive.
    pub fn entity_by_box_collision(&self, position: Vec3, bounds: &BoundingBox) -> Option<EntityId> {
        debug_assert!(bounds.dimensions.cmpgt(Vec3::ZERO).all());
        self.entities
            .iter()
            .find(|(_, e)| e.bounds.contains(e.position(), position))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(id, e)| (*id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockworld_common::BlockId;

    fn chunk_with_block(position: Vec3) -> (Chunk, EntityId) {
        let mut chunk = Chunk::new(CellCoord::new(0, 0));
        let id = chunk.insert(Entity::block_at(BlockId::Dirt, position));
        (chunk, id)
    }

    #[test]
    fn point_lookup_finds_containing_entity() {
        let (chunk, id) = chunk_with_block(Vec3::new(5.0, 0.0, 5.0));

        assert_eq!(chunk.entity_at_point(Vec3::new(5.5, 0.5, 5.5)), Some(id));
        assert_eq!(chunk.entity_at_point(Vec3::new(6.5, 0.0, 0.0)), None);
    }

    #[test]
    fn point_on_face_is_not_inside() {
        let (chunk, _) = chunk_with_block(Vec3::new(5.0, 0.0, 5.0));
        assert_eq!(chunk.entity_at_point(Vec3::new(5.0, 0.5, 5.5)), None);
    }

    #[test]
    fn single_axis_overlap_is_not_a_hit() {
        // The candidate sits inside the block's XZ column but well above it.
        // Overlap on one axis alone must not register as a collision.
        let (chunk, _) = chunk_with_block(Vec3::ZERO);
        let probe = BoundingBox::default();

        assert_eq!(
            chunk.entity_by_box_collision(Vec3::new(0.5, 5.0, 0.5), &probe),
            None
        );
        assert_eq!(
            chunk.entity_by_box_collision(Vec3::new(5.0, 0.5, 0.5), &probe),
            None
        );
    }

    #[test]
    fn all_axis_overlap_is_a_hit() {
        let (chunk, id) = chunk_with_block(Vec3::ZERO);
        let probe = BoundingBox::default();

        assert_eq!(
            chunk.entity_by_box_collision(Vec3::new(0.5, 0.5, 0.5), &probe),
            Some(id)
        );
    }

    #[test]
    fn duplicate_placement_is_allowed() {
        let (mut chunk, first) = chunk_with_block(Vec3::ZERO);
        let second = chunk.insert(Entity::block_at(BlockId::Stone, Vec3::ZERO));

        assert_ne!(first, second);
        assert_eq!(chunk.len(), 2);
    }

    #[test]
    fn remove_by_handle() {
        let (mut chunk, id) = chunk_with_block(Vec3::ZERO);

        assert!(chunk.remove(id).is_some());
        assert!(chunk.is_empty());
        // A stale handle resolves to nothing rather than dangling.
        assert!(chunk.remove(id).is_none());
        assert!(chunk.get(id).is_none());
    }
}
