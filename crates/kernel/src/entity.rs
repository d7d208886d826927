use blockworld_common::{BlockId, BoundingBox, Transform};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Model name shared by every block entity; resolution to mesh data is the
/// renderer's problem.
pub const CUBE_MODEL: &str = "cube";

/// A single placed object in the world: a model reference, a block tag, and
/// where it sits.
///
/// Identity is positional in spirit; nothing prevents two entities from
/// occupying the same spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Name of the model the renderer resolves for this entity.
    pub model: String,
    pub block: BlockId,
    pub transform: Transform,
    pub bounds: BoundingBox,
}

impl Entity {
    pub fn new(model: impl Into<String>, block: BlockId, transform: Transform) -> Self {
        Self {
            model: model.into(),
            block,
            transform,
            bounds: BoundingBox::default(),
        }
    }

    /// A unit block of the given type at `position` (its min corner).
    pub fn block_at(block: BlockId, position: Vec3) -> Self {
        Self::new(CUBE_MODEL, block, Transform::at(position))
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_entity_defaults() {
        let e = Entity::block_at(BlockId::Stone, Vec3::new(3.0, 0.0, 7.0));
        assert_eq!(e.model, CUBE_MODEL);
        assert_eq!(e.block, BlockId::Stone);
        assert_eq!(e.bounds.dimensions, Vec3::ONE);
        assert_eq!(e.position(), Vec3::new(3.0, 0.0, 7.0));
    }
}
