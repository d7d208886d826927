use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an entity in the world.
///
/// Queries hand these out instead of references; a stale id simply fails to
/// resolve after the entity is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// The placeable block palette. Number keys 1-7 select these in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockId {
    Dirt,
    DirtGrass,
    Bedrock,
    Stone,
    OakLog,
    OakLeaves,
    Water,
}

impl BlockId {
    /// All palette entries in selection order.
    pub const ALL: [BlockId; 7] = [
        BlockId::Dirt,
        BlockId::DirtGrass,
        BlockId::Bedrock,
        BlockId::Stone,
        BlockId::OakLog,
        BlockId::OakLeaves,
        BlockId::Water,
    ];

    /// Palette slot for a 1-based selection index (the number-key row).
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1..=7 => Some(Self::ALL[slot as usize - 1]),
            _ => None,
        }
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Transform at a position with identity rotation and unit scale.
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Axis-aligned extents anchored at the owner's position (min corner).
///
/// Dimensions must stay positive; the default is the unit block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub dimensions: Vec3,
}

impl BoundingBox {
    pub fn new(dimensions: Vec3) -> Self {
        Self { dimensions }
    }

    /// Strict containment test for a point against this box anchored at `origin`.
    ///
    /// All three axes must pass; points exactly on a face are outside.
    pub fn contains(&self, origin: Vec3, point: Vec3) -> bool {
        point.x > origin.x
            && point.x < origin.x + self.dimensions.x
            && point.y > origin.y
            && point.y < origin.y + self.dimensions.y
            && point.z > origin.z
            && point.z < origin.z + self.dimensions.z
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            dimensions: Vec3::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn block_slot_mapping() {
        assert_eq!(BlockId::from_slot(1), Some(BlockId::Dirt));
        assert_eq!(BlockId::from_slot(7), Some(BlockId::Water));
        assert_eq!(BlockId::from_slot(0), None);
        assert_eq!(BlockId::from_slot(8), None);
    }

    #[test]
    fn bounding_box_default_is_unit_cube() {
        assert_eq!(BoundingBox::default().dimensions, Vec3::ONE);
    }

    #[test]
    fn bounding_box_containment_is_strict() {
        let unit = BoundingBox::default();
        let origin = Vec3::new(5.0, 0.0, 5.0);

        assert!(unit.contains(origin, Vec3::new(5.5, 0.5, 5.5)));
        // Points on a face do not count as inside.
        assert!(!unit.contains(origin, Vec3::new(5.0, 0.5, 5.5)));
        assert!(!unit.contains(origin, Vec3::new(6.0, 0.5, 5.5)));
        assert!(!unit.contains(origin, Vec3::new(6.5, 0.0, 0.0)));
    }
}
