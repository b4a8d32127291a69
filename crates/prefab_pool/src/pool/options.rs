//! Spawn placement options

use crate::foundation::math::{Quat, Vec3};

/// Where and how a spawned instance is placed
///
/// Defaults to a root object at the origin with identity rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOptions<H> {
    /// Parent to attach to (`None` = root)
    pub parent: Option<H>,
    /// Position relative to the parent
    pub position: Vec3,
    /// Rotation relative to the parent
    pub rotation: Quat,
}

impl<H> Default for SpawnOptions<H> {
    fn default() -> Self {
        Self {
            parent: None,
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl<H> SpawnOptions<H> {
    /// Root object at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Attach to a parent
    pub fn with_parent(mut self, parent: H) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Builder pattern: Set local position
    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder pattern: Set local rotation
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}
