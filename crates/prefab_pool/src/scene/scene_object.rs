//! Scene object representation

use crate::foundation::collections::ObjectId;
use crate::foundation::math::Transform;

/// A node in the [`SceneHost`](super::SceneHost) hierarchy
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Display name (clones get a `(Clone)` suffix)
    pub name: String,

    /// Parent object, `None` for root objects
    pub parent: Option<ObjectId>,

    /// Child objects in attachment order
    pub children: Vec<ObjectId>,

    /// Transform relative to the parent
    pub transform: Transform,

    /// The object's own active flag
    pub active_self: bool,

    /// Object this one was cloned from
    pub source: Option<ObjectId>,

    /// Times the object became active in the hierarchy
    pub enable_count: u32,
}

impl SceneObject {
    /// Create an active root object at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::identity(),
            active_self: true,
            source: None,
            enable_count: 0,
        }
    }
}
