//! Scene host - hierarchical object store backing the pool registry

use super::SceneObject;
use crate::foundation::collections::{HandleMap, ObjectId};
use crate::foundation::math::{Quat, Transform, Vec3};
use crate::pool::{InstanceFactory, Presentation};

/// Hierarchical scene object store
///
/// Objects are addressed by generational [`ObjectId`] handles, so a handle
/// to a destroyed object is reliably reported as dead.
#[derive(Debug, Default)]
pub struct SceneHost {
    /// All live objects
    objects: HandleMap<SceneObject>,

    /// Successful `instantiate` calls
    constructed: usize,

    /// Successful `destroy` calls
    destroyed: usize,
}

impl SceneHost {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active root object at the origin
    pub fn create_object(&mut self, name: impl Into<String>) -> ObjectId {
        self.objects.insert(SceneObject::new(name))
    }

    /// Add an active object under `parent`
    ///
    /// Falls back to a root object if `parent` is dead.
    pub fn create_child(&mut self, name: impl Into<String>, parent: ObjectId) -> ObjectId {
        let id = self.create_object(name);
        self.set_parent(id, Some(parent));
        id
    }

    /// Look up an object
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// First live object with the given name
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    /// Whether `id` refers to a live object
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Number of live objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of objects built by [`instantiate`](Self::instantiate)
    pub fn constructed_count(&self) -> usize {
        self.constructed
    }

    /// Number of objects removed by [`destroy`](Self::destroy)
    ///
    /// Children removed along with their parent are not counted separately.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Whether the object and all of its ancestors are active
    pub fn is_active_in_hierarchy(&self, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            let Some(object) = self.objects.get(node) else {
                return false;
            };
            if !object.active_self {
                return false;
            }
            current = object.parent;
        }
        true
    }

    /// Transform of the object in world space
    pub fn world_transform(&self, id: ObjectId) -> Option<Transform> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            let object = self.objects.get(node)?;
            chain.push(object.transform);
            current = object.parent;
        }

        Some(
            chain
                .iter()
                .rev()
                .fold(Transform::identity(), |world, local| world.combine(local)),
        )
    }

    /// Clone `blueprint` and its children into a new root object
    ///
    /// The copy keeps the blueprint's active flag; if it comes out active it
    /// counts as one enable.
    pub fn instantiate(&mut self, blueprint: ObjectId) -> Option<ObjectId> {
        let id = self.clone_subtree(blueprint, None)?;
        if let Some(object) = self.objects.get_mut(id) {
            object.name.push_str("(Clone)");
        }
        self.note_activation(id, false);
        self.constructed += 1;
        Some(id)
    }

    fn clone_subtree(&mut self, source: ObjectId, parent: Option<ObjectId>) -> Option<ObjectId> {
        let original = self.objects.get(source)?;
        let copy = SceneObject {
            name: original.name.clone(),
            parent,
            children: Vec::new(),
            transform: original.transform,
            active_self: original.active_self,
            source: Some(source),
            enable_count: 0,
        };
        let children = original.children.clone();

        let id = self.objects.insert(copy);
        if let Some(parent_object) = parent.and_then(|p| self.objects.get_mut(p)) {
            parent_object.children.push(id);
        }
        for child in children {
            self.clone_subtree(child, Some(id));
        }
        Some(id)
    }

    /// Remove the object and its whole subtree
    ///
    /// Returns `false` if the object was already gone.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        let Some(parent) = self.objects.get(id).map(|object| object.parent) else {
            return false;
        };
        self.detach(id, parent);

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(removed) = self.objects.remove(next) {
                stack.extend(removed.children);
            }
        }
        self.destroyed += 1;
        true
    }

    /// Move the object under `parent`, or to the root when `None`
    ///
    /// Refuses dead parents and moves that would create a cycle.
    pub fn set_parent(&mut self, id: ObjectId, parent: Option<ObjectId>) -> bool {
        let Some(old_parent) = self.objects.get(id).map(|object| object.parent) else {
            return false;
        };
        if let Some(new_parent) = parent {
            if !self.is_alive(new_parent) || self.is_ancestor_or_self(id, new_parent) {
                log::warn!("Refusing to parent {:?} under {:?}", id, new_parent);
                return false;
            }
        }
        if old_parent == parent {
            return true;
        }

        let was_active = self.is_active_in_hierarchy(id);
        self.detach(id, old_parent);
        if let Some(parent_object) = parent.and_then(|p| self.objects.get_mut(p)) {
            parent_object.children.push(id);
        }
        if let Some(object) = self.objects.get_mut(id) {
            object.parent = parent;
        }
        self.note_activation(id, was_active);
        true
    }

    /// Set the object's local position and rotation, keeping its scale
    pub fn set_local_transform(&mut self, id: ObjectId, position: Vec3, rotation: Quat) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform.position = position;
            object.transform.rotation = rotation;
        }
    }

    /// Replace the object's whole local transform
    pub fn set_transform(&mut self, id: ObjectId, transform: Transform) {
        if let Some(object) = self.objects.get_mut(id) {
            object.transform = transform;
        }
    }

    /// Set the object's own active flag
    pub fn set_active(&mut self, id: ObjectId, active: bool) {
        let was_active = self.is_active_in_hierarchy(id);
        if let Some(object) = self.objects.get_mut(id) {
            object.active_self = active;
        }
        self.note_activation(id, was_active);
    }

    fn detach(&mut self, id: ObjectId, parent: Option<ObjectId>) {
        if let Some(parent_object) = parent.and_then(|p| self.objects.get_mut(p)) {
            parent_object.children.retain(|child| *child != id);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: ObjectId, node: ObjectId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.objects.get(id).and_then(|object| object.parent);
        }
        false
    }

    fn note_activation(&mut self, id: ObjectId, was_active: bool) {
        if !was_active && self.is_active_in_hierarchy(id) {
            if let Some(object) = self.objects.get_mut(id) {
                object.enable_count += 1;
            }
        }
    }
}

impl InstanceFactory for SceneHost {
    type Handle = ObjectId;

    fn construct(&mut self, blueprint: ObjectId) -> Option<ObjectId> {
        self.instantiate(blueprint)
    }

    fn destroy(&mut self, object: ObjectId) {
        SceneHost::destroy(self, object);
    }

    fn is_alive(&self, object: ObjectId) -> bool {
        SceneHost::is_alive(self, object)
    }
}

impl Presentation for SceneHost {
    fn create_container(&mut self, name: &str) -> ObjectId {
        self.create_object(name)
    }

    fn parent(&self, object: ObjectId) -> Option<ObjectId> {
        self.get(object).and_then(|o| o.parent)
    }

    fn set_parent(&mut self, object: ObjectId, parent: Option<ObjectId>) {
        SceneHost::set_parent(self, object, parent);
    }

    fn set_local_transform(&mut self, object: ObjectId, position: Vec3, rotation: Quat) {
        SceneHost::set_local_transform(self, object, position, rotation);
    }

    fn is_active(&self, object: ObjectId) -> bool {
        self.get(object).is_some_and(|o| o.active_self)
    }

    fn set_active(&mut self, object: ObjectId, active: bool) {
        SceneHost::set_active(self, object, active);
    }
}
