//! Host capabilities the pool registry depends on
//!
//! The registry never builds, destroys, or places objects itself. It calls
//! through these traits so the same bookkeeping works for any scene graph,
//! entity store, or resource table the host provides.

use crate::foundation::math::{Quat, Vec3};
use std::fmt::Debug;
use std::hash::Hash;

/// Construction and destruction primitives of the host
///
/// Blueprints and instances share one handle type so a blueprint passed where
/// an instance is expected can be recognized.
pub trait InstanceFactory {
    /// Identity-comparable handle to a host object
    type Handle: Copy + Eq + Hash + Debug;

    /// Build a new instance from `blueprint`
    ///
    /// Must not mutate the blueprint. Returns `None` when the blueprint is no
    /// longer a usable object.
    fn construct(&mut self, blueprint: Self::Handle) -> Option<Self::Handle>;

    /// Immediately release an object and everything it owns
    ///
    /// Calling this on a handle that is already gone is a no-op.
    fn destroy(&mut self, object: Self::Handle);

    /// Whether `object` still refers to a live host object
    fn is_alive(&self, object: Self::Handle) -> bool;
}

/// Placement and visibility side effects of the host
pub trait Presentation: InstanceFactory {
    /// Create an empty object usable as a parent for other objects
    fn create_container(&mut self, name: &str) -> Self::Handle;

    /// Current parent of `object` (`None` for root objects)
    fn parent(&self, object: Self::Handle) -> Option<Self::Handle>;

    /// Reparent `object` under `parent`, or detach it to the root when `None`
    fn set_parent(&mut self, object: Self::Handle, parent: Option<Self::Handle>);

    /// Set the position and orientation of `object` relative to its parent
    fn set_local_transform(&mut self, object: Self::Handle, position: Vec3, rotation: Quat);

    /// The object's own active flag
    fn is_active(&self, object: Self::Handle) -> bool;

    /// Set the object's own active flag
    fn set_active(&mut self, object: Self::Handle, active: bool);
}

/// Everything a [`PoolRegistry`](super::PoolRegistry) needs from its host
pub trait PoolHost: Presentation {}

impl<T: Presentation> PoolHost for T {}
