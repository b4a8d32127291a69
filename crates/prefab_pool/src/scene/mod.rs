//! In-memory scene graph host
//!
//! [`SceneHost`] is a small hierarchical object store that implements the
//! pool capability traits. It backs the demo application and the tests, and
//! serves as the reference for wiring the registry into a real engine.
//!
//! ## Model
//!
//! ```text
//! root objects
//!   ├── Turret
//!   │     └── Gun
//!   └── [PoolContainer]   (inactive)
//!         ├── Bullet(Clone)
//!         └── Bullet(Clone)
//! ```
//!
//! An object is active in the hierarchy only when it and every ancestor are
//! active, so pooled instances under the inactive container stay hidden.

mod scene_host;
mod scene_object;

pub use scene_host::SceneHost;
pub use scene_object::SceneObject;
