//! # Prefab Pool
//!
//! Blueprint-keyed instance pooling for game scenes. Instead of constructing
//! and destroying expensive objects over and over, the registry keeps idle
//! instances per blueprint and hands them back out on spawn.
//!
//! ## Features
//!
//! - **Reuse-or-create spawning**: oldest idle instance first, fresh
//!   construction when the pool is empty
//! - **Safe recycling**: blueprints are never recycled, pooled instances are
//!   never duplicated, untracked instances are destroyed
//! - **Bulk operations**: recycle or destroy everything of a blueprint
//! - **Host agnostic**: construction and placement go through capability traits
//! - **Configurable startup pools**: TOML/RON settings with init modes
//!
//! ## Quick Start
//!
//! ```rust
//! use prefab_pool::prelude::*;
//!
//! let mut scene = SceneHost::new();
//! let bullet = scene.create_object("Bullet");
//!
//! let mut pools = PoolRegistry::with_defaults(scene);
//! pools.create_pool(bullet, 8);
//!
//! let shot = pools.spawn(bullet, None, Vec3::new(0.0, 1.0, 0.0), Quat::identity())?;
//! assert_eq!(pools.count_spawned(bullet), 1);
//!
//! pools.recycle(shot)?;
//! assert_eq!(pools.count_pooled(bullet), 8);
//! # Ok::<(), PoolError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod pool;
pub mod scene;

/// Common imports for pool users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, PoolConfig, PoolInitMode, PoolSettings},
        foundation::{
            collections::ObjectId,
            math::{Quat, Transform, Vec3},
        },
        pool::{
            InstanceFactory, PoolError, PoolHost, PoolRegistry, Presentation, RecycleOutcome,
            SpawnOptions, StartupState,
        },
        scene::{SceneHost, SceneObject},
    };
}
