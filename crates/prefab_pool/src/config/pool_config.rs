//! Pool registry configuration
//!
//! [`PoolSettings`] is the serializable form loaded from disk; blueprints are
//! named by string. [`PoolSettings::resolve`] turns it into a [`PoolConfig`]
//! holding live host handles, which is what the registry consumes.

use super::{Config, ConfigError};
use serde::{Deserialize, Serialize};

/// When the registry builds its startup pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PoolInitMode {
    /// As soon as the host signals initialization
    #[default]
    Immediate,
    /// On the host's first tick after initialization
    Deferred,
    /// Only when `create_startup_pools` is called explicitly
    Manual,
}

/// Startup pool entry as written in a settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartupPoolEntry {
    /// Name the host uses to find the blueprint
    pub blueprint: String,
    /// Instances to pre-build
    pub size: usize,
}

impl StartupPoolEntry {
    /// Create a new startup pool entry
    pub fn new(blueprint: impl Into<String>, size: usize) -> Self {
        Self {
            blueprint: blueprint.into(),
            size,
        }
    }
}

/// Serializable pool settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolSettings {
    /// When startup pools are created
    pub init_mode: PoolInitMode,
    /// Recycled instances take the blueprint's active flag instead of `false`
    pub restore_blueprint_active_state: bool,
    /// Pools to pre-warm at startup
    pub startup_pools: Vec<StartupPoolEntry>,
}

impl Config for PoolSettings {}

impl PoolSettings {
    /// Resolve blueprint names into host handles
    ///
    /// Fails on the first name `lookup` cannot find.
    pub fn resolve<B, F>(&self, mut lookup: F) -> Result<PoolConfig<B>, ConfigError>
    where
        F: FnMut(&str) -> Option<B>,
    {
        let startup_pools = self
            .startup_pools
            .iter()
            .map(|entry| {
                lookup(&entry.blueprint)
                    .map(|blueprint| StartupPool::new(blueprint, entry.size))
                    .ok_or_else(|| ConfigError::UnknownBlueprint(entry.blueprint.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PoolConfig {
            init_mode: self.init_mode,
            restore_blueprint_active_state: self.restore_blueprint_active_state,
            startup_pools,
        })
    }
}

/// A blueprint and the number of instances to pre-build for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupPool<B> {
    /// Blueprint handle
    pub blueprint: B,
    /// Instances to pre-build
    pub size: usize,
}

impl<B> StartupPool<B> {
    /// Create a new startup pool
    pub fn new(blueprint: B, size: usize) -> Self {
        Self { blueprint, size }
    }
}

/// Runtime configuration of a [`PoolRegistry`](crate::pool::PoolRegistry)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig<B> {
    /// When startup pools are created
    pub init_mode: PoolInitMode,
    /// Recycled instances take the blueprint's active flag instead of `false`
    pub restore_blueprint_active_state: bool,
    /// Pools to pre-warm at startup, in order
    pub startup_pools: Vec<StartupPool<B>>,
}

impl<B> Default for PoolConfig<B> {
    fn default() -> Self {
        Self {
            init_mode: PoolInitMode::default(),
            restore_blueprint_active_state: false,
            startup_pools: Vec::new(),
        }
    }
}

impl<B> PoolConfig<B> {
    /// Create a configuration with default settings and no startup pools
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the startup mode
    pub fn with_init_mode(mut self, init_mode: PoolInitMode) -> Self {
        self.init_mode = init_mode;
        self
    }

    /// Set the recycle activation policy
    pub fn with_restore_blueprint_active_state(mut self, restore: bool) -> Self {
        self.restore_blueprint_active_state = restore;
        self
    }

    /// Append a startup pool
    pub fn with_startup_pool(mut self, blueprint: B, size: usize) -> Self {
        self.startup_pools.push(StartupPool::new(blueprint, size));
        self
    }
}
