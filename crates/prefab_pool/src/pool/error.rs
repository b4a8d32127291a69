//! Pool registry errors

use thiserror::Error;

/// Errors reported by [`PoolRegistry`](super::PoolRegistry) operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A blueprint that owns a pool was passed to recycle
    #[error("Cannot recycle blueprint {0}: it owns a pool and is not a spawned instance")]
    BlueprintRecycled(String),

    /// The registry's own holding container was passed to recycle
    #[error("Cannot recycle the pool container")]
    ContainerRecycled,

    /// The host could not construct from the blueprint
    #[error("Blueprint {0} is not a live object")]
    InvalidBlueprint(String),
}
