//! Blueprint-keyed instance pooling
//!
//! [`PoolRegistry`] keeps a FIFO queue of idle instances per blueprint and
//! tracks which blueprint every spawned instance came from, so instances can
//! be recycled instead of destroyed. All construction, destruction and
//! placement goes through the [`host`] capability traits.
//!
//! ## Lifecycle
//!
//! 1. `PoolRegistry::new(host, config)` creates the holding container
//! 2. the host fires `on_host_init` (or calls `create_startup_pools`)
//! 3. `spawn` / `recycle` / bulk operations / queries for the rest of the run
//! 4. `shutdown` destroys what is pooled and hands the host back

pub mod host;

mod error;
mod options;
mod registry;
mod startup;

#[cfg(test)]
mod tests;

pub use error::PoolError;
pub use host::{InstanceFactory, PoolHost, Presentation};
pub use options::SpawnOptions;
pub use registry::{PoolRegistry, RecycleOutcome, CONTAINER_NAME};
pub use startup::StartupState;
