//! Pool registry - spawn, recycle, and bookkeeping for pooled instances
//!
//! The registry maps each blueprint to a FIFO queue of idle instances and
//! every spawned instance back to the blueprint it came from. An instance is
//! never in both maps at once.
//!
//! ```text
//!              spawn                       recycle
//!   Pooled ─────────────→ Spawned ─────────────────→ Pooled
//!   (queue, inactive,     (index, active,
//!    under container)      caller's parent)
//! ```
//!
//! Instances of blueprints without a pool are untracked: spawn builds them
//! fresh and recycle destroys them.

use super::error::PoolError;
use super::host::PoolHost;
use super::options::SpawnOptions;
use super::startup::StartupState;
use crate::config::{PoolConfig, PoolInitMode};
use crate::foundation::math::{Quat, Vec3};
use std::collections::{HashMap, VecDeque};

/// Name given to the holding container created by the registry
pub const CONTAINER_NAME: &str = "[PoolContainer]";

/// What a call to [`PoolRegistry::recycle`] did with the instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecycleOutcome {
    /// Returned to its blueprint's pool
    Recycled,
    /// Untracked instance destroyed
    Destroyed,
    /// Already pooled; nothing changed
    AlreadyPooled,
    /// Spawned instance was already gone from the host; dropped from the index
    Discarded,
}

/// Registry of blueprint pools and spawned instances
///
/// Owns the host for its whole lifetime; use [`host`](Self::host) and
/// [`host_mut`](Self::host_mut) to reach it and [`shutdown`](Self::shutdown)
/// to get it back.
pub struct PoolRegistry<H: PoolHost> {
    /// Construction, destruction and placement capabilities
    host: H,

    /// Inactive parent of every pooled instance
    container: H::Handle,

    /// Blueprint → idle instances, oldest first
    pooled: HashMap<H::Handle, VecDeque<H::Handle>>,

    /// Spawned instance → originating blueprint
    spawned: HashMap<H::Handle, H::Handle>,

    /// Configuration
    config: PoolConfig<H::Handle>,

    /// Startup pool progress
    startup_state: StartupState,

    /// Reused snapshot buffer for bulk recycling
    scratch: Vec<H::Handle>,
}

impl<H: PoolHost> PoolRegistry<H> {
    /// Create a registry, building its holding container in `host`
    ///
    /// Startup pools are not created here; the host triggers them through
    /// [`on_host_init`](Self::on_host_init) or
    /// [`create_startup_pools`](Self::create_startup_pools).
    pub fn new(mut host: H, config: PoolConfig<H::Handle>) -> Self {
        let container = host.create_container(CONTAINER_NAME);
        host.set_active(container, false);

        log::debug!(
            "Creating PoolRegistry (init mode {:?}, {} startup pool(s), container {:?})",
            config.init_mode,
            config.startup_pools.len(),
            container
        );

        Self {
            host,
            container,
            pooled: HashMap::new(),
            spawned: HashMap::new(),
            config,
            startup_state: StartupState::default(),
            scratch: Vec::new(),
        }
    }

    /// Create a registry with default configuration
    pub fn with_defaults(host: H) -> Self {
        Self::new(host, PoolConfig::default())
    }

    /// Shared access to the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host
    ///
    /// Changing parents or destroying pooled instances behind the registry's
    /// back is tolerated but loses those instances from the pool.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The holding container pooled instances are parented under
    pub fn container(&self) -> H::Handle {
        self.container
    }

    /// Active configuration
    pub fn config(&self) -> &PoolConfig<H::Handle> {
        &self.config
    }

    /// Startup pool progress
    pub fn startup_state(&self) -> StartupState {
        self.startup_state
    }

    // ----------------------------------------------------------------------
    // Startup
    // ----------------------------------------------------------------------

    /// Host initialization signal
    ///
    /// Builds the startup pools when `mode` is the configured init mode and
    /// they have not been built yet. Returns whether they were built.
    pub fn on_host_init(&mut self, mode: PoolInitMode) -> bool {
        if !self.startup_state.should_run(self.config.init_mode, mode) {
            log::trace!(
                "Ignoring {:?} init signal (configured {:?}, state {:?})",
                mode,
                self.config.init_mode,
                self.startup_state
            );
            return false;
        }
        self.create_startup_pools()
    }

    /// Build every configured startup pool, once
    ///
    /// Later calls return `false` and change nothing.
    pub fn create_startup_pools(&mut self) -> bool {
        if !self.startup_state.begin() {
            log::debug!("Startup pools already created");
            return false;
        }

        let startup_pools = self.config.startup_pools.clone();
        for entry in &startup_pools {
            self.create_pool(entry.blueprint, entry.size);
        }

        self.startup_state.finish();
        log::info!("Created {} startup pool(s)", startup_pools.len());
        true
    }

    // ----------------------------------------------------------------------
    // Create
    // ----------------------------------------------------------------------

    /// Register a pool for `blueprint` and pre-build `initial_size` instances
    ///
    /// Returns `false` without doing anything if the blueprint is not alive
    /// or already has a pool.
    ///
    /// The blueprint is deactivated while the instances are built so they
    /// start inactive and never observe activation; its active flag is
    /// restored afterwards.
    pub fn create_pool(&mut self, blueprint: H::Handle, initial_size: usize) -> bool {
        if !self.host.is_alive(blueprint) {
            log::warn!("Cannot create pool: blueprint {:?} is not a live object", blueprint);
            return false;
        }
        if self.pooled.contains_key(&blueprint) {
            log::trace!("Pool for {:?} already exists", blueprint);
            return false;
        }

        let mut queue = VecDeque::with_capacity(initial_size);
        if initial_size > 0 {
            let was_active = self.host.is_active(blueprint);
            self.host.set_active(blueprint, false);

            while queue.len() < initial_size {
                let Some(instance) = self.host.construct(blueprint) else {
                    log::warn!(
                        "Host stopped constructing {:?} after {} instance(s)",
                        blueprint,
                        queue.len()
                    );
                    break;
                };
                self.host.set_parent(instance, Some(self.container));
                self.host.set_active(instance, false);
                queue.push_back(instance);
            }

            self.host.set_active(blueprint, was_active);
        }

        log::info!("Created pool for {:?} with {} instance(s)", blueprint, queue.len());
        self.pooled.insert(blueprint, queue);
        true
    }

    /// Whether `blueprint` has a pool
    pub fn has_pool(&self, blueprint: H::Handle) -> bool {
        self.pooled.contains_key(&blueprint)
    }

    // ----------------------------------------------------------------------
    // Spawn
    // ----------------------------------------------------------------------

    /// Get an active instance of `blueprint` placed under `parent`
    ///
    /// A `parent` that is no longer alive places the instance at the root.
    ///
    /// Reuses the oldest pooled instance when one is available, otherwise
    /// constructs a new one. Instances of pooled blueprints are tracked as
    /// spawned; blueprints without a pool yield untracked instances.
    pub fn spawn(
        &mut self,
        blueprint: H::Handle,
        parent: Option<H::Handle>,
        position: Vec3,
        rotation: Quat,
    ) -> Result<H::Handle, PoolError> {
        let instance = match self.take_pooled(blueprint) {
            Some(instance) => instance,
            None => self
                .host
                .construct(blueprint)
                .ok_or_else(|| PoolError::InvalidBlueprint(format!("{blueprint:?}")))?,
        };

        // A destroyed parent behaves as no parent
        let parent = parent.filter(|p| self.host.is_alive(*p));
        self.host.set_parent(instance, parent);
        self.host.set_local_transform(instance, position, rotation);
        self.host.set_active(instance, true);

        if self.pooled.contains_key(&blueprint) {
            self.spawned.insert(instance, blueprint);
            log::trace!("Spawned {:?} from {:?}", instance, blueprint);
        } else {
            log::trace!("Spawned untracked {:?} from unpooled {:?}", instance, blueprint);
        }

        Ok(instance)
    }

    /// Spawn with placement taken from `options`
    pub fn spawn_with(
        &mut self,
        blueprint: H::Handle,
        options: &SpawnOptions<H::Handle>,
    ) -> Result<H::Handle, PoolError> {
        self.spawn(blueprint, options.parent, options.position, options.rotation)
    }

    /// Spawn a root instance at the origin
    pub fn spawn_default(&mut self, blueprint: H::Handle) -> Result<H::Handle, PoolError> {
        self.spawn(blueprint, None, Vec3::zeros(), Quat::identity())
    }

    /// Pop the oldest live instance from the blueprint's queue
    ///
    /// Entries destroyed out-of-band are dropped on the way.
    fn take_pooled(&mut self, blueprint: H::Handle) -> Option<H::Handle> {
        let queue = self.pooled.get_mut(&blueprint)?;
        while let Some(candidate) = queue.pop_front() {
            if self.host.is_alive(candidate) {
                return Some(candidate);
            }
            log::warn!("Discarding stale pooled instance {:?} of {:?}", candidate, blueprint);
        }
        None
    }

    // ----------------------------------------------------------------------
    // Recycle
    // ----------------------------------------------------------------------

    /// Return an instance to its pool, or destroy it if it is untracked
    ///
    /// Recycling a blueprint that owns a pool, or the holding container, is
    /// rejected with an error and changes nothing. Recycling an instance that
    /// is already pooled is a no-op.
    pub fn recycle(&mut self, instance: H::Handle) -> Result<RecycleOutcome, PoolError> {
        if self.pooled.contains_key(&instance) {
            log::error!(
                "Attempted to recycle blueprint {:?}; only spawned instances can be recycled",
                instance
            );
            return Err(PoolError::BlueprintRecycled(format!("{instance:?}")));
        }
        if instance == self.container {
            log::error!("Attempted to recycle the pool container {:?}", instance);
            return Err(PoolError::ContainerRecycled);
        }

        if let Some(blueprint) = self.spawned.remove(&instance) {
            if !self.host.is_alive(instance) {
                log::warn!(
                    "Spawned instance {:?} of {:?} was destroyed out-of-band",
                    instance,
                    blueprint
                );
                return Ok(RecycleOutcome::Discarded);
            }
            self.return_to_pool(instance, blueprint);
            log::trace!("Recycled {:?} into pool of {:?}", instance, blueprint);
            return Ok(RecycleOutcome::Recycled);
        }

        if self.host.parent(instance) == Some(self.container) {
            return Ok(RecycleOutcome::AlreadyPooled);
        }

        log::trace!("Destroying untracked instance {:?}", instance);
        self.host.destroy(instance);
        Ok(RecycleOutcome::Destroyed)
    }

    fn return_to_pool(&mut self, instance: H::Handle, blueprint: H::Handle) {
        let active = self.config.restore_blueprint_active_state && self.host.is_active(blueprint);
        self.host.set_parent(instance, Some(self.container));
        self.host.set_active(instance, active);
        self.pooled.entry(blueprint).or_default().push_back(instance);
    }

    /// Recycle every spawned instance of `blueprint`
    ///
    /// Returns how many instances went back to the pool.
    pub fn recycle_all_of(&mut self, blueprint: H::Handle) -> usize {
        let mut snapshot = std::mem::take(&mut self.scratch);
        snapshot.extend(
            self.spawned
                .iter()
                .filter(|(_, origin)| **origin == blueprint)
                .map(|(instance, _)| *instance),
        );
        let recycled = self.recycle_snapshot(&mut snapshot);
        self.scratch = snapshot;
        recycled
    }

    /// Recycle every spawned instance of every blueprint
    pub fn recycle_all(&mut self) -> usize {
        let mut snapshot = std::mem::take(&mut self.scratch);
        snapshot.extend(self.spawned.keys().copied());
        let recycled = self.recycle_snapshot(&mut snapshot);
        self.scratch = snapshot;
        recycled
    }

    /// Recycle a detached list of instances, leaving `snapshot` empty
    fn recycle_snapshot(&mut self, snapshot: &mut Vec<H::Handle>) -> usize {
        let mut recycled = 0;
        for instance in snapshot.drain(..) {
            if let Ok(RecycleOutcome::Recycled) = self.recycle(instance) {
                recycled += 1;
            }
        }
        recycled
    }

    // ----------------------------------------------------------------------
    // Destroy
    // ----------------------------------------------------------------------

    /// Destroy every pooled instance of `blueprint`
    ///
    /// Spawned instances are left alone and the pool stays registered.
    /// Returns how many live instances were destroyed; stale entries are
    /// dropped without counting.
    pub fn destroy_pooled(&mut self, blueprint: H::Handle) -> usize {
        let Some(queue) = self.pooled.get_mut(&blueprint) else {
            return 0;
        };
        let mut destroyed = 0;
        for instance in queue.drain(..) {
            if self.host.is_alive(instance) {
                self.host.destroy(instance);
                destroyed += 1;
            }
        }
        if destroyed > 0 {
            log::debug!("Destroyed {} pooled instance(s) of {:?}", destroyed, blueprint);
        }
        destroyed
    }

    /// Recycle then destroy every instance of `blueprint`
    ///
    /// Afterwards the blueprint has no pooled and no spawned instances.
    pub fn destroy_all(&mut self, blueprint: H::Handle) -> usize {
        self.recycle_all_of(blueprint);
        self.destroy_pooled(blueprint)
    }

    // ----------------------------------------------------------------------
    // Queries
    // ----------------------------------------------------------------------

    /// Number of idle instances of `blueprint`
    pub fn count_pooled(&self, blueprint: H::Handle) -> usize {
        self.pooled.get(&blueprint).map_or(0, VecDeque::len)
    }

    /// Number of spawned instances of `blueprint`
    pub fn count_spawned(&self, blueprint: H::Handle) -> usize {
        self.spawned.values().filter(|origin| **origin == blueprint).count()
    }

    /// Number of idle instances across all pools
    pub fn count_all_pooled(&self) -> usize {
        self.pooled.values().map(VecDeque::len).sum()
    }

    /// Number of spawned instances across all pools
    pub fn count_all_spawned(&self) -> usize {
        self.spawned.len()
    }

    /// Write the idle instances of `blueprint` into `out`, oldest first
    ///
    /// `out` is cleared first unless `append` is set.
    pub fn get_pooled(&self, blueprint: H::Handle, out: &mut Vec<H::Handle>, append: bool) {
        if !append {
            out.clear();
        }
        if let Some(queue) = self.pooled.get(&blueprint) {
            out.extend(queue.iter().copied());
        }
    }

    /// Write the spawned instances of `blueprint` into `out` (unordered)
    ///
    /// `out` is cleared first unless `append` is set.
    pub fn get_spawned(&self, blueprint: H::Handle, out: &mut Vec<H::Handle>, append: bool) {
        if !append {
            out.clear();
        }
        out.extend(
            self.spawned
                .iter()
                .filter(|(_, origin)| **origin == blueprint)
                .map(|(instance, _)| *instance),
        );
    }

    /// Idle instances of `blueprint`, oldest first
    pub fn pooled(&self, blueprint: H::Handle) -> Vec<H::Handle> {
        let mut out = Vec::new();
        self.get_pooled(blueprint, &mut out, false);
        out
    }

    /// Spawned instances of `blueprint`
    pub fn spawned(&self, blueprint: H::Handle) -> Vec<H::Handle> {
        let mut out = Vec::new();
        self.get_spawned(blueprint, &mut out, false);
        out
    }

    /// Whether `instance` is currently spawned from a pool
    pub fn is_spawned(&self, instance: H::Handle) -> bool {
        self.spawned.contains_key(&instance)
    }

    /// Blueprint a spawned instance came from
    pub fn blueprint_of(&self, instance: H::Handle) -> Option<H::Handle> {
        self.spawned.get(&instance).copied()
    }

    // ----------------------------------------------------------------------
    // Shutdown
    // ----------------------------------------------------------------------

    /// Destroy all pooled instances and the container, returning the host
    ///
    /// Spawned instances stay alive in the host as untracked objects.
    pub fn shutdown(mut self) -> H {
        let mut destroyed = 0;
        for (_, queue) in self.pooled.drain() {
            for instance in queue {
                if self.host.is_alive(instance) {
                    self.host.destroy(instance);
                    destroyed += 1;
                }
            }
        }
        self.host.destroy(self.container);

        log::info!(
            "PoolRegistry shutdown: destroyed {} pooled, released {} spawned instance(s)",
            destroyed,
            self.spawned.len()
        );
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneHost;
    use crate::foundation::collections::ObjectId;

    fn registry_with_blueprint() -> (PoolRegistry<SceneHost>, ObjectId) {
        let mut host = SceneHost::new();
        let blueprint = host.create_object("Bullet");
        (PoolRegistry::with_defaults(host), blueprint)
    }

    #[test]
    fn test_new_creates_inactive_container() {
        let (registry, _) = registry_with_blueprint();
        let container = registry.host().get(registry.container()).unwrap();

        assert_eq!(container.name, CONTAINER_NAME);
        assert!(!container.active_self);
    }

    #[test]
    fn test_create_pool_prewarms_under_container() {
        let (mut registry, blueprint) = registry_with_blueprint();

        assert!(registry.create_pool(blueprint, 3));
        assert_eq!(registry.count_pooled(blueprint), 3);

        for instance in registry.pooled(blueprint) {
            let object = registry.host().get(instance).unwrap();
            assert_eq!(object.parent, Some(registry.container()));
            assert_eq!(object.source, Some(blueprint));
            assert!(!object.active_self);
        }
    }

    #[test]
    fn test_create_pool_is_idempotent() {
        let (mut registry, blueprint) = registry_with_blueprint();

        assert!(registry.create_pool(blueprint, 4));
        assert!(!registry.create_pool(blueprint, 4));
        assert!(!registry.create_pool(blueprint, 10));
        assert_eq!(registry.count_pooled(blueprint), 4);
        assert_eq!(registry.host().constructed_count(), 4);
    }

    #[test]
    fn test_create_pool_rejects_dead_blueprint() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.host_mut().destroy(blueprint);

        assert!(!registry.create_pool(blueprint, 2));
        assert!(!registry.has_pool(blueprint));
        assert_eq!(registry.count_all_pooled(), 0);
    }

    #[test]
    fn test_prewarm_restores_blueprint_state_without_enabling_clones() {
        let (mut registry, blueprint) = registry_with_blueprint();
        assert!(registry.host().get(blueprint).unwrap().active_self);

        registry.create_pool(blueprint, 5);

        assert!(registry.host().get(blueprint).unwrap().active_self);
        for instance in registry.pooled(blueprint) {
            assert_eq!(registry.host().get(instance).unwrap().enable_count, 0);
        }
    }

    #[test]
    fn test_spawn_places_and_activates() {
        let (mut registry, blueprint) = registry_with_blueprint();
        let parent = registry.host_mut().create_object("Gun");
        registry.create_pool(blueprint, 1);

        let position = Vec3::new(1.0, 2.0, 3.0);
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 0.5);
        let instance = registry.spawn(blueprint, Some(parent), position, rotation).unwrap();

        let object = registry.host().get(instance).unwrap();
        assert_eq!(object.parent, Some(parent));
        assert_eq!(object.transform.position, position);
        assert_eq!(object.transform.rotation, rotation);
        assert!(object.active_self);
        assert!(registry.host().is_active_in_hierarchy(instance));
        assert_eq!(registry.blueprint_of(instance), Some(blueprint));
    }

    #[test]
    fn test_spawn_without_pool_is_untracked() {
        let (mut registry, blueprint) = registry_with_blueprint();

        let instance = registry.spawn_default(blueprint).unwrap();

        assert!(!registry.is_spawned(instance));
        assert_eq!(registry.count_spawned(blueprint), 0);
        assert!(registry.host().is_active_in_hierarchy(instance));
        assert!(!registry.has_pool(blueprint));
    }

    #[test]
    fn test_spawn_from_dead_blueprint_fails() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.host_mut().destroy(blueprint);

        let result = registry.spawn_default(blueprint);
        assert!(matches!(result, Err(PoolError::InvalidBlueprint(_))));
    }

    #[test]
    fn test_spawn_with_options() {
        let (mut registry, blueprint) = registry_with_blueprint();
        let parent = registry.host_mut().create_object("Parent");
        registry.create_pool(blueprint, 0);

        let options = SpawnOptions::new().with_parent(parent).at(Vec3::new(0.0, 5.0, 0.0));
        let instance = registry.spawn_with(blueprint, &options).unwrap();

        let object = registry.host().get(instance).unwrap();
        assert_eq!(object.parent, Some(parent));
        assert_eq!(object.transform.position, Vec3::new(0.0, 5.0, 0.0));
        assert!(registry.is_spawned(instance));
    }

    #[test]
    fn test_recycle_returns_to_pool() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 1);
        let instance = registry.spawn_default(blueprint).unwrap();

        assert_eq!(registry.recycle(instance), Ok(RecycleOutcome::Recycled));

        let object = registry.host().get(instance).unwrap();
        assert_eq!(object.parent, Some(registry.container()));
        assert!(!object.active_self);
        assert!(!registry.is_spawned(instance));
        assert_eq!(registry.pooled(blueprint), vec![instance]);
    }

    #[test]
    fn test_recycle_twice_does_not_duplicate() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 1);
        let instance = registry.spawn_default(blueprint).unwrap();

        registry.recycle(instance).unwrap();
        assert_eq!(registry.recycle(instance), Ok(RecycleOutcome::AlreadyPooled));
        assert_eq!(registry.count_pooled(blueprint), 1);
        assert!(registry.host().is_alive(instance));
    }

    #[test]
    fn test_recycle_untracked_destroys() {
        let (mut registry, blueprint) = registry_with_blueprint();
        let instance = registry.spawn_default(blueprint).unwrap();

        assert_eq!(registry.recycle(instance), Ok(RecycleOutcome::Destroyed));
        assert!(!registry.host().is_alive(instance));
    }

    #[test]
    fn test_recycle_blueprint_is_rejected() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 2);
        registry.spawn_default(blueprint).unwrap();

        let result = registry.recycle(blueprint);

        assert!(matches!(result, Err(PoolError::BlueprintRecycled(_))));
        assert!(registry.host().is_alive(blueprint));
        assert_eq!(registry.count_pooled(blueprint), 1);
        assert_eq!(registry.count_spawned(blueprint), 1);
    }

    #[test]
    fn test_recycle_container_is_rejected() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 2);
        let container = registry.container();

        assert_eq!(registry.recycle(container), Err(PoolError::ContainerRecycled));
        assert!(registry.host().is_alive(container));
        assert_eq!(registry.count_pooled(blueprint), 2);
    }

    #[test]
    fn test_recycle_restores_blueprint_active_state_when_configured() {
        let mut host = SceneHost::new();
        let blueprint = host.create_object("Bullet");
        let config = PoolConfig::new().with_restore_blueprint_active_state(true);
        let mut registry = PoolRegistry::new(host, config);
        registry.create_pool(blueprint, 1);

        let instance = registry.spawn_default(blueprint).unwrap();
        registry.recycle(instance).unwrap();

        // Own flag follows the blueprint, but the container keeps it hidden
        assert!(registry.host().get(instance).unwrap().active_self);
        assert!(!registry.host().is_active_in_hierarchy(instance));
    }

    #[test]
    fn test_recycle_destroyed_spawned_instance_is_discarded() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 1);
        let instance = registry.spawn_default(blueprint).unwrap();
        registry.host_mut().destroy(instance);

        assert_eq!(registry.recycle(instance), Ok(RecycleOutcome::Discarded));
        assert_eq!(registry.count_spawned(blueprint), 0);
        assert_eq!(registry.count_pooled(blueprint), 0);
    }

    #[test]
    fn test_get_pooled_append_and_replace() {
        let (mut registry, blueprint) = registry_with_blueprint();
        let other = registry.host_mut().create_object("Explosion");
        registry.create_pool(blueprint, 2);
        registry.create_pool(other, 3);

        let mut buffer = Vec::new();
        registry.get_pooled(blueprint, &mut buffer, false);
        assert_eq!(buffer.len(), 2);

        registry.get_pooled(other, &mut buffer, true);
        assert_eq!(buffer.len(), 5);

        registry.get_pooled(other, &mut buffer, false);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_get_spawned_append_and_replace() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 2);
        let a = registry.spawn_default(blueprint).unwrap();
        let b = registry.spawn_default(blueprint).unwrap();

        let mut buffer = vec![registry.container()];
        registry.get_spawned(blueprint, &mut buffer, true);
        assert_eq!(buffer.len(), 3);

        registry.get_spawned(blueprint, &mut buffer, false);
        buffer.sort();
        let mut expected = vec![a, b];
        expected.sort();
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_queries_on_unknown_blueprint_are_empty() {
        let (mut registry, blueprint) = registry_with_blueprint();

        assert_eq!(registry.count_pooled(blueprint), 0);
        assert_eq!(registry.count_spawned(blueprint), 0);
        assert!(registry.pooled(blueprint).is_empty());
        assert!(registry.spawned(blueprint).is_empty());
        assert_eq!(registry.destroy_pooled(blueprint), 0);
        assert_eq!(registry.recycle_all_of(blueprint), 0);
    }

    #[test]
    fn test_shutdown_destroys_pooled_and_keeps_spawned() {
        let (mut registry, blueprint) = registry_with_blueprint();
        registry.create_pool(blueprint, 3);
        let spawned = registry.spawn_default(blueprint).unwrap();
        let pooled = registry.pooled(blueprint);
        let container = registry.container();

        let host = registry.shutdown();

        assert!(host.is_alive(spawned));
        assert!(host.is_alive(blueprint));
        assert!(!host.is_alive(container));
        assert!(pooled.iter().all(|instance| !host.is_alive(*instance)));
    }
}
