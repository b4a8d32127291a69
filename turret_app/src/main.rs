//! Turret demo showcasing pooled projectiles
//!
//! Headless simulation: a turret sweeps toward random aim points and fires
//! pooled bullets from its gun. Bullets that reach their range spawn a pooled
//! explosion and recycle themselves; explosions recycle after a short life.
//!
//! Pass a `.toml` or `.ron` settings file as the first argument to override
//! the built-in pool settings.

use prefab_pool::config::{Config, ConfigError, PoolInitMode, PoolSettings};
use prefab_pool::foundation::collections::ObjectId;
use prefab_pool::foundation::logging;
use prefab_pool::foundation::math::{Quat, Vec3};
use prefab_pool::pool::{PoolError, PoolRegistry, SpawnOptions};
use prefab_pool::scene::SceneHost;
use rand::Rng;
use std::f32::consts::FRAC_PI_2;
use thiserror::Error;

// Simulation configuration
const TICK: f32 = 1.0 / 60.0;
const SIMULATION_TICKS: usize = 720;        // 12 seconds
const FIRE_INTERVAL: f32 = 0.25;            // Seconds between shots
const TURRET_ROTATION_SPEED: f32 = 2.0;     // Radians per second
const BULLET_SPEED: f32 = 20.0;
const BULLET_RANGE: f32 = 15.0;
const EXPLOSION_LIFETIME: f32 = 0.6;
// Gun mount point relative to the turret base
const GUN_OFFSET: [f32; 3] = [0.0, 0.5, -1.2];

const DEFAULT_SETTINGS: &str = r#"
init_mode = "Deferred"

[[startup_pools]]
blueprint = "Bullet"
size = 5

[[startup_pools]]
blueprint = "Explosion"
size = 5
"#;

/// Demo errors
#[derive(Debug, Error)]
enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Scene object missing: {0}")]
    MissingObject(&'static str),
}

struct Bullet {
    id: ObjectId,
    travelled: f32,
}

struct Explosion {
    id: ObjectId,
    age: f32,
}

struct TurretDemoApp {
    pools: PoolRegistry<SceneHost>,

    // Blueprints
    bullet_prefab: ObjectId,
    explosion_prefab: ObjectId,

    // Turret hierarchy
    turret: ObjectId,
    gun: ObjectId,
    yaw: f32,
    target_yaw: f32,

    // Live projectiles
    bullets: Vec<Bullet>,
    explosions: Vec<Explosion>,

    // Stats
    fire_timer: f32,
    shots_fired: usize,
    peak_bullets: usize,
}

impl TurretDemoApp {
    fn new(settings: &PoolSettings) -> Result<Self, DemoError> {
        log::info!("Building turret scene...");
        let mut scene = SceneHost::new();

        // Blueprints live under an inactive root so they never show up themselves
        let prefabs = scene.create_object("[Prefabs]");
        scene.set_active(prefabs, false);
        let bullet_prefab = scene.create_child("Bullet", prefabs);
        scene.create_child("Tracer", bullet_prefab);
        let explosion_prefab = scene.create_child("Explosion", prefabs);
        scene.create_child("Sparks", explosion_prefab);

        let turret = scene.create_object("Turret");
        let gun = scene.create_child("Gun", turret);
        scene.set_local_transform(gun, Vec3::from(GUN_OFFSET), Quat::identity());

        let config = settings.resolve(|name| scene.find_by_name(name))?;
        let mut pools = PoolRegistry::new(scene, config);
        pools.on_host_init(PoolInitMode::Immediate);

        Ok(Self {
            pools,
            bullet_prefab,
            explosion_prefab,
            turret,
            gun,
            yaw: 0.0,
            target_yaw: 0.0,
            bullets: Vec::new(),
            explosions: Vec::new(),
            fire_timer: 0.0,
            shots_fired: 0,
            peak_bullets: 0,
        })
    }

    fn run(&mut self, rng: &mut impl Rng, ticks: usize) -> Result<(), DemoError> {
        // First tick: deferred startup pools
        self.pools.on_host_init(PoolInitMode::Deferred);

        for _ in 0..ticks {
            self.update(TICK, rng)?;
        }
        Ok(())
    }

    fn update(&mut self, delta_time: f32, rng: &mut impl Rng) -> Result<(), DemoError> {
        self.aim(delta_time, rng);
        self.fire(delta_time)?;
        self.move_bullets(delta_time)?;
        self.age_explosions(delta_time)?;
        Ok(())
    }

    /// Turn toward the current aim point, picking a new one once reached
    fn aim(&mut self, delta_time: f32, rng: &mut impl Rng) {
        let remaining = self.target_yaw - self.yaw;
        let step = TURRET_ROTATION_SPEED * delta_time;
        if remaining.abs() <= step {
            self.yaw = self.target_yaw;
            self.target_yaw = rng.gen_range(-FRAC_PI_2..FRAC_PI_2);
        } else {
            self.yaw += step * remaining.signum();
        }

        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), self.yaw);
        self.pools
            .host_mut()
            .set_local_transform(self.turret, Vec3::zeros(), rotation);
    }

    fn fire(&mut self, delta_time: f32) -> Result<(), DemoError> {
        self.fire_timer += delta_time;
        if self.fire_timer < FIRE_INTERVAL {
            return Ok(());
        }
        self.fire_timer -= FIRE_INTERVAL;

        let muzzle = self
            .pools
            .host()
            .world_transform(self.gun)
            .ok_or(DemoError::MissingObject("Gun"))?;
        let options = SpawnOptions::new()
            .at(muzzle.position)
            .with_rotation(muzzle.rotation);
        let id = self.pools.spawn_with(self.bullet_prefab, &options)?;

        self.bullets.push(Bullet { id, travelled: 0.0 });
        self.shots_fired += 1;
        self.peak_bullets = self.peak_bullets.max(self.bullets.len());
        Ok(())
    }

    fn move_bullets(&mut self, delta_time: f32) -> Result<(), DemoError> {
        let step = BULLET_SPEED * delta_time;
        let host = self.pools.host_mut();
        let mut impacts = Vec::new();

        for bullet in &mut self.bullets {
            let transform = host
                .get(bullet.id)
                .map(|object| object.transform)
                .ok_or(DemoError::MissingObject("Bullet"))?;
            let position = transform.position + transform.forward() * step;
            host.set_local_transform(bullet.id, position, transform.rotation);

            bullet.travelled += step;
            if bullet.travelled >= BULLET_RANGE {
                impacts.push((bullet.id, position));
            }
        }
        self.bullets.retain(|bullet| bullet.travelled < BULLET_RANGE);

        for (bullet, position) in impacts {
            let explosion = self
                .pools
                .spawn(self.explosion_prefab, None, position, Quat::identity())?;
            self.explosions.push(Explosion { id: explosion, age: 0.0 });
            self.pools.recycle(bullet)?;
        }
        Ok(())
    }

    fn age_explosions(&mut self, delta_time: f32) -> Result<(), DemoError> {
        let mut expired = Vec::new();
        for explosion in &mut self.explosions {
            explosion.age += delta_time;
            if explosion.age >= EXPLOSION_LIFETIME {
                expired.push(explosion.id);
            }
        }
        self.explosions.retain(|explosion| explosion.age < EXPLOSION_LIFETIME);

        for id in expired {
            self.pools.recycle(id)?;
        }
        Ok(())
    }

    fn report(&self) {
        let pools = &self.pools;
        log::info!(
            "Shots fired: {}, peak bullets in flight: {}",
            self.shots_fired,
            self.peak_bullets
        );
        log::info!(
            "Bullet pool: {} pooled / {} spawned",
            pools.count_pooled(self.bullet_prefab),
            pools.count_spawned(self.bullet_prefab)
        );
        log::info!(
            "Explosion pool: {} pooled / {} spawned",
            pools.count_pooled(self.explosion_prefab),
            pools.count_spawned(self.explosion_prefab)
        );
        log::info!(
            "Instances constructed: {} (total pooled {})",
            pools.host().constructed_count(),
            pools.count_all_pooled()
        );
    }

    fn shutdown(mut self) -> SceneHost {
        let recycled = self.pools.recycle_all();
        log::info!("Recycled {} live instance(s) before shutdown", recycled);
        self.pools.shutdown()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    logging::init_with_default_filter("info");

    log::info!("Starting turret pool demo");

    let settings = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading pool settings from {}", path);
            PoolSettings::load_from_file(&path)?
        }
        None => PoolSettings::from_toml_str(DEFAULT_SETTINGS)?,
    };

    let mut app = TurretDemoApp::new(&settings)?;
    let result = app.run(&mut rand::thread_rng(), SIMULATION_TICKS);
    app.report();

    match result {
        Ok(()) => {
            let scene = app.shutdown();
            log::info!("Turret demo completed with {} scene object(s) left", scene.object_count());
            Ok(())
        }
        Err(e) => {
            log::error!("Turret demo failed: {:?}", e);
            Err(e.into())
        }
    }
}
