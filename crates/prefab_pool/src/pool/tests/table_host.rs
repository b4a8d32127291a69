//! Registry driven by a flat handle table instead of a scene graph

use crate::foundation::math::{Quat, Vec3};
use crate::pool::{InstanceFactory, PoolRegistry, Presentation, RecycleOutcome};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Slot {
    template: Option<u32>,
    parent: Option<u32>,
    position: Vec3,
    active: bool,
}

/// Host where every object is a numbered slot
#[derive(Debug, Default)]
struct TableHost {
    slots: HashMap<u32, Slot>,
    next_id: u32,
    activations: Vec<(u32, bool)>,
}

impl TableHost {
    fn add(&mut self, template: Option<u32>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.slots.insert(
            id,
            Slot {
                template,
                parent: None,
                position: Vec3::zeros(),
                active: true,
            },
        );
        id
    }
}

impl InstanceFactory for TableHost {
    type Handle = u32;

    fn construct(&mut self, blueprint: u32) -> Option<u32> {
        let active = self.slots.get(&blueprint)?.active;
        let id = self.add(Some(blueprint));
        if let Some(slot) = self.slots.get_mut(&id) {
            slot.active = active;
        }
        Some(id)
    }

    fn destroy(&mut self, object: u32) {
        self.slots.remove(&object);
    }

    fn is_alive(&self, object: u32) -> bool {
        self.slots.contains_key(&object)
    }
}

impl Presentation for TableHost {
    fn create_container(&mut self, _name: &str) -> u32 {
        self.add(None)
    }

    fn parent(&self, object: u32) -> Option<u32> {
        self.slots.get(&object).and_then(|slot| slot.parent)
    }

    fn set_parent(&mut self, object: u32, parent: Option<u32>) {
        if let Some(slot) = self.slots.get_mut(&object) {
            slot.parent = parent;
        }
    }

    fn set_local_transform(&mut self, object: u32, position: Vec3, _rotation: Quat) {
        if let Some(slot) = self.slots.get_mut(&object) {
            slot.position = position;
        }
    }

    fn is_active(&self, object: u32) -> bool {
        self.slots.get(&object).is_some_and(|slot| slot.active)
    }

    fn set_active(&mut self, object: u32, active: bool) {
        if let Some(slot) = self.slots.get_mut(&object) {
            slot.active = active;
        }
        self.activations.push((object, active));
    }
}

#[test]
fn test_table_host_round_trip() {
    let mut host = TableHost::default();
    let blueprint = host.add(None);
    let mut registry = PoolRegistry::with_defaults(host);
    registry.create_pool(blueprint, 2);

    let instance = registry
        .spawn(blueprint, None, Vec3::new(1.0, 1.0, 1.0), Quat::identity())
        .unwrap();
    let slot = registry.host().slots.get(&instance).unwrap();
    assert_eq!(slot.template, Some(blueprint));
    assert_eq!(slot.parent, None);
    assert_eq!(slot.position, Vec3::new(1.0, 1.0, 1.0));
    assert!(slot.active);

    assert_eq!(registry.recycle(instance), Ok(RecycleOutcome::Recycled));
    let slot = registry.host().slots.get(&instance).unwrap();
    assert_eq!(slot.parent, Some(registry.container()));
    assert!(!slot.active);
}

#[test]
fn test_prewarm_suspends_and_restores_blueprint() {
    let mut host = TableHost::default();
    let blueprint = host.add(None);
    let mut registry = PoolRegistry::with_defaults(host);

    registry.create_pool(blueprint, 3);

    let blueprint_toggles: Vec<bool> = registry
        .host()
        .activations
        .iter()
        .filter(|(object, _)| *object == blueprint)
        .map(|(_, active)| *active)
        .collect();
    assert_eq!(blueprint_toggles, vec![false, true]);
    assert!(registry
        .pooled(blueprint)
        .iter()
        .all(|instance| !registry.host().is_active(*instance)));
}

#[test]
fn test_prewarm_leaves_inactive_blueprint_inactive() {
    let mut host = TableHost::default();
    let blueprint = host.add(None);
    host.set_active(blueprint, false);
    let mut registry = PoolRegistry::with_defaults(host);

    registry.create_pool(blueprint, 1);

    assert!(!registry.host().is_active(blueprint));
}
