//! Instance store.
//!
//! Exclusive owner of created instances. Instances are created and
//! deleted, never updated; changing one means deleting and recreating it.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scenecast_domain::{Instance, InstanceId};

#[derive(Default)]
struct StoreInner {
    by_id: HashMap<InstanceId, Instance>,
    order: Vec<InstanceId>,
}

/// Owner of all created instances, keyed by generated id.
#[derive(Default)]
pub struct InstanceStore {
    inner: RwLock<StoreInner>,
}

impl InstanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, instance: Instance) {
        let mut inner = self.write();
        inner.order.push(instance.id);
        inner.by_id.insert(instance.id, instance);
    }

    pub fn get(&self, id: InstanceId) -> Option<Instance> {
        self.read().by_id.get(&id).cloned()
    }

    /// Remove an instance; returns whether it existed.
    pub fn remove(&self, id: InstanceId) -> bool {
        let mut inner = self.write();
        let existed = inner.by_id.remove(&id).is_some();
        if existed {
            inner.order.retain(|stored| *stored != id);
        }
        existed
    }

    /// Instance ids in creation order.
    pub fn list(&self) -> Vec<InstanceId> {
        self.read().order.clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
