use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tokio::sync::OwnedMutexGuard;

/// Registry of per-vehicle commit locks.
///
/// Every reservation commit for a vehicle acquires that vehicle's lock before
/// re-checking availability and inserting, so two concurrent requests for the
/// same vehicle are serialized while requests for different vehicles proceed
/// independently. Locks are created lazily on first use and kept for the
/// process lifetime; the registry is shared by cloning.
#[derive(Clone, Default)]
pub struct VehicleLockRegistry {
    locks: Arc<Mutex<HashMap<i32, Arc<tokio::sync::Mutex<()>>>>>,
}

impl VehicleLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the commit lock for the given vehicle, waiting if another
    /// commit for the same vehicle is in flight.
    pub async fn acquire(&self, vehicle_id: i32) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            locks.entry(vehicle_id).or_default().clone()
        };

        lock.lock_owned().await
    }
}
