//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool and the lock registry is
//! reference counted internally.

use sea_orm::DatabaseConnection;

use crate::service::reservation::locks::VehicleLockRegistry;

/// Shared resources handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Per-vehicle commit locks serializing reservation check-and-insert.
    pub vehicle_locks: VehicleLockRegistry,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            vehicle_locks: VehicleLockRegistry::new(),
        }
    }
}
