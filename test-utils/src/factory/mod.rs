//! Entity factories for test data setup.
//!
//! Each factory inserts an entity with sensible defaults that individual tests
//! can override through a builder pattern. `helpers` provides an id sequence
//! shared by all factories and shortcuts for common dependency chains.

pub mod category;
pub mod helpers;
pub mod reservation;
pub mod user;
pub mod vehicle;
