//! Data access layer.
//!
//! Repositories in this module own all SeaORM query construction. Services call
//! into them and never touch the ORM directly. The reservation repository is
//! generic over the connection so the availability check and the insert can run
//! inside one transaction.

pub mod category;
pub mod reservation;
pub mod user;
pub mod vehicle;
