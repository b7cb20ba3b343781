//! SeaORM entity definitions for the motorpool database schema.

pub mod category;
pub mod prelude;
pub mod reservation;
pub mod user;
pub mod vehicle;
