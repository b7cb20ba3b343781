//! Business logic layer.
//!
//! Services validate input, enforce domain rules, and orchestrate repository
//! calls. The reservation service owns the availability semantics, including
//! the serialized check-and-insert that keeps bookings conflict free.

pub mod category;
pub mod reservation;
pub mod user;
pub mod vehicle;
