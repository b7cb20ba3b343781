pub mod auth;
pub mod category;
pub mod reservation;
pub mod vehicle;
