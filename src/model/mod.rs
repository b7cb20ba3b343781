pub mod api;
pub mod category;
pub mod interval;
pub mod reservation;
pub mod user;
pub mod vehicle;
