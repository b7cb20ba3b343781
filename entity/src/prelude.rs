pub use super::{
    category::Entity as Category, reservation::Entity as Reservation, user::Entity as User,
    vehicle::Entity as Vehicle,
};
