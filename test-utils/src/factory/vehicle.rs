//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
///
/// Requires an existing category id since every vehicle belongs to exactly
/// one category.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::vehicle::VehicleFactory;
///
/// let vehicle = VehicleFactory::new(&db, category.id)
///     .brand("Renault")
///     .capacity(7)
///     .build()
///     .await?;
/// ```
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    brand: String,
    model: String,
    year: i32,
    plate: String,
    capacity: i32,
    category_id: i32,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Toyota"`
    /// - model: `"Model {id}"` where id is auto-incremented
    /// - year: `2022`
    /// - plate: `"PLT-{id}"`
    /// - capacity: `5`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category this vehicle belongs to
    ///
    /// # Returns
    /// - `VehicleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            brand: "Toyota".to_string(),
            model: format!("Model {}", id),
            year: 2022,
            plate: format!("PLT-{}", id),
            capacity: 5,
            category_id,
        }
    }

    /// Sets the vehicle brand.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the vehicle model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the manufacturing year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the licence plate.
    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = plate.into();
        self
    }

    /// Sets the passenger capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::vehicle::Model)` - Created vehicle entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            brand: ActiveValue::Set(self.brand),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            plate: ActiveValue::Set(self.plate),
            capacity: ActiveValue::Set(self.capacity),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle in the given category with default values.
///
/// Shorthand for `VehicleFactory::new(db, category_id).build().await`.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, category_id).build().await
}
