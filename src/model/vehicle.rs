use serde::Serialize;

/// Vehicle as exposed through the API.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub capacity: i32,
    pub category_id: i32,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            brand: entity.brand,
            model: entity.model,
            year: entity.year,
            plate: entity.plate,
            capacity: entity.capacity,
            category_id: entity.category_id,
        }
    }
}

/// Parameters for registering a vehicle in the fleet.
#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub plate: String,
    pub capacity: i32,
    pub category_id: i32,
}

/// Parameters for updating a vehicle. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateVehicleParams {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub plate: Option<String>,
    pub capacity: Option<i32>,
    pub category_id: Option<i32>,
}

/// Filters applied when listing the fleet.
#[derive(Debug, Clone, Default)]
pub struct VehicleListFilter {
    /// Case-insensitive substring match against brand and model.
    pub search: Option<String>,
    pub category_id: Option<i32>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
