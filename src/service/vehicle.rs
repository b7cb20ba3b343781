use sea_orm::DatabaseConnection;

use crate::{
    data::{category::CategoryRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{CreateVehicleParams, UpdateVehicleParams, Vehicle, VehicleListFilter},
};

#[derive(Clone)]
pub struct VehicleService {
    db: DatabaseConnection,
}

impl VehicleService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(&self.db);
        let category_repo = CategoryRepository::new(&self.db);

        if category_repo.find_by_id(params.category_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Category with id {} not found",
                params.category_id
            )));
        }

        if vehicle_repo.find_by_plate(&params.plate).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Vehicle with plate '{}' already registered",
                params.plate
            )));
        }

        let vehicle = vehicle_repo.create(params).await?;

        Ok(Vehicle::from_entity(vehicle))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(&self.db);

        let Some(vehicle) = vehicle_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!(
                "Vehicle with id {} not found",
                id
            )));
        };

        Ok(Vehicle::from_entity(vehicle))
    }

    pub async fn list(&self, filter: VehicleListFilter) -> Result<Vec<Vehicle>, AppError> {
        let vehicle_repo = VehicleRepository::new(&self.db);
        let vehicles = vehicle_repo.find_all(filter).await?;

        Ok(vehicles.into_iter().map(Vehicle::from_entity).collect())
    }

    pub async fn update(&self, id: i32, params: UpdateVehicleParams) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(&self.db);

        let Some(vehicle) = vehicle_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!(
                "Vehicle with id {} not found",
                id
            )));
        };

        if let Some(category_id) = params.category_id {
            let category_repo = CategoryRepository::new(&self.db);
            if category_repo.find_by_id(category_id).await?.is_none() {
                return Err(AppError::BadRequest(format!(
                    "Category with id {} not found",
                    category_id
                )));
            }
        }

        let vehicle = vehicle_repo.update(vehicle, params).await?;

        Ok(Vehicle::from_entity(vehicle))
    }

    /// Deletes a vehicle. Fails while reservations still reference it because
    /// the schema restricts the foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let vehicle_repo = VehicleRepository::new(&self.db);

        let deleted = vehicle_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Vehicle with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
