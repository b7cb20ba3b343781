use sea_orm::{
    sea_query::Query, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::model::{
    interval::Interval,
    vehicle::{CreateVehicleParams, UpdateVehicleParams, VehicleListFilter},
};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            brand: Set(params.brand),
            model: Set(params.model),
            year: Set(params.year),
            plate: Set(params.plate),
            capacity: Set(params.capacity),
            category_id: Set(params.category_id),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_plate(
        &self,
        plate: &str,
    ) -> Result<Option<entity::vehicle::Model>, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Plate.eq(plate))
            .one(self.db)
            .await
    }

    pub async fn find_all(
        &self,
        filter: VehicleListFilter,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let mut query =
            entity::prelude::Vehicle::find().order_by_asc(entity::vehicle::Column::Id);

        if let Some(search) = filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::vehicle::Column::Brand.contains(&search))
                    .add(entity::vehicle::Column::Model.contains(&search)),
            );
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::vehicle::Column::CategoryId.eq(category_id));
        }
        if let Some(skip) = filter.skip {
            query = query.offset(skip);
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(self.db).await
    }

    /// Vehicles with no reservation overlapping the given interval, found with
    /// a single anti-join instead of one query per vehicle.
    pub async fn find_available(
        &self,
        interval: Interval,
    ) -> Result<Vec<entity::vehicle::Model>, DbErr> {
        let occupied = Query::select()
            .column(entity::reservation::Column::VehicleId)
            .from(entity::prelude::Reservation)
            .and_where(entity::reservation::Column::StartTime.lte(interval.end))
            .and_where(entity::reservation::Column::EndTime.gte(interval.start))
            .to_owned();

        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::Id.not_in_subquery(occupied))
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        vehicle: entity::vehicle::Model,
        params: UpdateVehicleParams,
    ) -> Result<entity::vehicle::Model, DbErr> {
        let mut active: entity::vehicle::ActiveModel = vehicle.into();

        if let Some(brand) = params.brand {
            active.brand = Set(brand);
        }
        if let Some(model) = params.model {
            active.model = Set(model);
        }
        if let Some(year) = params.year {
            active.year = Set(year);
        }
        if let Some(plate) = params.plate {
            active.plate = Set(plate);
        }
        if let Some(capacity) = params.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(category_id) = params.category_id {
            active.category_id = Set(category_id);
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
