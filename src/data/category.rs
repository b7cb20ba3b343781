use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: Set(params.name),
            description: Set(params.description),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        category: entity::category::Model,
        params: UpdateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        let mut active: entity::category::ActiveModel = category.into();

        if let Some(name) = params.name {
            active.name = Set(name);
        }
        if let Some(description) = params.description {
            active.description = Set(Some(description));
        }

        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
