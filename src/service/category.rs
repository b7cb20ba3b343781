use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

#[derive(Clone)]
pub struct CategoryService {
    db: DatabaseConnection,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let category_repo = CategoryRepository::new(&self.db);

        if category_repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Category '{}' already exists",
                params.name
            )));
        }

        let category = category_repo.create(params).await?;

        Ok(Category::from_entity(category))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        let category_repo = CategoryRepository::new(&self.db);

        let Some(category) = category_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        };

        Ok(Category::from_entity(category))
    }

    pub async fn list(&self) -> Result<Vec<Category>, AppError> {
        let category_repo = CategoryRepository::new(&self.db);
        let categories = category_repo.find_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Category, AppError> {
        let category_repo = CategoryRepository::new(&self.db);

        let Some(category) = category_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        };

        let category = category_repo.update(category, params).await?;

        Ok(Category::from_entity(category))
    }

    /// Deletes a category. Fails while vehicles still reference it because the
    /// schema restricts the foreign key.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let category_repo = CategoryRepository::new(&self.db);

        let deleted = category_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!(
                "Category with id {} not found",
                id
            )));
        }

        Ok(())
    }
}
