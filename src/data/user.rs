use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::model::user::Role;

/// Parameters for inserting a user row. The password is already hashed by the
/// time it reaches the repository.
#[derive(Debug, Clone)]
pub struct InsertUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: InsertUserParams) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            name: Set(params.name),
            email: Set(params.email),
            password_hash: Set(params.password_hash),
            role: Set(params.role.as_str().to_string()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
