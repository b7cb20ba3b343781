use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::SESSION_AUTH_USER_ID,
    model::user::Role,
};

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user row and enforces the listed permissions.
    ///
    /// Returns the user so handlers can make owner-or-admin decisions without
    /// a second lookup.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !Role::from_db(&user.role).is_admin() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "administrator role required".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
