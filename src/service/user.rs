use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::{InsertUserParams, UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{RegisterUserParams, User},
};

/// Account service: registration and credential checks.
///
/// Passwords are hashed with Argon2 before they reach the repository; plain
/// passwords never touch the database.
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(&self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(InsertUserParams {
                name: params.name,
                email: params.email,
                password_hash,
                role: params.role,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(User::from_entity(user))
    }

    /// Verifies the credentials and returns the matching user row.
    ///
    /// Both an unknown email and a wrong password map to the same
    /// `InvalidCredentials` error so responses never reveal which accounts
    /// exist.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(&self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(&self.db);
        let user = user_repo.find_by_id(user_id).await?;

        Ok(user.map(User::from_entity))
    }
}

fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| AppError::InternalError(format!("Failed to hash password: {}", err)))
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| AppError::InternalError(format!("Stored password hash invalid: {}", err)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
