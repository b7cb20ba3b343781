//! Type-safe session management wrappers.
//!
//! Wraps the raw tower-sessions `Session` behind a small interface so session
//! keys live in one place and callers cannot mistype them.

use tower_sessions::Session;

use crate::error::AppError;

// Session key constants
pub const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the authenticated
/// user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference for use with APIs that expect it
    /// directly, such as `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the user's id in the session.
    ///
    /// Called after successful registration or login to establish a logged-in
    /// session.
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the authenticated user's id from the session, or `None` when
    /// no user is logged in.
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
