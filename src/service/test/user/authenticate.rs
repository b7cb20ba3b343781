use super::*;
use crate::error::auth::AuthError;

/// Tests the full register-then-login flow.
///
/// Expected: Ok with the registered user returned
#[tokio::test]
async fn authenticates_with_correct_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db.clone());
    let registered = service
        .register(RegisterUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            role: Role::Client,
        })
        .await?;

    let user = service.authenticate("ana@example.com", "secret123").await?;

    assert_eq!(user.id, registered.id);

    Ok(())
}

/// Tests that a wrong password is rejected.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db.clone());
    service
        .register(RegisterUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret123".to_string(),
            role: Role::Client,
        })
        .await?;

    let result = service.authenticate("ana@example.com", "wrong").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that an unknown email gets the same error as a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db.clone());
    let result = service.authenticate("nobody@example.com", "secret123").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
