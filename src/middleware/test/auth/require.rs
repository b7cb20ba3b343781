use super::*;

/// Tests that an authenticated user passes a guard with no extra permissions.
///
/// Expected: Ok(User)
#[tokio::test]
async fn authenticated_user_passes() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let resolved = guard.require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn unauthenticated_request_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn stale_session_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999999).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999999)))
    ));

    Ok(())
}

/// Tests that the admin permission admits administrators.
///
/// Expected: Ok(User)
#[tokio::test]
async fn admin_passes_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let guard = AuthGuard::new(db, session);
    let resolved = guard.require(&[Permission::Admin]).await?;

    assert_eq!(resolved.id, admin.id);

    Ok(())
}

/// Tests that the admin permission rejects clients.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn client_fails_admin_permission() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let guard = AuthGuard::new(db, session);
    let result = guard.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
