use super::*;

/// Tests inserting a user row with a pre-hashed password.
///
/// Expected: Ok with user created and role stored as its string form
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(InsertUserParams {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hashed".to_string(),
            role: Role::Administrator,
        })
        .await?;

    assert_eq!(user.name, "Ana");
    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.password_hash, "hashed");
    assert_eq!(user.role, "Administrador");

    Ok(())
}

/// Tests unique constraint on the email column.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(InsertUserParams {
            name: "Ana".to_string(),
            email: existing.email,
            password_hash: "hashed".to_string(),
            role: Role::Client,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
