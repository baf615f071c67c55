use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Jane Doe".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role: Role::Candidat,
        phone: "+33600000000".to_string(),
        status: UserStatus::Active,
    }
}

/// Tests creating a user.
///
/// Verifies that the repository assigns an id and identical creation and update
/// timestamps, and that the password hash is stored.
///
/// Expected: Ok(User) with server-assigned fields
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jane@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.created_at, user.updated_at);
    assert!(user.deleted_at.is_none());

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "hash");

    Ok(())
}

/// Tests that the partial unique index rejects a second active account.
///
/// Expected: Err(AppError::DbErr) that maps to AlreadyExists
#[tokio::test]
async fn rejects_duplicate_active_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("jane@example.com")).await?;

    let result = repo.create(params("jane@example.com")).await;

    let err = result.unwrap_err().conflict_on_unique("taken");
    assert!(matches!(err, AppError::AlreadyExists(_)));

    Ok(())
}

/// Tests that a soft-deleted account does not block its email.
///
/// Expected: Ok(User) for the second account
#[tokio::test]
async fn allows_email_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.create(params("jane@example.com")).await?;
    assert!(repo.delete(first.id).await?);

    let second = repo.create(params("jane@example.com")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
