use super::*;

/// Tests soft-deleting a user.
///
/// Verifies that the user disappears from lookups while the row stays in storage
/// with its deletion timestamp set.
///
/// Expected: Ok(true), then find_by_id returns None
#[tokio::test]
async fn soft_deletes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());

    Ok(())
}

/// Tests deleting an already deleted user.
///
/// Expected: Ok(false) and the original deletion timestamp is kept
#[tokio::test]
async fn second_delete_is_a_miss() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted_at = Utc::now() - Duration::days(1);
    let user = test_utils::factory::user::UserFactory::new(db)
        .deleted_at(deleted_at)
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(!repo.delete(user.id).await?);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.deleted_at, Some(deleted_at));

    Ok(())
}

/// Expected: Ok(false) for an unknown id
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(!repo.delete(999).await?);

    Ok(())
}
