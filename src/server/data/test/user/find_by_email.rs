use super::*;

/// Tests that email lookups ignore case.
///
/// Expected: Ok(Some(User)) when querying with different casing
#[tokio::test]
async fn finds_user_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "a@x.com").await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_email("A@X.com").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Expected: Ok(None) for a soft-deleted account
#[tokio::test]
async fn ignores_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("gone@x.com")
        .deleted_at(Utc::now())
        .build()
        .await?;
    let repo = UserRepository::new(db);

    assert!(repo.find_by_email("gone@x.com").await?.is_none());
    assert!(!repo.email_taken("gone@x.com", None).await?);

    Ok(())
}

/// Tests the uniqueness probe used before writes.
///
/// Expected: taken for other users, free when only the excluded user holds it
#[tokio::test]
async fn email_taken_excludes_given_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "jane@x.com").await?;
    let repo = UserRepository::new(db);

    assert!(repo.email_taken("JANE@x.com", None).await?);
    assert!(!repo.email_taken("jane@x.com", Some(user.id)).await?);

    Ok(())
}

/// Tests that lookups normalise the email the way list filters do.
///
/// Expected: surrounding whitespace is ignored and a blank email matches nobody
#[tokio::test]
async fn normalises_lookup_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "jane@x.com").await?;
    let repo = UserRepository::new(db);

    let found = repo.find_by_email("  Jane@X.com ").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(repo.find_by_email("   ").await?.is_none());
    assert!(!repo.email_taken("", None).await?);

    Ok(())
}
