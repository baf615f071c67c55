use super::*;

/// Tests applying a patch with one changed and one unchanged field.
///
/// Verifies that only the changed field is written, untouched fields keep their values
/// and the audit timestamp advances.
///
/// Expected: Ok(1) and the reloaded user reflects only the change
#[tokio::test]
async fn writes_only_changed_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .full_name("Jane Doe")
        .created_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let repo = UserRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = UserPatch {
        full_name: Some("Jane Doe".to_string()),
        role: Some(Role::Admin),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    let written = repo.patch(created.id, &patch, &changes).await?;
    let after = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(written, 1);
    assert_eq!(after.role, Role::Admin);
    assert_eq!(after.full_name, before.full_name);
    assert_eq!(after.email, before.email);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at > before.updated_at);

    Ok(())
}

/// Tests that an empty change set performs no write.
///
/// Expected: Ok(0) and the audit timestamp is unchanged
#[tokio::test]
async fn empty_change_set_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = UserPatch {
        full_name: Some(before.full_name.clone()),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    let written = repo.patch(created.id, &patch, &changes).await?;
    let after = repo.find_by_id(created.id).await?.unwrap();

    assert!(changes.is_empty());
    assert_eq!(written, 0);
    assert_eq!(after, before);

    Ok(())
}

/// Tests that soft-deleted users are never patched.
///
/// Expected: Ok(0) and the stored row is unchanged
#[tokio::test]
async fn skips_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .full_name("Old")
        .deleted_at(Utc::now())
        .build()
        .await?;
    let repo = UserRepository::new(db);

    let patch = UserPatch {
        full_name: Some("New".to_string()),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&serde_json::json!({ "fullName": "Old" }), &patch)?;

    let written = repo.patch(created.id, &patch, &changes).await?;

    let stored = entity::prelude::User::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(written, 0);
    assert_eq!(stored.full_name, "Old");

    Ok(())
}
