use super::*;

/// Expected: position updated, pair unchanged
#[tokio::test]
async fn updates_position() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Emploi)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_emploi(db, 1, 2).await?;
    let repo = EmploiRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = EmploiPatch {
        position: Some("Lead developer".to_string()),
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    assert_eq!(repo.patch(created.id, &patch, &changes).await?, 1);

    let after = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(after.position, "Lead developer");
    assert_eq!(after.user_id, 1);
    assert_eq!(after.entreprise_id, 2);

    Ok(())
}
