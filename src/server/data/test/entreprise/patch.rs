use super::*;

/// Tests the rename scenario on a hard-deleted collection.
///
/// Expected: name changes, location is untouched, updated_at advances
#[tokio::test]
async fn renames_entreprise() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Entreprise)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::entreprise::EntrepriseFactory::new(db, 1)
        .name("Acme")
        .build()
        .await?;
    let repo = EntrepriseRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = EntreprisePatch {
        name: Some("Acme Corp".to_string()),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    assert_eq!(repo.patch(created.id, &patch, &changes).await?, 1);

    let after = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(after.name, "Acme Corp");
    assert_eq!(after.location, before.location);
    assert!(after.updated_at > before.updated_at);

    Ok(())
}
