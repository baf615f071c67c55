use super::*;

/// Tests that entreprises are hard-deleted.
///
/// Expected: Ok(true) and the row no longer exists in storage
#[tokio::test]
async fn removes_entreprise_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Entreprise)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entreprise = factory::create_entreprise(db, 1).await?;
    let repo = EntrepriseRepository::new(db);

    assert!(repo.delete(entreprise.id).await?);
    assert!(entity::prelude::Entreprise::find_by_id(entreprise.id)
        .one(db)
        .await?
        .is_none());
    assert!(!repo.delete(entreprise.id).await?);

    Ok(())
}
