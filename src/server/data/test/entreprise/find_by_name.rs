use super::*;

/// Expected: exact name matches, other casing does not
#[tokio::test]
async fn matches_exact_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Entreprise)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entreprise = factory::entreprise::EntrepriseFactory::new(db, 1)
        .name("Acme")
        .build()
        .await?;
    let repo = EntrepriseRepository::new(db);

    assert_eq!(
        repo.find_by_name("Acme").await?.map(|e| e.id),
        Some(entreprise.id)
    );
    assert!(repo.find_by_name("acme").await?.is_none());

    Ok(())
}

/// Expected: renaming to its own name is not a conflict, another's name is
#[tokio::test]
async fn name_taken_excludes_given_entreprise() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Entreprise)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let acme = factory::entreprise::EntrepriseFactory::new(db, 1)
        .name("Acme")
        .build()
        .await?;
    let other = factory::create_entreprise(db, 1).await?;
    let repo = EntrepriseRepository::new(db);

    assert!(!repo.name_taken("Acme", Some(acme.id)).await?);
    assert!(repo.name_taken("Acme", Some(other.id)).await?);

    Ok(())
}
