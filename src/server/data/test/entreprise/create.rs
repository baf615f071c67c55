use super::*;

fn params(name: &str) -> CreateEntrepriseParams {
    CreateEntrepriseParams {
        name: name.to_string(),
        description: None,
        logo: None,
        website: Some("https://acme.example".to_string()),
        location: None,
        created_by: 1,
    }
}

/// Tests creating an entreprise.
///
/// Expected: Ok(Entreprise) with id and timestamps assigned
#[tokio::test]
async fn creates_entreprise() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Entreprise)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntrepriseRepository::new(db);
    let entreprise = repo.create(params("Acme")).await?;

    assert!(entreprise.id > 0);
    assert_eq!(entreprise.name, "Acme");
    assert_eq!(entreprise.website.as_deref(), Some("https://acme.example"));
    assert_eq!(entreprise.created_at, entreprise.updated_at);

    Ok(())
}

/// Tests that entreprise names are unique.
///
/// Expected: the second insert maps to AlreadyExists
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EntrepriseRepository::new(db);
    repo.create(params("Acme")).await?;

    let err = repo
        .create(params("Acme"))
        .await
        .unwrap_err()
        .conflict_on_unique("taken");

    assert!(matches!(err, AppError::AlreadyExists(_)));

    Ok(())
}
