use super::*;

/// Expected: Ok(None) when the only link is soft-deleted
#[tokio::test]
async fn ignores_deleted_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Emploi)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::emploi::EmploiFactory::new(db, 1, 2)
        .deleted_at(Utc::now())
        .build()
        .await?;
    let repo = EmploiRepository::new(db);

    assert!(repo.find_by_pair(1, 2).await?.is_none());

    Ok(())
}

/// Expected: Ok(Some(Emploi)) for the active link
#[tokio::test]
async fn finds_active_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Emploi)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let emploi = factory::create_emploi(db, 1, 2).await?;
    factory::create_emploi(db, 1, 3).await?;
    let repo = EmploiRepository::new(db);

    assert_eq!(repo.find_by_pair(1, 2).await?.map(|e| e.id), Some(emploi.id));

    Ok(())
}
