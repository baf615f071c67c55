use super::*;

/// Expected: only active links of the requested user
#[tokio::test]
async fn filters_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Emploi)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_emploi(db, 1, 2).await?;
    factory::create_emploi(db, 1, 3).await?;
    factory::emploi::EmploiFactory::new(db, 1, 4)
        .deleted_at(Utc::now())
        .build()
        .await?;
    factory::create_emploi(db, 9, 2).await?;

    let repo = EmploiRepository::new(db);
    let page = repo
        .find_page(&Filters::page(None, None), Some(1), None)
        .await?;

    assert_eq!(page.total, 2);
    assert!(page.results.iter().all(|e| e.user_id == 1));

    Ok(())
}
