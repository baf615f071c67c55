use super::*;

/// Tests the entreprise and status filters together.
///
/// Expected: only the published job of the first entreprise
#[tokio::test]
async fn filters_by_entreprise_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Job)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let published = factory::job::JobFactory::new(db, 1, 1)
        .status("published")
        .build()
        .await?;
    factory::job::JobFactory::new(db, 1, 1).build().await?;
    factory::job::JobFactory::new(db, 2, 1)
        .status("published")
        .build()
        .await?;

    let repo = JobRepository::new(db);
    let filters = Filters::new(None, Some("published".to_string()), None, None, None);

    let page = repo.find_page(&filters, Some(1)).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, published.id);

    Ok(())
}

/// Expected: Validation error, jobs have no role column
#[tokio::test]
async fn rejects_role_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Job)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);
    let filters = Filters::new(Some("ADMIN".to_string()), None, None, None, None);

    let result = repo.find_page(&filters, None).await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
