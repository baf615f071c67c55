use super::*;

/// Tests listing applications of a job, most recent first.
///
/// Expected: the two applications of job 1 ordered by applied_at descending
#[tokio::test]
async fn lists_job_applications_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::application::ApplicationFactory::new(db, 1, 10)
        .applied_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::application::ApplicationFactory::new(db, 1, 11)
        .applied_at(now)
        .build()
        .await?;
    factory::create_application(db, 2, 10).await?;

    let repo = ApplicationRepository::new(db);
    let page = repo
        .find_page(&Filters::page(None, None), Some(1), None)
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(
        page.results.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );

    Ok(())
}

/// Expected: candidate and status filters combine
#[tokio::test]
async fn filters_by_candidat_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let accepted = factory::application::ApplicationFactory::new(db, 1, 10)
        .status("accepted")
        .build()
        .await?;
    factory::create_application(db, 2, 10).await?;

    let repo = ApplicationRepository::new(db);
    let filters = Filters::new(None, Some("accepted".to_string()), None, None, None);
    let page = repo.find_page(&filters, None, Some(10)).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, accepted.id);

    Ok(())
}
