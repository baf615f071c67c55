use super::*;

fn params(job_id: i32, candidat_id: i32) -> CreateApplicationParams {
    CreateApplicationParams {
        job_id,
        candidat_id,
        cv_url: None,
        cover_letter: Some("Hello".to_string()),
        status: ApplicationStatus::Submitted,
    }
}

/// Tests that creation stamps the application time.
///
/// Expected: Ok(Application) with applied_at equal to created_at
#[tokio::test]
async fn stamps_applied_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let application = repo.create(params(1, 2)).await?;

    assert_eq!(application.applied_at, application.created_at);
    assert_eq!(application.status, ApplicationStatus::Submitted);

    Ok(())
}

/// Tests the (job, candidate) uniqueness among active applications.
///
/// Expected: duplicate rejected, accepted again after soft delete
#[tokio::test]
async fn one_active_application_per_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let first = repo.create(params(1, 2)).await?;

    let err = repo
        .create(params(1, 2))
        .await
        .unwrap_err()
        .conflict_on_unique("taken");
    assert!(matches!(err, AppError::AlreadyExists(_)));

    assert!(repo.delete(first.id).await?);
    assert!(repo.create(params(1, 2)).await.is_ok());

    Ok(())
}
