use super::*;

/// Expected: status moves to reviewed, cover letter untouched
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Application)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::application::ApplicationFactory::new(db, 1, 2)
        .cover_letter("Hello")
        .build()
        .await?;
    let repo = ApplicationRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = ApplicationPatch {
        status: Some(ApplicationStatus::Reviewed),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    assert_eq!(repo.patch(created.id, &patch, &changes).await?, 1);

    let after = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(after.status, ApplicationStatus::Reviewed);
    assert_eq!(after.cover_letter.as_deref(), Some("Hello"));
    assert_eq!(after.applied_at, before.applied_at);

    Ok(())
}
