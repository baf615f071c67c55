use super::*;

/// Tests patching a boolean and a status field.
///
/// Expected: both written, title untouched
#[tokio::test]
async fn writes_flag_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Job)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_job(db, 1, 1).await?;
    let repo = JobRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = JobPatch {
        remote: Some(true),
        status: Some(JobStatus::Published),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    assert_eq!(repo.patch(created.id, &patch, &changes).await?, 1);

    let after = repo.find_by_id(created.id).await?.unwrap();
    assert!(after.remote);
    assert_eq!(after.status, JobStatus::Published);
    assert_eq!(after.title, before.title);

    Ok(())
}
