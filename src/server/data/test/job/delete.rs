use super::*;

/// Expected: the job row is gone after deletion
#[tokio::test]
async fn removes_job_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Job)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let job = factory::create_job(db, 1, 1).await?;
    let repo = JobRepository::new(db);

    assert!(repo.delete(job.id).await?);
    assert!(entity::prelude::Job::find_by_id(job.id).one(db).await?.is_none());

    Ok(())
}
