use super::*;

/// Tests creating a job with defaults applied by the params.
///
/// Expected: Ok(Job) in draft status with the given entreprise
#[tokio::test]
async fn creates_job() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Job)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = JobRepository::new(db);
    let job = repo
        .create(CreateJobParams {
            title: "Backend developer".to_string(),
            description: "Build APIs".to_string(),
            location: "Lyon".to_string(),
            contract_type: "CDI".to_string(),
            remote: true,
            salary_range: Some("45-55k".to_string()),
            entreprise_id: 4,
            created_by: 2,
            status: JobStatus::Draft,
            expires_at: None,
        })
        .await?;

    assert!(job.id > 0);
    assert_eq!(job.status, JobStatus::Draft);
    assert_eq!(job.entreprise_id, 4);
    assert!(job.remote);

    Ok(())
}
