use super::*;

fn params(user_id: i32) -> CreateCandidatParams {
    CreateCandidatParams {
        user_id,
        cv_url: None,
        skills: vec!["rust".to_string(), "sql".to_string()],
        experience: None,
        education: Some("MSc".to_string()),
    }
}

/// Tests that skills survive the JSON column round trip in order.
///
/// Expected: Ok(Candidat) with the same skill list
#[tokio::test]
async fn creates_candidat_with_skills() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Candidat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CandidatRepository::new(db);
    let candidat = repo.create(params(3)).await?;

    assert_eq!(candidat.skills, vec!["rust".to_string(), "sql".to_string()]);
    assert_eq!(candidat.education.as_deref(), Some("MSc"));

    Ok(())
}

/// Expected: a user can hold only one active profile
#[tokio::test]
async fn rejects_second_profile_for_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CandidatRepository::new(db);
    repo.create(params(3)).await?;

    let err = repo
        .create(params(3))
        .await
        .unwrap_err()
        .conflict_on_unique("taken");

    assert!(matches!(err, AppError::AlreadyExists(_)));

    Ok(())
}
