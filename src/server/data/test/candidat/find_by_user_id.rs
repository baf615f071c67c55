use super::*;

/// Expected: the profile of the requested user, None for others
#[tokio::test]
async fn finds_profile_of_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Candidat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let candidat = factory::create_candidat(db, 5).await?;
    let repo = CandidatRepository::new(db);

    assert_eq!(
        repo.find_by_user_id(5).await?.map(|c| c.id),
        Some(candidat.id)
    );
    assert!(repo.find_by_user_id(6).await?.is_none());

    Ok(())
}
