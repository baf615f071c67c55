use super::*;

fn params(user_id: i32, entreprise_id: i32) -> CreateEmploiParams {
    CreateEmploiParams {
        user_id,
        entreprise_id,
        position: "Developer".to_string(),
    }
}

/// Tests that a second active link for the same pair is rejected by storage.
///
/// Expected: AlreadyExists after mapping the constraint violation
#[tokio::test]
async fn rejects_duplicate_active_pair() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmploiRepository::new(db);
    repo.create(params(1, 2)).await?;

    let err = repo
        .create(params(1, 2))
        .await
        .unwrap_err()
        .conflict_on_unique("taken");

    assert!(matches!(err, AppError::AlreadyExists(_)));

    Ok(())
}

/// Tests that soft-deleting the link frees the pair.
///
/// Expected: Ok(Emploi) for the new link with a different id
#[tokio::test]
async fn allows_pair_after_soft_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmploiRepository::new(db);
    let first = repo.create(params(1, 2)).await?;
    assert!(repo.delete(first.id).await?);

    let second = repo.create(params(1, 2)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(
        repo.find_by_pair(1, 2).await?.map(|e| e.id),
        Some(second.id)
    );

    Ok(())
}

/// Expected: the same user may work for two different entreprises
#[tokio::test]
async fn allows_same_user_in_other_entreprise() -> Result<(), AppError> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EmploiRepository::new(db);
    repo.create(params(1, 2)).await?;

    assert!(repo.create(params(1, 3)).await.is_ok());

    Ok(())
}
