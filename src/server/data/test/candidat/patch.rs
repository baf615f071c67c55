use super::*;

/// Tests replacing the skills list.
///
/// Expected: new list stored in order, experience untouched
#[tokio::test]
async fn replaces_skills() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Candidat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::candidat::CandidatFactory::new(db, 5)
        .skills(["rust"])
        .experience("3 years")
        .build()
        .await?;
    let repo = CandidatRepository::new(db);
    let before = repo.find_by_id(created.id).await?.unwrap();

    let patch = CandidatPatch {
        skills: Some(vec!["go".to_string(), "rust".to_string()]),
        ..Default::default()
    };
    let changes = ChangeSet::detect(&before, &patch)?;

    assert_eq!(repo.patch(created.id, &patch, &changes).await?, 1);

    let after = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(after.skills, vec!["go".to_string(), "rust".to_string()]);
    assert_eq!(after.experience.as_deref(), Some("3 years"));

    Ok(())
}
