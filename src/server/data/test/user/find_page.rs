use super::*;

/// Tests that pages are ordered newest first and report the full total.
///
/// Expected: total of 3, second page holds the oldest user
#[tokio::test]
async fn paginates_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::user::UserFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let middle = factory::user::UserFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    let newest = factory::user::UserFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let first = repo.find_page(&Filters::page(None, Some(2))).await?;
    let second = repo.find_page(&Filters::page(Some(2), Some(2))).await?;

    assert_eq!(first.total, 3);
    assert_eq!(
        first.results.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );
    assert_eq!(second.total, 3);
    assert_eq!(
        second.results.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}

/// Tests filtering by role and status while excluding deleted users.
///
/// Expected: only the active admin is returned
#[tokio::test]
async fn filters_by_role_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db).role("ADMIN").build().await?;
    factory::user::UserFactory::new(db)
        .role("ADMIN")
        .status("suspended")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .role("ADMIN")
        .deleted_at(Utc::now())
        .build()
        .await?;
    factory::user::UserFactory::new(db).role("CANDIDAT").build().await?;

    let repo = UserRepository::new(db);
    let filters = Filters::new(
        Some("ADMIN".to_string()),
        Some("active".to_string()),
        None,
        None,
        None,
    );

    let page = repo.find_page(&filters).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, admin.id);

    Ok(())
}

/// Expected: email criterion matches regardless of case
#[tokio::test]
async fn filters_by_email_ignoring_case() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_email(db, "a@x.com").await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let filters = Filters::new(None, None, Some("A@X.COM".to_string()), None, None);

    let page = repo.find_page(&filters).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, user.id);

    Ok(())
}
