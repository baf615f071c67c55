//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating records
//! together with the records they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a job published by a freshly created entreprise.
///
/// Creates, in order:
/// 1. User (entreprise owner and job author)
/// 2. Entreprise
/// 3. Job
///
/// # Returns
/// - `Ok((user, entreprise, job))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_job_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::entreprise::Model,
        entity::job::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let entreprise = crate::factory::entreprise::create_entreprise(db, user.id).await?;
    let job = crate::factory::job::create_job(db, entreprise.id, user.id).await?;

    Ok((user, entreprise, job))
}

/// Creates a candidate profile together with its owning user.
///
/// # Returns
/// - `Ok((user, candidat))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_candidat_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::candidat::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role("CANDIDAT")
        .build()
        .await?;
    let candidat = crate::factory::candidat::create_candidat(db, user.id).await?;

    Ok((user, candidat))
}

/// Creates an application along with the job and candidate it links.
///
/// # Returns
/// - `Ok((job, candidat, application))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::job::Model,
        entity::candidat::Model,
        entity::application::Model,
    ),
    DbErr,
> {
    let (_, _, job) = create_job_with_dependencies(db).await?;
    let (_, candidat) = create_candidat_with_user(db).await?;
    let application =
        crate::factory::application::create_application(db, job.id, candidat.id).await?;

    Ok((job, candidat, application))
}
