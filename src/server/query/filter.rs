//! Filter builder for list endpoints.
//!
//! Turns the optional list criteria (role, status, email, skip, limit) into a SeaORM
//! [`Condition`] plus a pagination window. Unset criteria are omitted, email is matched
//! case-insensitively by lower-casing, and soft-deleted rows are always excluded for
//! collections that support soft deletion.

use sea_orm::{ColumnTrait, Condition};

use crate::server::{error::AppError, schema::Collection};

/// Page size used when `limit` is absent or zero.
pub const DEFAULT_LIMIT: u64 = 100;

/// Largest page a single request may ask for.
pub const MAX_LIMIT: u64 = 1000;

/// Largest offset the storage drivers accept.
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Normalized list criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub role: Option<String>,
    pub status: Option<String>,
    /// Always lower-cased.
    pub email: Option<String>,
    pub skip: u64,
    pub limit: u64,
}

impl Filters {
    /// Builds normalized filters from raw query values.
    ///
    /// Empty strings count as unset. `skip` defaults to 0 and is clamped to
    /// [`MAX_SKIP`]. `limit` defaults to [`DEFAULT_LIMIT`] when absent or zero and is
    /// clamped to [`MAX_LIMIT`].
    pub fn new(
        role: Option<String>,
        status: Option<String>,
        email: Option<String>,
        skip: Option<u64>,
        limit: Option<u64>,
    ) -> Self {
        let limit = match limit {
            None | Some(0) => DEFAULT_LIMIT,
            Some(limit) => limit.min(MAX_LIMIT),
        };

        Self {
            role: non_empty(role),
            status: non_empty(status),
            email: non_empty(email).map(|email| email.to_lowercase()),
            skip: skip.unwrap_or(0).min(MAX_SKIP),
            limit,
        }
    }

    /// Pagination only, no criteria.
    pub fn page(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self::new(None, None, None, skip, limit)
    }

    /// Builds the query predicate for collection `E`.
    ///
    /// # Returns
    /// - `Ok(Condition)` - Conjunction of the set criteria and the active-row predicate
    /// - `Err(AppError::Validation)` - A criterion was set that `E` cannot be filtered by
    pub fn condition<E: Collection>(&self) -> Result<Condition, AppError> {
        let mut condition = active::<E>();

        for (name, column, value) in [
            ("role", E::ROLE, &self.role),
            ("status", E::STATUS, &self.status),
            ("email", E::EMAIL, &self.email),
        ] {
            let Some(value) = value else {
                continue;
            };
            let column = column.ok_or_else(|| {
                AppError::Validation(format!(
                    "{} records cannot be filtered by {}",
                    E::NAME,
                    name
                ))
            })?;
            condition = condition.add(column.eq(value.clone()));
        }

        Ok(condition)
    }
}

/// Predicate matching every row of `E` that has not been soft-deleted.
///
/// Empty for hard-deleted collections.
pub fn active<E: Collection>() -> Condition {
    let condition = Condition::all();
    match E::DELETED_AT {
        Some(deleted_at) => condition.add(deleted_at.is_null()),
        None => condition,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
