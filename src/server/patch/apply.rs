//! Writes the changed fields of a patch.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Value,
};

use crate::server::{
    patch::{ChangeSet, PatchSchema},
    schema::Collection,
};

type Column<P> = <<P as PatchSchema>::Entity as EntityTrait>::Column;

/// Columns and values to write: fields that are both set in the patch and changed.
///
/// Identifiers and creation timestamps never appear because no patch type lists them.
pub fn write_set<P: PatchSchema>(patch: &P, changes: &ChangeSet) -> Vec<(Column<P>, Value)> {
    P::FIELDS
        .iter()
        .filter(|field| changes.contains(field.name))
        .filter_map(|field| (field.value)(patch).map(|value| (field.column, value)))
        .collect()
}

/// Applies the changed fields of `patch` to the active record `id`.
///
/// Refreshes the audit timestamp alongside the written fields. Soft-deleted rows are
/// never touched. Nothing is written when the write set is empty.
///
/// # Returns
/// - `Ok(u64)` - Number of rows written (0 or 1)
/// - `Err(DbErr)` - Database error, including unique-constraint violations
pub async fn apply<P, C>(db: &C, id: i32, patch: &P, changes: &ChangeSet) -> Result<u64, DbErr>
where
    P: PatchSchema,
    C: ConnectionTrait,
{
    let set = write_set(patch, changes);
    if set.is_empty() {
        return Ok(0);
    }

    let mut update = <P::Entity as EntityTrait>::update_many()
        .col_expr(<P::Entity as Collection>::UPDATED_AT, Expr::value(Utc::now()))
        .filter(<P::Entity as Collection>::ID.eq(id));

    if let Some(deleted_at) = <P::Entity as Collection>::DELETED_AT {
        update = update.filter(deleted_at.is_null());
    }

    for (column, value) in set {
        update = update.col_expr(column, Expr::value(value));
    }

    let result = update.exec(db).await?;

    tracing::debug!(
        "Patched {} {} ({} row(s))",
        <P::Entity as Collection>::NAME,
        id,
        result.rows_affected
    );

    Ok(result.rows_affected)
}
