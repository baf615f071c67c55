//! Collection-agnostic repository operations.
//!
//! Every query here goes through the [`Collection`] descriptor, so soft-deleted rows are
//! excluded from lookups and lists and are never patched or deleted twice.

use std::marker::PhantomData;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    patch::{self, ChangeSet, PatchSchema},
    query::{filter::active, Filters},
    schema::Collection,
};

pub struct CollectionRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E: Collection> CollectionRepository<'a, E> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Finds an active record by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        self.find_one(Condition::all().add(E::ID.eq(id))).await
    }

    /// Finds the first active record matching `condition`.
    pub async fn find_one(&self, condition: Condition) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(active::<E>().add(condition))
            .one(self.db)
            .await
    }

    /// Checks whether any active record matches `condition`.
    pub async fn exists(&self, condition: Condition) -> Result<bool, DbErr> {
        let count = E::find()
            .filter(active::<E>().add(condition))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of records matching `condition`, newest first.
    ///
    /// `condition` is used as given; build it with [`Filters::condition`] so soft-deleted
    /// rows are excluded.
    ///
    /// # Returns
    /// - `Ok((records, total))` - The page and the number of matches across all pages
    /// - `Err(DbErr)` - Database error
    pub async fn find_page(
        &self,
        condition: Condition,
        filters: &Filters,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let total = E::find().filter(condition.clone()).count(self.db).await?;

        let records = E::find()
            .filter(condition)
            .order_by_desc(E::SORT)
            .order_by_desc(E::ID)
            .offset(filters.skip)
            .limit(filters.limit)
            .all(self.db)
            .await?;

        Ok((records, total))
    }

    /// Writes the changed fields of `patch` to the active record `id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Rows written; 0 when nothing changed or the record is gone
    pub async fn patch<P>(&self, id: i32, patch: &P, changes: &ChangeSet) -> Result<u64, DbErr>
    where
        P: PatchSchema<Entity = E>,
    {
        patch::apply(self.db, id, patch, changes).await
    }

    /// Deletes record `id`: soft when the collection has a deletion marker, hard otherwise.
    ///
    /// # Returns
    /// - `Ok(true)` - The record existed (and was active) and is now deleted
    /// - `Ok(false)` - No such active record
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let rows_affected = match E::DELETED_AT {
            Some(deleted_at) => {
                E::update_many()
                    .col_expr(deleted_at, Expr::value(Utc::now()))
                    .filter(E::ID.eq(id))
                    .filter(deleted_at.is_null())
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
            None => {
                E::delete_many()
                    .filter(E::ID.eq(id))
                    .exec(self.db)
                    .await?
                    .rows_affected
            }
        };

        Ok(rows_affected > 0)
    }
}
