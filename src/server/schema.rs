//! Static collection descriptors.
//!
//! Every entity that is served through the generic query and patch engine implements
//! [`Collection`], naming at compile time which columns play the identifier, audit
//! timestamp, soft-delete marker and sort roles, and which optional filter criteria
//! the collection understands.

use sea_orm::EntityTrait;

/// Compile-time description of a stored collection.
pub trait Collection: EntityTrait<Model: Send + Sync> {
    /// Human readable name used in messages, e.g. "User".
    const NAME: &'static str;

    /// Server-assigned integer identifier.
    const ID: Self::Column;

    /// Audit timestamp refreshed on every successful patch.
    const UPDATED_AT: Self::Column;

    /// Soft-delete marker; `None` for hard-deleted collections.
    const DELETED_AT: Option<Self::Column>;

    /// Default list ordering, always descending.
    const SORT: Self::Column;

    /// Column matched by the `role` criterion, if supported.
    const ROLE: Option<Self::Column> = None;

    /// Column matched by the `status` criterion, if supported.
    const STATUS: Option<Self::Column> = None;

    /// Column matched by the `email` criterion, if supported.
    ///
    /// Values in this column are stored lower-cased.
    const EMAIL: Option<Self::Column> = None;
}
