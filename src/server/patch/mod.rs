//! Partial-update engine.
//!
//! A patch moves through `received → validated → diffed → applied → reloaded`:
//!
//! 1. The service loads the active record (404 when absent) and rejects patches that
//!    set no field at all ([`ensure_not_empty`]).
//! 2. [`ChangeSet::detect`] compares the patch against the record and keeps only the
//!    fields whose value actually differs. An empty change set is a no-op.
//! 3. [`apply`] writes exactly those fields plus the audit timestamp.
//! 4. The service reloads the record and returns it.
//!
//! Patch types describe their writable fields through [`PatchSchema`], a static table
//! mapping each JSON field name to its column and value accessor.

pub mod apply;
pub mod detect;

use sea_orm::{EntityTrait, Value};
use serde::Serialize;

use crate::server::{error::AppError, schema::Collection};

pub use apply::apply;
pub use detect::ChangeSet;

/// One writable field of a patch type.
pub struct PatchField<P, C> {
    /// Serialized (camelCase) name, identical to the key the patch serializes to.
    pub name: &'static str,
    pub column: C,
    /// Value to write, `None` when the field is not set in the patch.
    pub value: fn(&P) -> Option<Value>,
}

/// A partial-update payload for collection `Entity`.
///
/// Implementors serialize only their set fields, under the same names listed in
/// `FIELDS`.
pub trait PatchSchema: Serialize + Sized + 'static {
    type Entity: Collection;

    const FIELDS: &'static [PatchField<Self, <Self::Entity as EntityTrait>::Column>];

    /// Names of all patchable fields, in declaration order.
    fn field_names() -> Vec<&'static str> {
        Self::FIELDS.iter().map(|field| field.name).collect()
    }
}

/// Result of running a patch through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOutcome<T> {
    /// Every set field already matched; nothing was written.
    Unchanged,
    /// The record after the write.
    Updated(T),
}

/// Rejects a patch that sets none of its fields.
///
/// # Returns
/// - `Ok(())` - At least one field is set
/// - `Err(AppError::Validation)` - Nothing to update; the message lists the patchable fields
pub fn ensure_not_empty<P: PatchSchema>(patch: &P) -> Result<(), AppError> {
    if P::FIELDS.iter().any(|field| (field.value)(patch).is_some()) {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "Only the following fields can be updated: {}",
        P::field_names().join(", ")
    )))
}
