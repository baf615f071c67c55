//! Database repository layer for all collections.
//!
//! Repository structs handle database operations (CRUD) for each collection. They use
//! SeaORM entity models internally and return domain models to keep the data layer
//! separate from business logic. The collection-agnostic operations (active lookups,
//! paginated finds, patch writes, soft and hard deletes) live in [`collection`] and are
//! shared by every repository.

pub mod application;
pub mod candidat;
pub mod collection;
pub mod emploi;
pub mod entreprise;
pub mod job;
pub mod user;

#[cfg(test)]
mod test;
