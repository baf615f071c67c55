//! SeaORM entities for the JCI collections.
//!
//! Each module maps one collection to a table. References between collections
//! (`user_id`, `entreprise_id`, `job_id`, `candidat_id`, `created_by`) are plain
//! integer columns without relations, so nothing cascades.

pub mod prelude;

pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod job;
pub mod user;
