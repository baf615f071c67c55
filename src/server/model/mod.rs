//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//!
//! Domain models serialize (camelCase) with the same field names as their patch types so
//! the change detector can compare the two directly.

pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod job;
pub mod user;

use crate::model::api::PageDto;

/// One page of domain models plus the total number of matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Converts every item and wraps the result in the wire page type.
    pub fn into_dto<D>(self, convert: impl Fn(T) -> D) -> PageDto<D> {
        PageDto {
            total: self.total,
            results: self.results.into_iter().map(convert).collect(),
        }
    }
}
