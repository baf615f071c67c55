//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, uniqueness rules and the patch pipeline
//! - **Orchestration**: Coordinating repository calls for a single request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Every service borrows the connection it is constructed with; nothing is global.

pub mod application;
pub mod candidat;
pub mod emploi;
pub mod entreprise;
pub mod job;
pub mod user;
