//! Server-side API backend and business logic.
//!
//! This module contains the backend for the JCI platform: users, job offers,
//! entreprises, employment links (emplois), candidate profiles and applications.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules: uniqueness checks and the patch pipeline
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, create params and patch types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! The generic engine shared by every collection lives beside the layers:
//!
//! - **Schema** (`schema`) - Static collection descriptors (id, timestamps, filterable columns)
//! - **Query** (`query/`) - Filter builder turning list criteria into a predicate
//! - **Patch** (`patch/`) - Change detection and partial-update application
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** parses the path id and body, converts DTOs to params, calls service
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod patch;
pub mod query;
pub mod router;
pub mod schema;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
