//! JCI Test Utils
//!
//! Shared testing utilities for the JCI API. Provides a builder for test contexts backed
//! by in-memory SQLite databases plus factories for seeding every collection.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the test database schema
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Errors that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```
//!
//! Tests that depend on the partial unique indexes should use `with_migrations()`, which
//! runs the real migrator instead of deriving tables from entities.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
