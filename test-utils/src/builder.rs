use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables (or request the full migrated schema), then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Candidat, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Candidat)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entity models, executed in order.
    tables: Vec<TableCreateStatement>,

    /// Whether to run the migrator instead of the entity-derived statements.
    migrate: bool,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            migrate: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables of all six collections.
    ///
    /// Entity-derived tables carry no partial unique indexes; use `with_migrations()`
    /// when a test relies on the database rejecting duplicate active rows.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Entreprise)
            .with_table(Job)
            .with_table(Emploi)
            .with_table(Candidat)
            .with_table(Application)
    }

    /// Builds the schema by running the real migrator.
    ///
    /// Takes precedence over any tables added with `with_table()`.
    pub fn with_migrations(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Builds and initializes the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        if self.migrate {
            setup.with_migrations().await?;
        } else {
            setup.with_tables(self.tables).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
