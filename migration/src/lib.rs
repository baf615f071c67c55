pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_users_table;
mod m20260105_000002_create_entreprises_table;
mod m20260105_000003_create_jobs_table;
mod m20260105_000004_create_emplois_table;
mod m20260105_000005_create_candidats_table;
mod m20260105_000006_create_applications_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_users_table::Migration),
            Box::new(m20260105_000002_create_entreprises_table::Migration),
            Box::new(m20260105_000003_create_jobs_table::Migration),
            Box::new(m20260105_000004_create_emplois_table::Migration),
            Box::new(m20260105_000005_create_candidats_table::Migration),
            Box::new(m20260105_000006_create_applications_table::Migration),
        ]
    }
}
