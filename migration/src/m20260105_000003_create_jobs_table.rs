use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(pk_auto(Jobs::Id))
                    .col(string(Jobs::Title))
                    .col(text(Jobs::Description))
                    .col(string(Jobs::Location))
                    .col(string(Jobs::ContractType))
                    .col(boolean(Jobs::Remote).default(false))
                    .col(string_null(Jobs::SalaryRange))
                    .col(integer(Jobs::EntrepriseId))
                    .col(integer(Jobs::CreatedBy))
                    .col(string(Jobs::Status).default("draft"))
                    .col(timestamp_with_time_zone(Jobs::CreatedAt))
                    .col(timestamp_with_time_zone(Jobs::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Jobs::ExpiresAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_entreprise_id")
                    .table(Jobs::Table)
                    .col(Jobs::EntrepriseId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Jobs {
    Table,
    Id,
    Title,
    Description,
    Location,
    ContractType,
    Remote,
    SalaryRange,
    EntrepriseId,
    CreatedBy,
    Status,
    CreatedAt,
    UpdatedAt,
    ExpiresAt,
}
