use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(pk_auto(Applications::Id))
                    .col(integer(Applications::JobId))
                    .col(integer(Applications::CandidatId))
                    .col(string_null(Applications::CvUrl))
                    .col(text_null(Applications::CoverLetter))
                    .col(string(Applications::Status).default("submitted"))
                    .col(timestamp_with_time_zone(Applications::AppliedAt))
                    .col(timestamp_with_time_zone(Applications::CreatedAt))
                    .col(timestamp_with_time_zone(Applications::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Applications::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // One active application per candidate and job
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_applications_job_candidat_active \
                 ON applications (job_id, candidat_id) WHERE deleted_at IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Applications {
    Table,
    Id,
    JobId,
    CandidatId,
    CvUrl,
    CoverLetter,
    Status,
    AppliedAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
