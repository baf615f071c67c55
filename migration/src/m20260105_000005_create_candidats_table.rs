use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidats::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidats::Id))
                    .col(integer(Candidats::UserId))
                    .col(string_null(Candidats::CvUrl))
                    .col(json(Candidats::Skills))
                    .col(text_null(Candidats::Experience))
                    .col(text_null(Candidats::Education))
                    .col(timestamp_with_time_zone(Candidats::CreatedAt))
                    .col(timestamp_with_time_zone(Candidats::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Candidats::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_candidats_user_active \
                 ON candidats (user_id) WHERE deleted_at IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidats::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Candidats {
    Table,
    Id,
    UserId,
    CvUrl,
    Skills,
    Experience,
    Education,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
