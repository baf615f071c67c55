use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Emplois::Table)
                    .if_not_exists()
                    .col(pk_auto(Emplois::Id))
                    .col(integer(Emplois::UserId))
                    .col(integer(Emplois::EntrepriseId))
                    .col(string(Emplois::Position))
                    .col(timestamp_with_time_zone(Emplois::CreatedAt))
                    .col(timestamp_with_time_zone(Emplois::UpdatedAt))
                    .col(timestamp_with_time_zone_null(Emplois::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // A user holds at most one active position per entreprise
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_emplois_user_entreprise_active \
                 ON emplois (user_id, entreprise_id) WHERE deleted_at IS NULL",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Emplois::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Emplois {
    Table,
    Id,
    UserId,
    EntrepriseId,
    Position,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
