use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entreprises::Table)
                    .if_not_exists()
                    .col(pk_auto(Entreprises::Id))
                    .col(string_uniq(Entreprises::Name))
                    .col(text_null(Entreprises::Description))
                    .col(string_null(Entreprises::Logo))
                    .col(string_null(Entreprises::Website))
                    .col(string_null(Entreprises::Location))
                    .col(integer(Entreprises::CreatedBy))
                    .col(timestamp_with_time_zone(Entreprises::CreatedAt))
                    .col(timestamp_with_time_zone(Entreprises::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entreprises::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Entreprises {
    Table,
    Id,
    Name,
    Description,
    Logo,
    Website,
    Location,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
