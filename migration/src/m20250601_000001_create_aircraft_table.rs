use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Aircraft::Table)
                    .if_not_exists()
                    .col(pk_auto(Aircraft::Id))
                    .col(string(Aircraft::Name))
                    .col(string(Aircraft::Model))
                    .col(integer(Aircraft::ManufacturingYear))
                    .col(boolean(Aircraft::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Aircraft::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_aircraft_model")
                    .table(Aircraft::Table)
                    .col(Aircraft::Model)
                    .unique()
                    .and_where(Expr::col(Aircraft::IsDeleted).eq(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircraft::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aircraft {
    Table,
    Id,
    Name,
    Model,
    ManufacturingYear,
    IsDeleted,
    CreatedAt,
}
