use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airport::Table)
                    .if_not_exists()
                    .col(pk_auto(Airport::Id))
                    .col(string(Airport::Name))
                    .col(string(Airport::Code))
                    .col(string(Airport::Address))
                    .col(boolean(Airport::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Airport::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_airport_code")
                    .table(Airport::Table)
                    .col(Airport::Code)
                    .unique()
                    .and_where(Expr::col(Airport::IsDeleted).eq(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Airport {
    Table,
    Id,
    Name,
    Code,
    Address,
    IsDeleted,
    CreatedAt,
}
