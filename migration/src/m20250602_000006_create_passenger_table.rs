use sea_orm_migration::{prelude::*, schema::*};

use super::m20250602_000005_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Passenger::Table)
                    .if_not_exists()
                    .col(pk_auto(Passenger::Id))
                    .col(integer_null(Passenger::UserId))
                    .col(string(Passenger::Name))
                    .col(string(Passenger::PassportNumber))
                    .col(integer(Passenger::PassengerType).default(0))
                    .col(integer_null(Passenger::Age))
                    .col(boolean(Passenger::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Passenger::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_passenger_user_id")
                            .from(Passenger::Table, Passenger::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_passenger_passport_number")
                    .table(Passenger::Table)
                    .col(Passenger::PassportNumber)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Passenger::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Passenger {
    Table,
    Id,
    UserId,
    Name,
    PassportNumber,
    PassengerType,
    Age,
    IsDeleted,
    CreatedAt,
}
