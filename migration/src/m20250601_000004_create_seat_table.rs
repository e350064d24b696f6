use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000003_create_flight_table::Flight;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seat::Table)
                    .if_not_exists()
                    .col(pk_auto(Seat::Id))
                    .col(integer(Seat::FlightId))
                    .col(string_len(Seat::SeatNumber, 5))
                    .col(integer(Seat::SeatType))
                    .col(integer(Seat::SeatClass))
                    .col(boolean(Seat::IsReserved).default(false))
                    .col(boolean(Seat::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Seat::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_flight_id")
                            .from(Seat::Table, Seat::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_seat_flight_id_seat_number")
                    .table(Seat::Table)
                    .col(Seat::FlightId)
                    .col(Seat::SeatNumber)
                    .unique()
                    .and_where(Expr::col(Seat::IsDeleted).eq(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Seat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Seat {
    Table,
    Id,
    FlightId,
    SeatNumber,
    SeatType,
    SeatClass,
    IsReserved,
    IsDeleted,
    CreatedAt,
}
