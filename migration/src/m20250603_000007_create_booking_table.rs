use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000003_create_flight_table::Flight, m20250601_000004_create_seat_table::Seat,
    m20250602_000006_create_passenger_table::Passenger,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::PassengerId))
                    .col(integer(Booking::FlightId))
                    .col(integer(Booking::SeatId))
                    .col(integer(Booking::Status))
                    .col(double(Booking::Price))
                    .col(text_null(Booking::Description))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_passenger_id")
                            .from(Booking::Table, Booking::PassengerId)
                            .to(Passenger::Table, Passenger::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_flight_id")
                            .from(Booking::Table, Booking::FlightId)
                            .to(Flight::Table, Flight::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_seat_id")
                            .from(Booking::Table, Booking::SeatId)
                            .to(Seat::Table, Seat::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    PassengerId,
    FlightId,
    SeatId,
    Status,
    Price,
    Description,
    CreatedAt,
}
