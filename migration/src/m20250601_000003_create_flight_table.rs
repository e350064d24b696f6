use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250601_000001_create_aircraft_table::Aircraft,
    m20250601_000002_create_airport_table::Airport,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flight::Table)
                    .if_not_exists()
                    .col(pk_auto(Flight::Id))
                    .col(string_len(Flight::FlightNumber, 10))
                    .col(integer(Flight::AircraftId))
                    .col(integer(Flight::DepartureAirportId))
                    .col(integer(Flight::ArrivalAirportId))
                    .col(timestamp_with_time_zone(Flight::DepartureDate))
                    .col(timestamp_with_time_zone(Flight::ArrivalDate))
                    .col(timestamp_with_time_zone(Flight::FlightDate))
                    .col(integer(Flight::DurationMinutes))
                    .col(integer(Flight::Status))
                    .col(double(Flight::Price))
                    .col(boolean(Flight::IsDeleted).default(false))
                    .col(
                        timestamp_with_time_zone(Flight::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_aircraft_id")
                            .from(Flight::Table, Flight::AircraftId)
                            .to(Aircraft::Table, Aircraft::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_departure_airport_id")
                            .from(Flight::Table, Flight::DepartureAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_arrival_airport_id")
                            .from(Flight::Table, Flight::ArrivalAirportId)
                            .to(Airport::Table, Airport::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability filters on the route and the departure day
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_route_departure")
                    .table(Flight::Table)
                    .col(Flight::DepartureAirportId)
                    .col(Flight::ArrivalAirportId)
                    .col(Flight::DepartureDate)
                    .to_owned(),
            )
            .await?;

        // Soft-deleted flights release their number
        manager
            .create_index(
                Index::create()
                    .name("idx_flight_number")
                    .table(Flight::Table)
                    .col(Flight::FlightNumber)
                    .unique()
                    .and_where(Expr::col(Flight::IsDeleted).eq(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flight::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Flight {
    Table,
    Id,
    FlightNumber,
    AircraftId,
    DepartureAirportId,
    ArrivalAirportId,
    DepartureDate,
    ArrivalDate,
    FlightDate,
    DurationMinutes,
    Status,
    Price,
    IsDeleted,
    CreatedAt,
}
