pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_aircraft_table;
mod m20250601_000002_create_airport_table;
mod m20250601_000003_create_flight_table;
mod m20250601_000004_create_seat_table;
mod m20250602_000005_create_user_table;
mod m20250602_000006_create_passenger_table;
mod m20250603_000007_create_booking_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_aircraft_table::Migration),
            Box::new(m20250601_000002_create_airport_table::Migration),
            Box::new(m20250601_000003_create_flight_table::Migration),
            Box::new(m20250601_000004_create_seat_table::Migration),
            Box::new(m20250602_000005_create_user_table::Migration),
            Box::new(m20250602_000006_create_passenger_table::Migration),
            Box::new(m20250603_000007_create_booking_table::Migration),
        ]
    }
}
