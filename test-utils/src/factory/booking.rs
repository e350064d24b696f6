//! Booking factory for creating test booking entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings.
///
/// Does not touch the seat row; callers that need a consistent seat should create it
/// with `SeatFactory::reserved(true)`.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    passenger_id: i32,
    flight_id: i32,
    seat_id: i32,
    status: i32,
    price: f64,
    description: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - status: `1` (Confirmed)
    /// - price: `199.0`
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, passenger_id: i32, flight_id: i32, seat_id: i32) -> Self {
        Self {
            db,
            passenger_id,
            flight_id,
            seat_id,
            status: 1,
            price: 199.0,
            description: None,
        }
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            passenger_id: ActiveValue::Set(self.passenger_id),
            flight_id: ActiveValue::Set(self.flight_id),
            seat_id: ActiveValue::Set(self.seat_id),
            status: ActiveValue::Set(self.status),
            price: ActiveValue::Set(self.price),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    passenger_id: i32,
    flight_id: i32,
    seat_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, passenger_id, flight_id, seat_id)
        .build()
        .await
}
