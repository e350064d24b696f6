//! Seat factory for creating test seat entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seats with customizable fields.
///
/// Seat type and class are stored discriminants (1 = Window, 3 = Economy by default).
pub struct SeatFactory<'a> {
    db: &'a DatabaseConnection,
    flight_id: i32,
    seat_number: String,
    seat_type: i32,
    seat_class: i32,
    is_reserved: bool,
    is_deleted: bool,
}

impl<'a> SeatFactory<'a> {
    /// Creates a new SeatFactory with default values.
    ///
    /// Defaults:
    /// - seat_number: `"{id}A"` truncated to five characters
    /// - seat_type: `1` (Window)
    /// - seat_class: `3` (Economy)
    /// - is_reserved: `false`
    /// - is_deleted: `false`
    pub fn new(db: &'a DatabaseConnection, flight_id: i32) -> Self {
        let id = next_id() % 10_000;
        Self {
            db,
            flight_id,
            seat_number: format!("{}A", id),
            seat_type: 1,
            seat_class: 3,
            is_reserved: false,
            is_deleted: false,
        }
    }

    pub fn seat_number(mut self, seat_number: impl Into<String>) -> Self {
        self.seat_number = seat_number.into();
        self
    }

    pub fn seat_type(mut self, seat_type: i32) -> Self {
        self.seat_type = seat_type;
        self
    }

    pub fn seat_class(mut self, seat_class: i32) -> Self {
        self.seat_class = seat_class;
        self
    }

    pub fn reserved(mut self, is_reserved: bool) -> Self {
        self.is_reserved = is_reserved;
        self
    }

    pub fn deleted(mut self, is_deleted: bool) -> Self {
        self.is_deleted = is_deleted;
        self
    }

    /// Builds and inserts the seat entity into the database.
    pub async fn build(self) -> Result<entity::seat::Model, DbErr> {
        entity::seat::ActiveModel {
            id: ActiveValue::NotSet,
            flight_id: ActiveValue::Set(self.flight_id),
            seat_number: ActiveValue::Set(self.seat_number),
            seat_type: ActiveValue::Set(self.seat_type),
            seat_class: ActiveValue::Set(self.seat_class),
            is_reserved: ActiveValue::Set(self.is_reserved),
            is_deleted: ActiveValue::Set(self.is_deleted),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a free seat with the given number on a flight.
pub async fn create_seat(
    db: &DatabaseConnection,
    flight_id: i32,
    seat_number: impl Into<String>,
) -> Result<entity::seat::Model, DbErr> {
    SeatFactory::new(db, flight_id)
        .seat_number(seat_number)
        .build()
        .await
}
