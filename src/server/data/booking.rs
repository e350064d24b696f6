//! Booking data repository for database operations.
//!
//! Besides plain CRUD, `into_views` resolves the passenger name, flight number and seat
//! number shown alongside every booking with one query per referenced table.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::passenger::PassengerRepository,
    error::{internal::InternalError, AppError},
    model::booking::{Booking, BookingStatus, BookingView, InsertBookingParam},
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking row.
    pub async fn create(&self, param: InsertBookingParam) -> Result<Booking, AppError> {
        let entity = entity::booking::ActiveModel {
            passenger_id: ActiveValue::Set(param.passenger_id),
            flight_id: ActiveValue::Set(param.flight_id),
            seat_id: ActiveValue::Set(param.seat_id),
            status: ActiveValue::Set(param.status.into()),
            price: ActiveValue::Set(param.price),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity)?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, AppError> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity).transpose()?)
    }

    /// Gets bookings newest first, optionally only those of one passenger.
    pub async fn get_all(&self, passenger_id: Option<i32>) -> Result<Vec<Booking>, AppError> {
        let mut query = entity::prelude::Booking::find();

        if let Some(passenger_id) = passenger_id {
            query = query.filter(entity::booking::Column::PassengerId.eq(passenger_id));
        }

        let entities = query
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        let bookings = entities
            .into_iter()
            .map(Booking::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookings)
    }

    /// Changes the status of a booking.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking has this ID
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let Some(existing) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = existing.into();
        active_model.status = ActiveValue::Set(status.into());

        let entity = active_model.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)?))
    }

    /// Attaches display names to bookings, keeping their order.
    ///
    /// Soft-deleted flights, seats and passengers still resolve so that history stays
    /// readable. A reference to a row that does not exist at all is an internal error.
    pub async fn into_views(&self, bookings: Vec<Booking>) -> Result<Vec<BookingView>, AppError> {
        if bookings.is_empty() {
            return Ok(Vec::new());
        }

        let passenger_ids: HashSet<i32> = bookings.iter().map(|b| b.passenger_id).collect();
        let flight_ids: HashSet<i32> = bookings.iter().map(|b| b.flight_id).collect();
        let seat_ids: HashSet<i32> = bookings.iter().map(|b| b.seat_id).collect();

        let passenger_names = PassengerRepository::new(self.db)
            .names_by_ids(passenger_ids.into_iter().collect())
            .await?;
        let flight_numbers: HashMap<i32, String> = entity::prelude::Flight::find()
            .filter(entity::flight::Column::Id.is_in(flight_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|f| (f.id, f.flight_number))
            .collect();
        let seat_numbers: HashMap<i32, String> = entity::prelude::Seat::find()
            .filter(entity::seat::Column::Id.is_in(seat_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.seat_number))
            .collect();

        bookings
            .into_iter()
            .map(|booking| {
                let missing = |kind: &str, id: i32| {
                    AppError::from(InternalError::DanglingReference {
                        booking_id: booking.id,
                        kind: kind.to_string(),
                        id,
                    })
                };

                let passenger_name = passenger_names
                    .get(&booking.passenger_id)
                    .cloned()
                    .ok_or_else(|| missing("passenger", booking.passenger_id))?;
                let flight_number = flight_numbers
                    .get(&booking.flight_id)
                    .cloned()
                    .ok_or_else(|| missing("flight", booking.flight_id))?;
                let seat_number = seat_numbers
                    .get(&booking.seat_id)
                    .cloned()
                    .ok_or_else(|| missing("seat", booking.seat_id))?;

                Ok(BookingView {
                    booking,
                    passenger_name,
                    flight_number,
                    seat_number,
                })
            })
            .collect()
    }

    /// Convenience for a single booking view.
    pub async fn find_view_by_id(&self, id: i32) -> Result<Option<BookingView>, AppError> {
        let Some(booking) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.into_views(vec![booking]).await?.into_iter().next())
    }
}
