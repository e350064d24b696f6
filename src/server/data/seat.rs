//! Seat data repository for database operations.
//!
//! Provides the `SeatRepository`. Reservation and release are conditional updates so
//! concurrent requests for the same seat cannot both succeed.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::seat::{CreateSeatParam, Seat},
};

pub struct SeatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a free seat on a flight.
    pub async fn create(&self, param: CreateSeatParam) -> Result<Seat, AppError> {
        let entity = entity::seat::ActiveModel {
            flight_id: ActiveValue::Set(param.flight_id),
            seat_number: ActiveValue::Set(param.seat_number),
            seat_type: ActiveValue::Set(param.seat_type.into()),
            seat_class: ActiveValue::Set(param.seat_class.into()),
            is_reserved: ActiveValue::Set(false),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Seat::from_entity(entity)?)
    }

    /// Gets a non-deleted seat by flight and seat number.
    pub async fn find_by_number(
        &self,
        flight_id: i32,
        seat_number: &str,
    ) -> Result<Option<Seat>, AppError> {
        let entity = entity::prelude::Seat::find()
            .filter(entity::seat::Column::FlightId.eq(flight_id))
            .filter(entity::seat::Column::SeatNumber.eq(seat_number))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Seat::from_entity).transpose()?)
    }

    /// Checks whether the flight already has a non-deleted seat with this number.
    pub async fn exists_on_flight(&self, flight_id: i32, seat_number: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Seat::find()
            .filter(entity::seat::Column::FlightId.eq(flight_id))
            .filter(entity::seat::Column::SeatNumber.eq(seat_number))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the free, non-deleted seats of a flight ordered by seat number.
    pub async fn get_available(&self, flight_id: i32) -> Result<Vec<Seat>, AppError> {
        let entities = entity::prelude::Seat::find()
            .filter(entity::seat::Column::FlightId.eq(flight_id))
            .filter(entity::seat::Column::IsReserved.eq(false))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .order_by_asc(entity::seat::Column::SeatNumber)
            .all(self.db)
            .await?;

        let seats = entities
            .into_iter()
            .map(Seat::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(seats)
    }

    /// Gets the lowest-numbered free seat of a flight, if any.
    pub async fn first_available(&self, flight_id: i32) -> Result<Option<Seat>, AppError> {
        let entity = entity::prelude::Seat::find()
            .filter(entity::seat::Column::FlightId.eq(flight_id))
            .filter(entity::seat::Column::IsReserved.eq(false))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .order_by_asc(entity::seat::Column::SeatNumber)
            .one(self.db)
            .await?;

        Ok(entity.map(Seat::from_entity).transpose()?)
    }

    /// Marks a seat reserved only if it is currently free.
    ///
    /// # Returns
    /// - `Ok(true)` - This call reserved the seat
    /// - `Ok(false)` - The seat was already reserved, deleted or missing
    pub async fn reserve(&self, seat_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Seat::update_many()
            .col_expr(entity::seat::Column::IsReserved, Expr::value(true))
            .filter(entity::seat::Column::Id.eq(seat_id))
            .filter(entity::seat::Column::IsReserved.eq(false))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Marks a seat free again.
    pub async fn release(&self, seat_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Seat::update_many()
            .col_expr(entity::seat::Column::IsReserved, Expr::value(false))
            .filter(entity::seat::Column::Id.eq(seat_id))
            .filter(entity::seat::Column::IsReserved.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Soft-deletes the seats of one flight.
    pub async fn soft_delete_by_flight(&self, flight_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Seat::update_many()
            .col_expr(entity::seat::Column::IsDeleted, Expr::value(true))
            .filter(entity::seat::Column::FlightId.eq(flight_id))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Soft-deletes every seat, returning how many rows changed.
    pub async fn soft_delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Seat::update_many()
            .col_expr(entity::seat::Column::IsDeleted, Expr::value(true))
            .filter(entity::seat::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
