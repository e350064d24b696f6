//! Flight data repository for database operations.
//!
//! Provides the `FlightRepository` for creating, editing, soft-deleting and searching
//! flights. Entity models are converted to the `Flight` domain model before leaving this
//! module; a stored status outside the known range surfaces as an internal error.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::flight::{AvailableFlightsParam, CreateFlightParam, Flight},
    util::parse::day_bounds,
};

/// Repository providing database operations for flights.
///
/// Holds a reference to either the connection pool or an open transaction.
pub struct FlightRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FlightRepository<'a, C> {
    /// Creates a new FlightRepository instance.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction to run queries on
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new flight.
    ///
    /// `flight_date` is set to the departure date.
    ///
    /// # Arguments
    /// - `param` - Validated flight fields
    ///
    /// # Returns
    /// - `Ok(Flight)` - The created flight with generated ID
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, AppError> {
        let entity = entity::flight::ActiveModel {
            flight_number: ActiveValue::Set(param.flight_number),
            aircraft_id: ActiveValue::Set(param.aircraft_id),
            departure_airport_id: ActiveValue::Set(param.departure_airport_id),
            arrival_airport_id: ActiveValue::Set(param.arrival_airport_id),
            departure_date: ActiveValue::Set(param.departure_date),
            arrival_date: ActiveValue::Set(param.arrival_date),
            flight_date: ActiveValue::Set(param.departure_date),
            duration_minutes: ActiveValue::Set(param.duration_minutes),
            status: ActiveValue::Set(param.status.into()),
            price: ActiveValue::Set(param.price),
            is_deleted: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(entity)?)
    }

    /// Overwrites every editable field of a non-deleted flight.
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The updated flight
    /// - `Ok(None)` - No non-deleted flight has this ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: CreateFlightParam,
    ) -> Result<Option<Flight>, AppError> {
        let Some(existing) = entity::prelude::Flight::find_by_id(id)
            .filter(entity::flight::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::flight::ActiveModel = existing.into();
        active_model.flight_number = ActiveValue::Set(param.flight_number);
        active_model.aircraft_id = ActiveValue::Set(param.aircraft_id);
        active_model.departure_airport_id = ActiveValue::Set(param.departure_airport_id);
        active_model.arrival_airport_id = ActiveValue::Set(param.arrival_airport_id);
        active_model.departure_date = ActiveValue::Set(param.departure_date);
        active_model.arrival_date = ActiveValue::Set(param.arrival_date);
        active_model.flight_date = ActiveValue::Set(param.departure_date);
        active_model.duration_minutes = ActiveValue::Set(param.duration_minutes);
        active_model.status = ActiveValue::Set(param.status.into());
        active_model.price = ActiveValue::Set(param.price);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Flight::from_entity(entity)?))
    }

    /// Gets a non-deleted flight by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, AppError> {
        let entity = entity::prelude::Flight::find_by_id(id)
            .filter(entity::flight::Column::IsDeleted.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Flight::from_entity).transpose()?)
    }

    /// Checks whether a non-deleted flight uses `flight_number`.
    ///
    /// # Arguments
    /// - `flight_number` - Number to look for
    /// - `excluding_id` - Flight to ignore, used when editing that flight
    pub async fn exists_by_number(
        &self,
        flight_number: &str,
        excluding_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Flight::find()
            .filter(entity::flight::Column::FlightNumber.eq(flight_number))
            .filter(entity::flight::Column::IsDeleted.eq(false));

        if let Some(id) = excluding_id {
            query = query.filter(entity::flight::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Searches non-deleted flights matching every provided filter.
    ///
    /// Date filters match the whole UTC calendar day of the stored timestamp. Results are
    /// ordered by departure date, then ID.
    pub async fn find_available(
        &self,
        filter: &AvailableFlightsParam,
    ) -> Result<Vec<Flight>, AppError> {
        use entity::flight::Column;

        let mut query = entity::prelude::Flight::find().filter(Column::IsDeleted.eq(false));

        if let Some(id) = filter.departure_airport_id {
            query = query.filter(Column::DepartureAirportId.eq(id));
        }
        if let Some(id) = filter.arrival_airport_id {
            query = query.filter(Column::ArrivalAirportId.eq(id));
        }
        if let Some(day) = filter.departure_date {
            let (start, end) = day_bounds(day);
            query = query
                .filter(Column::DepartureDate.gte(start))
                .filter(Column::DepartureDate.lt(end));
        }
        if let Some(day) = filter.arrival_date {
            let (start, end) = day_bounds(day);
            query = query
                .filter(Column::ArrivalDate.gte(start))
                .filter(Column::ArrivalDate.lt(end));
        }

        let entities = query
            .order_by_asc(Column::DepartureDate)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        let flights = entities
            .into_iter()
            .map(Flight::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(flights)
    }

    /// Soft-deletes one flight.
    ///
    /// # Returns
    /// - `Ok(true)` - The flight was marked deleted
    /// - `Ok(false)` - No non-deleted flight has this ID
    pub async fn soft_delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Flight::update_many()
            .col_expr(entity::flight::Column::IsDeleted, Expr::value(true))
            .filter(entity::flight::Column::Id.eq(id))
            .filter(entity::flight::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Soft-deletes every flight, returning how many rows changed.
    pub async fn soft_delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Flight::update_many()
            .col_expr(entity::flight::Column::IsDeleted, Expr::value(true))
            .filter(entity::flight::Column::IsDeleted.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
