//! Booking creation, lookup and cancellation.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, flight::FlightRepository, passenger::PassengerRepository,
        seat::SeatRepository,
    },
    error::{
        booking::BookingError, flight::FlightError, passenger::PassengerError, seat::SeatError,
        AppError,
    },
    model::booking::{BookingStatus, BookingView, CreateBookingParam, InsertBookingParam},
};

/// Service orchestrating passengers, flights and seats into bookings.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for repository operations
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a seat on a flight for a passenger.
    ///
    /// Checks run in order: passenger exists, flight exists, flight takes bookings, seat.
    /// A requested seat must exist and be free; otherwise the lowest-numbered free seat
    /// is taken. Seat reservation and booking insert share one transaction.
    ///
    /// # Returns
    /// - `Ok(BookingView)` - The confirmed booking
    /// - `Err(AppError::PassengerErr)` / `Err(AppError::FlightErr)` - Missing reference (404)
    /// - `Err(AppError::BookingErr(FlightNotOpen))` - Flight status forbids bookings (400)
    /// - `Err(AppError::SeatErr)` - Requested seat missing (404) or taken (409)
    /// - `Err(AppError::BookingErr(NoSeatsAvailable))` - Flight is full (409)
    pub async fn create(&self, param: CreateBookingParam) -> Result<BookingView, AppError> {
        let passenger = PassengerRepository::new(self.db)
            .find_by_id(param.passenger_id)
            .await?
            .ok_or(PassengerError::NotFound)?;
        let flight = FlightRepository::new(self.db)
            .find_by_id(param.flight_id)
            .await?
            .ok_or(FlightError::NotFound)?;

        if !flight.status.is_open_for_booking() {
            return Err(BookingError::FlightNotOpen.into());
        }

        let txn = self.db.begin().await?;
        let seat_repo = SeatRepository::new(&txn);

        let seat = match param.seat_number.as_deref() {
            Some(seat_number) => {
                let seat = seat_repo
                    .find_by_number(flight.id, seat_number)
                    .await?
                    .ok_or(SeatError::NotFound)?;
                if seat.is_reserved || !seat_repo.reserve(seat.id).await? {
                    return Err(SeatError::AlreadyReserved.into());
                }
                seat
            }
            None => {
                let seat = seat_repo
                    .first_available(flight.id)
                    .await?
                    .ok_or(BookingError::NoSeatsAvailable)?;
                if !seat_repo.reserve(seat.id).await? {
                    return Err(BookingError::NoSeatsAvailable.into());
                }
                seat
            }
        };

        let booking = BookingRepository::new(&txn)
            .create(InsertBookingParam {
                passenger_id: passenger.id,
                flight_id: flight.id,
                seat_id: seat.id,
                status: BookingStatus::Confirmed,
                price: flight.price,
                description: param.description,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            passenger_id = passenger.id,
            flight_number = %flight.flight_number,
            seat_number = %seat.seat_number,
            "booking confirmed"
        );

        Ok(BookingView {
            booking,
            passenger_name: passenger.name,
            flight_number: flight.flight_number,
            seat_number: seat.seat_number,
        })
    }

    /// Gets a booking with its passenger, flight and seat resolved for display.
    ///
    /// # Arguments
    /// - `id` - Booking ID
    ///
    /// # Returns
    /// - `Ok(BookingView)` - The booking, cancelled ones included
    /// - `Err(AppError::BookingErr(NotFound))` - No booking with this ID (404)
    pub async fn get_by_id(&self, id: i32) -> Result<BookingView, AppError> {
        BookingRepository::new(self.db)
            .find_view_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound.into())
    }

    /// Lists bookings newest first, optionally for one passenger.
    pub async fn get_all(&self, passenger_id: Option<i32>) -> Result<Vec<BookingView>, AppError> {
        let repo = BookingRepository::new(self.db);
        let bookings = repo.get_all(passenger_id).await?;

        repo.into_views(bookings).await
    }

    /// Cancels a booking and frees its seat in one transaction.
    ///
    /// # Returns
    /// - `Ok(BookingView)` - The booking with status `Cancelled`
    /// - `Err(AppError::BookingErr)` - Booking missing (404) or already cancelled (409)
    pub async fn cancel(&self, id: i32) -> Result<BookingView, AppError> {
        let txn = self.db.begin().await?;
        let repo = BookingRepository::new(&txn);

        let booking = repo.find_by_id(id).await?.ok_or(BookingError::NotFound)?;
        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled.into());
        }

        let booking = repo
            .update_status(id, BookingStatus::Cancelled)
            .await?
            .ok_or(BookingError::NotFound)?;
        SeatRepository::new(&txn).release(booking.seat_id).await?;

        let view = repo
            .into_views(vec![booking])
            .await?
            .into_iter()
            .next()
            .ok_or(BookingError::NotFound)?;

        txn.commit().await?;

        tracing::info!(booking_id = id, seat_id = view.booking.seat_id, "booking cancelled");

        Ok(view)
    }
}
