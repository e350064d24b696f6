use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    controller::{
        aircraft::{create_aircraft, get_aircraft},
        airport::{create_airport, get_airport_by_id, get_airports},
        booking::{cancel_booking, create_booking, get_booking_by_id, get_bookings},
        flight::{
            clear_all_data, clear_flights, create_flight, delete_flight, get_available_flights,
            get_flight_by_id, update_flight,
        },
        health::{health, root},
        identity::register_user,
        passenger::{complete_registration, get_passenger_by_id, get_passengers},
        seat::{create_seat, get_available_seats, reserve_seat},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/identity/register-user", post(register_user))
        .route("/api/v1/flight", post(create_flight).put(update_flight))
        .route(
            "/api/v1/flight/{id}",
            get(get_flight_by_id).delete(delete_flight),
        )
        .route("/api/v1/flights/available", get(get_available_flights))
        .route("/api/v1/flight/clear", post(clear_flights))
        .route("/api/v1/flight/clear-all", post(clear_all_data))
        .route("/api/v1/flight/seat", post(create_seat))
        .route(
            "/api/v1/flight/get-available-seats/{flight_id}",
            get(get_available_seats),
        )
        .route("/api/v1/flight/reserve-seat", post(reserve_seat))
        .route("/api/v1/flight/airport", post(create_airport))
        .route("/api/v1/flight/aircraft", post(create_aircraft))
        .route("/api/v1/airports", get(get_airports))
        .route("/api/v1/airports/{id}", get(get_airport_by_id))
        .route("/api/v1/aircraft", get(get_aircraft))
        .route("/api/v1/passenger", get(get_passengers))
        .route("/api/v1/passenger/{id}", get(get_passenger_by_id))
        .route(
            "/api/v1/passenger/complete-registration",
            post(complete_registration),
        )
        .route("/api/v1/booking", post(create_booking).get(get_bookings))
        .route("/api/v1/booking/{id}", get(get_booking_by_id))
        .route("/api/v1/booking/{id}/cancel", post(cancel_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
