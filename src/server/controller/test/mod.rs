use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{router::router, service::flight::FlightCache, state::AppState};


/// Builds the full router over a fresh database with every table created.
async fn app() -> (TestContext, Router) {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let state = AppState::new(
        db,
        FlightCache::new(Duration::from_secs(60)),
        "SkyBooking".to_string(),
    );

    (test, router().with_state(state))
}

/// Sends one request and returns status, headers and raw body.
async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, headers, bytes.to_vec())
}

/// Sends one request and decodes the JSON body; empty bodies decode to `Null`.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Value) {
    let (status, headers, bytes) = send_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, json)
}

async fn create_airport(app: &Router, code: &str) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/flight/airport",
        Some(json!({ "name": format!("{code} International"), "code": code, "address": "Somewhere 1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().unwrap()
}

async fn create_aircraft(app: &Router, model: &str) -> i64 {
    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/flight/aircraft",
        Some(json!({ "name": "Airbus", "model": model, "manufacturingYear": 2015 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body["id"].as_i64().unwrap()
}

fn flight_body(number: &str, aircraft_id: i64, departure_id: i64, arrival_id: i64) -> Value {
    json!({
        "flightNumber": number,
        "aircraftId": aircraft_id,
        "departureAirportId": departure_id,
        "arrivalAirportId": arrival_id,
        "departureDate": "2099-06-01T10:00:00Z",
        "arrivalDate": "2099-06-01T12:30:00Z",
        "durationMinutes": 150,
        "status": 0,
        "price": 180.0
    })
}

/// Creates airports, an aircraft and a flight; returns the flight JSON.
async fn create_flight(app: &Router, number: &str) -> Value {
    let departure = create_airport(app, &format!("D{number}")).await;
    let arrival = create_airport(app, &format!("A{number}")).await;
    let aircraft = create_aircraft(app, &format!("M-{number}")).await;

    let (status, _, body) = send(
        app,
        Method::POST,
        "/api/v1/flight",
        Some(flight_body(number, aircraft, departure, arrival)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    body
}
