use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        flight::{FlightDto, FlightPayloadDto, FlightWithIpDto},
    },
    server::{
        data::flight::FlightRepository,
        error::AppError,
        model::flight::{CreateFlightParam, Flight, FlightWithIp},
        service::flight::FlightService,
        state::AppState,
    },
};

/// Tag for grouping flight endpoints in OpenAPI documentation
pub static FLIGHT_TAG: &str = "flight";

/// Create a new flight.
///
/// Any id present in the body is ignored; the database assigns one.
///
/// # Returns
/// - `201 Created` - The stored flight including its assigned id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/flight/",
    tag = FLIGHT_TAG,
    request_body = FlightPayloadDto,
    responses(
        (status = 201, description = "Successfully created flight", body = FlightDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<FlightPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(FlightRepository::new(&state.db))
        .create(CreateFlightParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(flight.into_dto())))
}

/// List every flight, each tagged with the address of the server that answered.
///
/// # Returns
/// - `200 OK` - All stored flights; empty when none exist
/// - `500 Internal Server Error` - Database error or the server address could not be resolved
#[utoipa::path(
    get,
    path = "/flight/",
    tag = FLIGHT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved flights", body = Vec<FlightWithIpDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_flights(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Fetching all flights");

    let flights = FlightService::new(FlightRepository::new(&state.db))
        .get_all_with_ip(state.host.as_ref())
        .await?;

    let dto: Vec<FlightWithIpDto> = flights.into_iter().map(FlightWithIp::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Fetching flight with ID: {}", id);

    let flight = FlightService::new(FlightRepository::new(&state.db))
        .get(id)
        .await?;

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

/// Replace a flight.
///
/// The id from the path always wins over any id in the body.
///
/// # Returns
/// - `200 OK` - The flight as stored
/// - `404 Not Found` - No flight has this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    request_body = FlightPayloadDto,
    responses(
        (status = 200, description = "Successfully updated flight", body = FlightDto),
        (status = 404, description = "Flight not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<FlightPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(FlightRepository::new(&state.db))
        .update(id, Flight::from_payload(id, payload))
        .await?;

    tracing::info!("Successfully updated flight with ID: {}", id);

    Ok((StatusCode::OK, Json(flight.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/flight/{id}",
    tag = FLIGHT_TAG,
    params(
        ("id" = i32, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Flight deleted, or no flight had this id", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = FlightService::new(FlightRepository::new(&state.db))
        .delete(id)
        .await?;

    Ok((StatusCode::OK, format!("Flight ID: {}", id)))
}
