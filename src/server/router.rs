//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the flight routes and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /flight/` - Create a flight
/// - `GET /flight/` - List flights with the serving host's address
/// - `GET /flight/{id}` - Get a flight
/// - `PUT /flight/{id}` - Replace a flight
/// - `DELETE /flight/{id}` - Delete a flight
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Airline", description = "Airline flight API"), tags(
        (name = controller::flight::FLIGHT_TAG, description = "Flight API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::flight::create_flight,
            controller::flight::get_all_flights
        ))
        .routes(routes!(
            controller::flight::get_flight,
            controller::flight::update_flight,
            controller::flight::delete_flight
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application router with middleware and state applied.
///
/// Every origin, method and header is allowed cross-origin. Requests are traced
/// through `tracing`.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
