use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored flight as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightDto {
    #[serde(alias = "flightId")]
    pub id: i32,
    #[serde(alias = "flightName")]
    pub name: String,
    pub source: String,
    pub destination: String,
    pub ticket_price: Option<f64>,
}

/// Request body for creating or replacing a flight.
///
/// Any `id` sent by the client is ignored: on create the database assigns it and on
/// update it is taken from the request path. The legacy `flightName` key is accepted
/// as an alias for `name`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightPayloadDto {
    #[serde(default, alias = "flightName")]
    pub name: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub ticket_price: Option<f64>,
}

/// A flight paired with the address of the server instance that answered the request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FlightWithIpDto {
    pub flight: FlightDto,
    #[serde(rename = "serverIP")]
    pub server_ip: String,
}
