//! Domain & parameter models for flight operations.
//!
//! Defines the flight domain model, the create parameters, the transient
//! `FlightWithIp` response model, and the conversions from entity models and
//! into DTOs.

use crate::model::flight::{FlightDto, FlightPayloadDto, FlightWithIpDto};

/// The flight domain model.
///
/// Values are immutable once built; changing the id of an existing value goes through
/// `with_id`, which returns a new value.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i32,
    pub name: String,
    pub source: String,
    pub destination: String,
    pub ticket_price: Option<f64>,
}

impl Flight {
    /// Converts an entity model to the flight domain model.
    pub fn from_entity(entity: entity::flight::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            source: entity.source,
            destination: entity.destination,
            ticket_price: entity.ticket_price,
        }
    }

    /// Returns a copy of this flight identified by `id`.
    pub fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }

    /// Builds a flight from a request payload and the id taken from the request path.
    pub fn from_payload(id: i32, payload: FlightPayloadDto) -> Self {
        Self {
            id,
            name: payload.name,
            source: payload.source,
            destination: payload.destination,
            ticket_price: payload.ticket_price,
        }
    }

    /// Converts the flight domain model into a DTO.
    pub fn into_dto(self) -> FlightDto {
        FlightDto {
            id: self.id,
            name: self.name,
            source: self.source,
            destination: self.destination,
            ticket_price: self.ticket_price,
        }
    }
}

/// Parameters for creating a new flight
///
/// Carries every field except the id, which the database assigns on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlightParam {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub ticket_price: Option<f64>,
}

impl From<FlightPayloadDto> for CreateFlightParam {
    fn from(dto: FlightPayloadDto) -> Self {
        Self {
            name: dto.name,
            source: dto.source,
            destination: dto.destination,
            ticket_price: dto.ticket_price,
        }
    }
}

/// A flight paired with the address of the server that produced the response.
///
/// Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightWithIp {
    pub flight: Flight,
    pub server_ip: String,
}

impl FlightWithIp {
    pub fn into_dto(self) -> FlightWithIpDto {
        FlightWithIpDto {
            flight: self.flight.into_dto(),
            server_ip: self.server_ip,
        }
    }
}
