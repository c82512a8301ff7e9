//! Wire-level DTOs exchanged over the HTTP API.

pub mod api;
pub mod flight;
