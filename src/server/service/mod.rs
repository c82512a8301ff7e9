//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services work with domain
//! models rather than DTOs or entity models.

pub mod flight;
pub mod host;
