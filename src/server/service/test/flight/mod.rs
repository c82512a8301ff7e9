use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::flight::FlightRepository,
    error::{flight::FlightError, AppError},
    model::flight::{CreateFlightParam, Flight},
    service::{
        flight::FlightService,
        host::{HostAddressProvider, StaticHostAddress},
    },
};

mod get;
mod update;

fn create_param(name: &str) -> CreateFlightParam {
    CreateFlightParam {
        name: name.to_string(),
        source: "Delhi".to_string(),
        destination: "Mumbai".to_string(),
        ticket_price: Some(5000.0),
    }
}

/// Host provider that always fails to resolve.
struct UnresolvableHost;

#[async_trait]
impl HostAddressProvider for UnresolvableHost {
    async fn server_ip(&self) -> Result<String, AppError> {
        Err(AppError::HostResolution("no such host".to_string()))
    }
}
