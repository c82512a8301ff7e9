use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Advertised address reported in list responses instead of resolving the host name.
    pub server_ip: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_bind_address(bind_address)?,
            server_ip: std::env::var("SERVER_IP")
                .ok()
                .filter(|ip| !ip.trim().is_empty()),
        })
    }
}

fn parse_bind_address(value: String) -> Result<SocketAddr, ConfigError> {
    value
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "BIND_ADDRESS".to_string(),
            reason: e.to_string(),
            value,
        })
}
