//! Resolution of the address this server instance is reachable at.
//!
//! List responses are tagged with the address of the instance that served them so that
//! requests behind a load balancer can be traced back to a backend. The capability is a
//! trait so deployments where local resolution is unreliable (containers, multi-NIC hosts)
//! can substitute a configured address.

use std::net::{IpAddr, SocketAddr};

use async_trait::async_trait;

use crate::server::error::AppError;

/// Provides the network address of the current host.
#[async_trait]
pub trait HostAddressProvider: Send + Sync {
    /// Returns the host address as a printable IPv4 or IPv6 string.
    ///
    /// # Returns
    /// - `Ok(String)` - The address of this server
    /// - `Err(AppError::HostResolution)` - The address could not be determined
    async fn server_ip(&self) -> Result<String, AppError>;
}

/// Resolves the machine's host name through the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostAddress;

#[async_trait]
impl HostAddressProvider for SystemHostAddress {
    async fn server_ip(&self) -> Result<String, AppError> {
        let host = hostname::get()
            .map_err(|e| AppError::HostResolution(format!("failed to read host name: {}", e)))?
            .into_string()
            .map_err(|_| AppError::HostResolution("host name is not valid UTF-8".to_string()))?;

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host.as_str(), 0))
            .await
            .map_err(|e| AppError::HostResolution(format!("failed to resolve '{}': {}", host, e)))?
            .collect();

        select_address(&addrs)
            .map(|ip| ip.to_string())
            .ok_or_else(|| AppError::HostResolution(format!("'{}' resolved to no addresses", host)))
    }
}

/// Returns a fixed, configured address.
#[derive(Debug, Clone)]
pub struct StaticHostAddress {
    address: String,
}

impl StaticHostAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[async_trait]
impl HostAddressProvider for StaticHostAddress {
    async fn server_ip(&self) -> Result<String, AppError> {
        Ok(self.address.clone())
    }
}

/// Picks the first IPv4 address, falling back to the first address of any family.
fn select_address(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .map(SocketAddr::ip)
        .find(IpAddr::is_ipv4)
        .or_else(|| addrs.first().map(SocketAddr::ip))
}
