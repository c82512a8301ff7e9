use crate::server::{
    data::flight::FlightStore,
    error::{flight::FlightError, AppError},
    model::flight::{CreateFlightParam, Flight, FlightWithIp},
    service::host::HostAddressProvider,
};

/// Business logic for flight records.
///
/// Generic over the storage collaborator so it can run against the SeaORM repository or
/// any other `FlightStore`. The only domain policy owned here is not-found handling; every
/// storage failure is propagated unchanged.
pub struct FlightService<S> {
    store: S,
}

impl<S: FlightStore> FlightService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persists a new flight and returns it with its assigned id
    pub async fn create(&self, param: CreateFlightParam) -> Result<Flight, AppError> {
        tracing::info!("Adding new flight: {}", param.name);
        tracing::debug!("Create data: {:?}", param);

        let flight = self.store.create(param).await?;

        tracing::info!("Flight saved with ID: {}", flight.id);

        Ok(flight)
    }

    /// Gets every stored flight
    pub async fn get_all(&self) -> Result<Vec<Flight>, AppError> {
        let flights = self.store.find_all().await?;

        tracing::debug!("Retrieved {} flights from database", flights.len());

        Ok(flights)
    }

    /// Gets every stored flight tagged with this server's address
    ///
    /// The address is resolved once, after the storage read, and shared by every item.
    ///
    /// # Returns
    /// - `Ok(Vec<FlightWithIp>)` - One item per stored flight
    /// - `Err(AppError::DbErr)` - Storage failure
    /// - `Err(AppError::HostResolution)` - The server address could not be determined
    pub async fn get_all_with_ip(
        &self,
        host: &dyn HostAddressProvider,
    ) -> Result<Vec<FlightWithIp>, AppError> {
        let flights = self.get_all().await?;

        let server_ip = host.server_ip().await?;
        tracing::debug!("Server IP: {}", server_ip);

        Ok(flights
            .into_iter()
            .map(|flight| FlightWithIp {
                flight,
                server_ip: server_ip.clone(),
            })
            .collect())
    }

    /// Gets a flight by id
    ///
    /// # Returns
    /// - `Ok(Flight)` - The requested flight
    /// - `Err(AppError::FlightErr(FlightError::NotFound))` - No flight has this id
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn get(&self, id: i32) -> Result<Flight, AppError> {
        let flight = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(FlightError::NotFound(id))?;

        Ok(flight)
    }

    /// Deletes a flight by id
    ///
    /// Always returns `true` on success; deleting an id with no row is not an error.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        tracing::info!("Deleting flight with ID: {}", id);

        self.store.delete_by_id(id).await?;

        Ok(true)
    }

    /// Replaces every field of the flight identified by `id`
    ///
    /// The stored value always carries `id`, whatever id `flight` holds. Updating an id
    /// with no existing row fails with not found rather than creating the row.
    ///
    /// # Returns
    /// - `Ok(Flight)` - The flight as stored
    /// - `Err(AppError::FlightErr(FlightError::NotFound))` - No flight has this id
    /// - `Err(AppError::DbErr)` - Storage failure
    pub async fn update(&self, id: i32, flight: Flight) -> Result<Flight, AppError> {
        tracing::info!("Updating flight with ID: {}", id);
        tracing::debug!("Update data: {:?}", flight);

        if self.store.find_by_id(id).await?.is_none() {
            return Err(FlightError::NotFound(id).into());
        }

        let flight = self.store.save(flight.with_id(id)).await?;

        Ok(flight)
    }
}
