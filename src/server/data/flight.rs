//! Flight data repository for database operations
//!
//! Provides the `FlightStore` trait describing the storage collaborator used by the
//! flight service, and `FlightRepository`, its SeaORM implementation. The repository
//! handles the conversion of database entity models into domain models for usage within
//! services & controllers.

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder,
};

use crate::server::model::flight::{CreateFlightParam, Flight};

/// CRUD primitives over flight rows keyed by integer id.
///
/// Each call is atomic on its own; no sequence of calls is transactional.
#[async_trait]
pub trait FlightStore: Send + Sync {
    /// Inserts a new flight, returning it with the id assigned by storage.
    async fn create(&self, param: CreateFlightParam) -> Result<Flight, DbErr>;

    /// Finds a flight by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr>;

    /// Returns every stored flight. Ordering is implementation-defined.
    async fn find_all(&self) -> Result<Vec<Flight>, DbErr>;

    /// Removes the flight with the given id. Removing a missing id is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr>;

    /// Inserts the flight or replaces every column of the row sharing its id.
    async fn save(&self, flight: Flight) -> Result<Flight, DbErr>;
}

/// Repository providing database operations for flight management.
pub struct FlightRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FlightRepository<'a> {
    /// Creates a new FlightRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FlightRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a> FlightStore for FlightRepository<'a> {
    /// Creates a new flight
    ///
    /// # Arguments
    /// - `param` - Create parameters containing every field except the id
    ///
    /// # Returns
    /// - `Ok(Flight)` - The created flight with its assigned id
    /// - `Err(DbErr)` - Database error during insert operation
    async fn create(&self, param: CreateFlightParam) -> Result<Flight, DbErr> {
        let model = entity::flight::ActiveModel {
            name: ActiveValue::Set(param.name),
            source: ActiveValue::Set(param.source),
            destination: ActiveValue::Set(param.destination),
            ticket_price: ActiveValue::Set(param.ticket_price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Flight::from_entity(model))
    }

    /// Finds a flight by ID
    ///
    /// # Returns
    /// - `Ok(Some(Flight))` - The requested flight if found
    /// - `Ok(None)` - No flight has the requested id
    /// - `Err(DbErr)` - Database error during select operation
    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, DbErr> {
        let model = entity::prelude::Flight::find_by_id(id).one(self.db).await?;

        Ok(model.map(Flight::from_entity))
    }

    /// Gets all flights ordered by id
    async fn find_all(&self) -> Result<Vec<Flight>, DbErr> {
        let models = entity::prelude::Flight::find()
            .order_by_asc(entity::flight::Column::Id)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Flight::from_entity).collect())
    }

    /// Deletes the flight of the provided ID
    async fn delete_by_id(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Flight::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Upserts a flight keyed by its id
    ///
    /// # Returns
    /// - `Ok(Flight)` - The flight as stored after the insert or replace
    /// - `Err(DbErr)` - Database error during upsert operation
    async fn save(&self, flight: Flight) -> Result<Flight, DbErr> {
        let model = entity::prelude::Flight::insert(entity::flight::ActiveModel {
            id: ActiveValue::Set(flight.id),
            name: ActiveValue::Set(flight.name),
            source: ActiveValue::Set(flight.source),
            destination: ActiveValue::Set(flight.destination),
            ticket_price: ActiveValue::Set(flight.ticket_price),
        })
        .on_conflict(
            OnConflict::column(entity::flight::Column::Id)
                .update_columns([
                    entity::flight::Column::Name,
                    entity::flight::Column::Source,
                    entity::flight::Column::Destination,
                    entity::flight::Column::TicketPrice,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Flight::from_entity(model))
    }
}
