//! Flight factory for creating test flight rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test flights with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::flight::FlightFactory;
///
/// let flight = FlightFactory::new(&db)
///     .name("AI101")
///     .ticket_price(None)
///     .build()
///     .await?;
/// ```
pub struct FlightFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    source: String,
    destination: String,
    ticket_price: Option<f64>,
}

impl<'a> FlightFactory<'a> {
    /// Creates a new FlightFactory with default values.
    ///
    /// Defaults:
    /// - name: `"FL{n}"` where n is auto-incremented
    /// - source: `"Source {n}"`
    /// - destination: `"Destination {n}"`
    /// - ticket_price: `Some(100.0)`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("FL{}", id),
            source: format!("Source {}", id),
            destination: format!("Destination {}", id),
            ticket_price: Some(100.0),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn ticket_price(mut self, ticket_price: Option<f64>) -> Self {
        self.ticket_price = ticket_price;
        self
    }

    /// Builds and inserts the flight entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::flight::Model)` - Created flight entity with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::flight::Model, DbErr> {
        entity::flight::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            source: ActiveValue::Set(self.source),
            destination: ActiveValue::Set(self.destination),
            ticket_price: ActiveValue::Set(self.ticket_price),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a flight with default values.
///
/// Shorthand for `FlightFactory::new(db).build().await`.
pub async fn create_flight(db: &DatabaseConnection) -> Result<entity::flight::Model, DbErr> {
    FlightFactory::new(db).build().await
}
