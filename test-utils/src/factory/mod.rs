//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let flight = factory::create_flight(&db).await?;
//!
//! // Customize fields
//! let flight = factory::flight::FlightFactory::new(&db)
//!     .name("AI101")
//!     .source("Delhi")
//!     .destination("Mumbai")
//!     .ticket_price(Some(5000.0))
//!     .build()
//!     .await?;
//! ```

pub mod flight;
pub mod helpers;

pub use flight::create_flight;
