//! SeaORM entity definitions for the airline database.

pub mod prelude;

pub mod flight;
