pub use super::flight::Entity as Flight;
