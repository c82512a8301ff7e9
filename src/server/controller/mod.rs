//! HTTP request handlers.
//!
//! Controllers convert DTOs into domain parameters, call the service layer, and convert
//! the results back into DTOs. Errors are returned as `AppError` and mapped to responses
//! by its `IntoResponse` implementation.

pub mod flight;
