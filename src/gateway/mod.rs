//! HTTP Gateway Module
//!
//! Translates HTTP requests into engine calls and wraps the engine's answers in a
//! uniform `{ success, data | error }` envelope.
//!
//! ## Submodules
//! - **`error`**: The `GatewayError` taxonomy and its HTTP mapping.
//! - **`handlers`**: Axum handlers for submit-document and search.
//! - **`routes`**: Endpoint paths and router assembly.
//! - **`types`**: Request DTOs and the response envelope.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::router;
