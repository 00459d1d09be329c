//! Search Gateway Library
//!
//! A thin HTTP facade over an Elasticsearch cluster. The binary (`main.rs`) wires
//! these modules together; nothing here owns indexing or ranking, all of that is
//! delegated to the engine.
//!
//! ## Modules
//! - **`config`**: Environment-driven settings (listen port, engine URL, timeout).
//! - **`engine`**: The Elasticsearch client behind the `SearchEngine` trait, the
//!   fixed index schema and query DSL, and the startup index initializer.
//! - **`gateway`**: Axum handlers for `/add-document` and `/search`, the JSON
//!   response envelope and the client/upstream error taxonomy.

pub mod config;
pub mod engine;
pub mod gateway;
