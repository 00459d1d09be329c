//! Search Engine Module
//!
//! Everything that talks to Elasticsearch lives here.
//!
//! ## Overview
//! The gateway never reaches the engine directly; it holds a `SharedEngine`
//! (`Arc<dyn SearchEngine>`) injected at startup. The production implementation is
//! `ElasticsearchClient`, a small REST client on top of `reqwest`.
//!
//! ## Submodules
//! - **`client`**: The `SearchEngine` trait and the `ElasticsearchClient` implementation.
//! - **`index`**: The best-effort startup step that makes sure the index exists.
//! - **`types`**: The fixed index mapping, the fuzzy query DSL and engine error type.

pub mod client;
pub mod index;
pub mod types;

pub use client::{ElasticsearchClient, SearchEngine, SharedEngine};

#[cfg(test)]
pub(crate) mod testing;
