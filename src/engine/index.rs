//! Index Initializer
//!
//! Runs once at startup to make sure the target index exists with the expected
//! mapping. The outcome is returned to the caller for logging; the server does
//! not wait on it and keeps serving when it fails.

use super::client::SearchEngine;
use super::types::{EngineResponseError, IndexMapping};

use anyhow::Result;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum IndexStatus {
    /// The index was missing and has been created; carries the engine's acknowledgement.
    Created { response: Value },
    /// The index was already there. Its mapping is left untouched.
    AlreadyExists,
}

/// Creates `index` with `mapping` unless it already exists.
///
/// Idempotent: an index created concurrently between the existence check and the
/// create call is reported as `AlreadyExists`.
pub async fn ensure_index_exists(
    engine: &dyn SearchEngine,
    index: &str,
    mapping: &IndexMapping,
) -> Result<IndexStatus> {
    if engine.index_exists(index).await? {
        return Ok(IndexStatus::AlreadyExists);
    }

    match engine.create_index(index, mapping).await {
        Ok(response) => Ok(IndexStatus::Created { response }),
        Err(err)
            if err
                .downcast_ref::<EngineResponseError>()
                .is_some_and(EngineResponseError::is_already_exists) =>
        {
            tracing::debug!("Index {} was created concurrently", index);
            Ok(IndexStatus::AlreadyExists)
        }
        Err(err) => Err(err),
    }
}

/// Logs the result of `ensure_index_exists`. Failures are reported and swallowed.
pub fn log_index_status(index: &str, result: &Result<IndexStatus>) {
    match result {
        Ok(IndexStatus::Created { response }) => {
            tracing::info!("Index {} created: {}", index, response);
        }
        Ok(IndexStatus::AlreadyExists) => {
            tracing::info!("Index {} already exists", index);
        }
        Err(err) => {
            tracing::error!("Error ensuring index {} exists: {:#}", index, err);
        }
    }
}
