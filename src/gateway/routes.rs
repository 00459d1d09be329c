use super::handlers::{handle_add_document, handle_search};
use crate::engine::SharedEngine;

use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};

/// Submit a document for indexing.
pub const ENDPOINT_ADD_DOCUMENT: &str = "/add-document";
/// Fuzzy search over `title` and `content`.
pub const ENDPOINT_SEARCH: &str = "/search";

/// Builds the gateway router around an injected engine handle.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route(ENDPOINT_ADD_DOCUMENT, post(handle_add_document))
        .route(ENDPOINT_SEARCH, get(handle_search))
        .layer(Extension(engine))
}
