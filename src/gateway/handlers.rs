use super::error::GatewayError;
use super::types::{AddDocumentRequest, ApiResponse, SearchParams};
use crate::engine::SharedEngine;
use crate::engine::types::{DEFAULT_INDEX, SearchQuery};

use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{Extension, Json};
use serde_json::Value;

pub async fn handle_add_document(
    Extension(engine): Extension<SharedEngine>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse>, GatewayError> {
    let document = match payload {
        Ok(Json(body)) => AddDocumentRequest::from_body(body).into_document(),
        Err(rejection) => {
            tracing::warn!("Rejected add-document body: {}", rejection);
            None
        }
    };

    let Some(document) = document else {
        return Err(GatewayError::MissingPayload);
    };

    match engine.index_document(DEFAULT_INDEX, &document).await {
        Ok(response) => Ok(Json(ApiResponse::ok(response))),
        Err(e) => {
            tracing::error!("Error adding document: {:#}", e);
            Err(e.into())
        }
    }
}

pub async fn handle_search(
    Extension(engine): Extension<SharedEngine>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ApiResponse>, GatewayError> {
    let params = match params {
        Ok(Query(pairs)) => SearchParams::from_pairs(pairs),
        Err(rejection) => {
            tracing::warn!("Rejected search query string: {}", rejection);
            return Err(GatewayError::MissingQuery);
        }
    };

    let Some(term) = params.term() else {
        return Err(GatewayError::MissingQuery);
    };

    let query = SearchQuery::fuzzy_multi_match(term);

    let mut response = match engine.search(DEFAULT_INDEX, &query).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error searching documents: {:#}", e);
            return Err(e.into());
        }
    };

    match response.get_mut("hits").map(Value::take) {
        Some(hits) if !hits.is_null() => {
            tracing::debug!("Search for {:?} returned hits: {}", term, hits);
            Ok(Json(ApiResponse::ok(hits)))
        }
        _ => {
            tracing::error!("Search response has no hits: {}", response);
            Err(GatewayError::UnexpectedUpstreamShape)
        }
    }
}
