//! Gateway Data Types
//!
//! Request payloads accepted by the HTTP routes and the envelope every response
//! is wrapped in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /add-document`: `{ "document": <value> }`.
///
/// The document is deliberately untyped: the index mapping is enforced by the
/// engine, not here.
#[derive(Debug)]
pub struct AddDocumentRequest {
    pub document: Value,
}

impl AddDocumentRequest {
    /// Only an object body carries a `document` member; arrays and scalars do not.
    pub fn from_body(body: Value) -> Self {
        let document = match body {
            Value::Object(mut obj) => obj.remove("document").unwrap_or(Value::Null),
            _ => Value::Null,
        };
        Self { document }
    }

    /// Returns the document unless it is absent or falsy.
    pub fn into_document(self) -> Option<Value> {
        is_truthy(&self.document).then_some(self.document)
    }
}

/// Query string of `GET /search`.
///
/// When `searchTerm` is repeated, the first occurrence wins.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub search_term: Option<String>,
}

impl SearchParams {
    pub const SEARCH_TERM: &'static str = "searchTerm";

    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let search_term = pairs
            .into_iter()
            .find_map(|(key, value)| (key == Self::SEARCH_TERM).then_some(value));
        Self { search_term }
    }

    pub fn term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }
}

/// Response envelope shared by all routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// `null`, `false`, `0` and `""` are falsy; objects and arrays, even empty, are not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
