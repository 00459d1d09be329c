//! Engine Data Types
//!
//! Request bodies sent to Elasticsearch and the error raised when it answers with
//! a non-success status. Response bodies are never modelled; they are relayed to
//! callers as raw `serde_json::Value`.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Name of the only index this service reads and writes.
pub const DEFAULT_INDEX: &str = "myindex";
/// Fields declared in the mapping and searched by every query.
pub const SEARCH_FIELDS: [&str; 2] = ["title", "content"];
/// Lets the engine pick the edit distance from the term length.
pub const FUZZINESS_AUTO: &str = "AUTO";

pub const FIELD_TYPE_TEXT: &str = "text";

/// Engine error type reported when creating an index that already exists.
pub const RESOURCE_ALREADY_EXISTS: &str = "resource_already_exists_exception";

// --- Index mapping ---

/// Body of a create-index request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexMapping {
    pub mappings: Mappings,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mappings {
    pub properties: BTreeMap<String, FieldMapping>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldMapping {
    #[serde(rename = "type")]
    pub field_type: String,
}

impl IndexMapping {
    /// A mapping where every listed field is full-text.
    pub fn text_fields(fields: &[&str]) -> Self {
        let properties = fields
            .iter()
            .map(|name| {
                (
                    name.to_string(),
                    FieldMapping {
                        field_type: FIELD_TYPE_TEXT.to_string(),
                    },
                )
            })
            .collect();

        Self {
            mappings: Mappings { properties },
        }
    }

    /// `{ title: text, content: text }`
    pub fn default_schema() -> Self {
        Self::text_fields(&SEARCH_FIELDS)
    }
}

// --- Query DSL ---

/// Body of a `_search` request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchQuery {
    pub query: QueryClause,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryClause {
    pub multi_match: MultiMatch,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MultiMatch {
    pub query: String,
    pub fields: Vec<String>,
    pub fuzziness: String,
}

impl SearchQuery {
    /// Multi-field match over `title` and `content` with `AUTO` fuzziness.
    pub fn fuzzy_multi_match(term: &str) -> Self {
        Self {
            query: QueryClause {
                multi_match: MultiMatch {
                    query: term.to_string(),
                    fields: SEARCH_FIELDS.iter().map(|f| f.to_string()).collect(),
                    fuzziness: FUZZINESS_AUTO.to_string(),
                },
            },
        }
    }

    pub fn term(&self) -> &str {
        &self.query.multi_match.query
    }
}

// --- Errors ---

/// The engine answered, but with a non-2xx status.
///
/// Carried inside `anyhow::Error` so callers can `downcast_ref` it when they care
/// about the engine's error type (see `index::ensure_index_exists`).
#[derive(Debug, Clone, Error)]
#[error("{}", self.describe())]
pub struct EngineResponseError {
    pub status: u16,
    pub error_type: Option<String>,
    pub reason: Option<String>,
    pub body: String,
}

impl EngineResponseError {
    /// Extracts `error.type` / `error.reason` from an Elasticsearch error body.
    /// Bodies that are not JSON are kept verbatim.
    pub fn from_body(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();
        let error = parsed.as_ref().and_then(|v| v.get("error"));

        let (error_type, reason) = match error {
            Some(Value::Object(obj)) => (
                obj.get("type").and_then(Value::as_str).map(str::to_string),
                obj.get("reason").and_then(Value::as_str).map(str::to_string),
            ),
            Some(Value::String(s)) => (None, Some(s.clone())),
            _ => (None, None),
        };

        Self {
            status,
            error_type,
            reason,
            body: body.to_string(),
        }
    }

    pub fn is_already_exists(&self) -> bool {
        self.error_type.as_deref() == Some(RESOURCE_ALREADY_EXISTS)
    }

    fn describe(&self) -> String {
        match (&self.error_type, &self.reason) {
            (Some(kind), Some(reason)) => {
                format!("engine returned {}: {}: {}", self.status, kind, reason)
            }
            (Some(kind), None) => format!("engine returned {}: {}", self.status, kind),
            (None, Some(reason)) => format!("engine returned {}: {}", self.status, reason),
            (None, None) if self.body.trim().is_empty() => {
                format!("engine returned {}", self.status)
            }
            (None, None) => format!("engine returned {}: {}", self.status, self.body.trim()),
        }
    }
}
