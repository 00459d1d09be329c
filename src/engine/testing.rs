//! In-memory `SearchEngine` used by unit tests.
//!
//! Mimics the shape of Elasticsearch responses closely enough for the gateway
//! handlers, and counts every call so tests can assert the engine was not touched.
//! Matching is a case-insensitive substring check over `title` and `content`.

use super::client::SearchEngine;
use super::types::{
    EngineResponseError, IndexMapping, RESOURCE_ALREADY_EXISTS, SEARCH_FIELDS, SearchQuery,
};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailureMode {
    None,
    /// Every call fails as if the connection was refused.
    Unreachable,
    /// `search` answers without a `hits` member.
    MissingHits,
    /// `search` answers with `"hits": null`.
    NullHits,
    /// `index_exists` always says no, even for existing indices.
    StaleExists,
}

#[derive(Default)]
pub struct CallCounts {
    pub index_exists: AtomicUsize,
    pub create_index: AtomicUsize,
    pub index_document: AtomicUsize,
    pub search: AtomicUsize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.index_exists.load(Ordering::SeqCst)
            + self.create_index.load(Ordering::SeqCst)
            + self.index_document.load(Ordering::SeqCst)
            + self.search.load(Ordering::SeqCst)
    }
}

pub struct InMemoryEngine {
    indices: Mutex<HashMap<String, IndexMapping>>,
    documents: Mutex<Vec<(String, Value)>>,
    failure: FailureMode,
    pub calls: CallCounts,
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self::with_failure(FailureMode::None)
    }

    pub fn with_failure(failure: FailureMode) -> Self {
        Self {
            indices: Mutex::new(HashMap::new()),
            documents: Mutex::new(Vec::new()),
            failure,
            calls: CallCounts::default(),
        }
    }

    pub fn mapping(&self, index: &str) -> Option<IndexMapping> {
        self.indices.lock().unwrap().get(index).cloned()
    }

    pub fn document_count(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    fn check_reachable(&self) -> Result<()> {
        if self.failure == FailureMode::Unreachable {
            anyhow::bail!("error sending request: connection refused");
        }
        Ok(())
    }
}

fn matches(document: &Value, term: &str) -> bool {
    let term = term.to_lowercase();
    SEARCH_FIELDS.iter().any(|field| {
        document
            .get(*field)
            .and_then(Value::as_str)
            .is_some_and(|text| text.to_lowercase().contains(&term))
    })
}

#[async_trait]
impl SearchEngine for InMemoryEngine {
    async fn index_exists(&self, index: &str) -> Result<bool> {
        self.calls.index_exists.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        if self.failure == FailureMode::StaleExists {
            return Ok(false);
        }
        Ok(self.indices.lock().unwrap().contains_key(index))
    }

    async fn create_index(&self, index: &str, mapping: &IndexMapping) -> Result<Value> {
        self.calls.create_index.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let mut indices = self.indices.lock().unwrap();
        if indices.contains_key(index) {
            let body = json!({
                "error": {
                    "type": RESOURCE_ALREADY_EXISTS,
                    "reason": format!("index [{}] already exists", index),
                },
                "status": 400,
            });
            return Err(EngineResponseError::from_body(400, &body.to_string()).into());
        }

        indices.insert(index.to_string(), mapping.clone());
        Ok(json!({ "acknowledged": true, "shards_acknowledged": true, "index": index }))
    }

    async fn index_document(&self, index: &str, document: &Value) -> Result<Value> {
        self.calls.index_document.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        let mut documents = self.documents.lock().unwrap();
        let id = format!("doc-{}", documents.len() + 1);
        documents.push((id.clone(), document.clone()));

        Ok(json!({ "_index": index, "_id": id, "_version": 1, "result": "created" }))
    }

    async fn search(&self, index: &str, query: &SearchQuery) -> Result<Value> {
        self.calls.search.fetch_add(1, Ordering::SeqCst);
        self.check_reachable()?;

        if self.failure == FailureMode::MissingHits {
            return Ok(json!({ "took": 1, "timed_out": false }));
        }
        if self.failure == FailureMode::NullHits {
            return Ok(json!({ "took": 1, "timed_out": false, "hits": null }));
        }

        let hits: Vec<Value> = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, doc)| matches(doc, query.term()))
            .map(|(id, doc)| json!({ "_index": index, "_id": id, "_score": 1.0, "_source": doc }))
            .collect();

        Ok(json!({
            "took": 1,
            "timed_out": false,
            "hits": {
                "total": { "value": hits.len(), "relation": "eq" },
                "max_score": if hits.is_empty() { Value::Null } else { json!(1.0) },
                "hits": hits,
            }
        }))
    }
}
