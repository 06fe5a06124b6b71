//! JSON request and response bodies
//!
//! Shapes follow the embedding similarity and search routes: vectors arrive
//! as plain number arrays, the metric as a string, `top_k` as a signed integer.
//! Validation into core types happens in [`crate::Ranker`].

use serde::{Deserialize, Serialize};
use vecrank_core::MetricKind;

/// Compare two embeddings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default)]
    pub embedding1: Vec<f64>,
    #[serde(default)]
    pub embedding2: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub similarity: f64,
    pub metric: MetricKind,
}

/// Rank a list of embeddings against a query embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query_embedding: Vec<f64>,
    #[serde(default)]
    pub embeddings: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
}

/// One search hit; `index` points into the request's `embeddings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub index: usize,
    pub similarity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub metric: MetricKind,
}
