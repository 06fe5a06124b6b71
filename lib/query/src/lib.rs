//! # vecrank Query
//!
//! Request handling on top of [`vecrank_core`]:
//!
//! - [`Ranker`] - executes similarity, search and corpus queries with configured defaults
//! - [`RankerConfig`] - default metric, default `top_k`, parallel scoring threshold
//! - [`Corpus`] - in-memory candidate store loaded from JSON or JSON Lines
//! - [`request`] - JSON request and response bodies

pub mod config;
pub mod corpus;
pub mod ranker;
pub mod request;

pub use config::RankerConfig;
pub use corpus::{Corpus, CorpusRecord};
pub use ranker::Ranker;
pub use request::{SearchHit, SearchRequest, SearchResponse, SimilarityRequest, SimilarityResponse};
