//! # vecrank
//!
//! Embedding similarity ranking: score a query vector against a set of
//! candidate vectors with cosine, Euclidean or dot-product similarity and
//! keep the top k.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! vecrank similarity --request pair.json
//! vecrank query --corpus chunks.jsonl --vector 0.1,0.7,0.2 --top-k 5
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use vecrank::prelude::*;
//!
//! let query = Vector::new(vec![1.0, 0.0]).unwrap();
//! let candidates = vec![
//!     Candidate::new("a", Vector::new(vec![1.0, 0.0]).unwrap()),
//!     Candidate::new("c", Vector::new(vec![1.0, 1.0]).unwrap()),
//! ];
//! let results = rank(&query, &candidates, MetricKind::Cosine, 5).unwrap();
//! assert_eq!(results.len(), 2);
//! ```
//!
//! ## Crate Structure
//!
//! - `vecrank-core` - Vectors, metrics, ranking (pure, no I/O)
//! - `vecrank-query` - Config, JSON requests, in-memory corpus

// Re-export core types
pub use vecrank_core::{
    pairwise_similarity, rank, rank_with, top_k_from_signed,
    Candidate, CandidateId, MetricKind, RankOptions, ScoredResult, Vector,
    Error, Result,
};

// Re-export the request layer
pub use vecrank_query::{
    Corpus, CorpusRecord, Ranker, RankerConfig,
    SearchHit, SearchRequest, SearchResponse, SimilarityRequest, SimilarityResponse,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        pairwise_similarity, rank, rank_with,
        Candidate, CandidateId, MetricKind, RankOptions, ScoredResult, Vector,
        Error, Result,
        Corpus, Ranker, RankerConfig,
    };
}

/// Low-level kernels over `f64` slices
pub mod kernels {
    pub use vecrank_core::kernels::{dot, l2_distance, max_abs, norm};
}
