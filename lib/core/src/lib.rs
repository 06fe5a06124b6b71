//! # vecrank Core
//!
//! Core library for the vecrank similarity engine.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Vector`] - Dense, finite, non-empty embedding vector
//! - [`Candidate`] - A vector with an opaque id and optional payload
//! - [`MetricKind`] - Cosine, Euclidean or dot-product similarity
//! - [`rank`] - Top-k ranking of candidates against a query
//! - [`pairwise_similarity`] - Similarity of two vectors
//!
//! ## Example
//!
//! ```rust
//! use vecrank_core::{rank, Candidate, MetricKind, Vector};
//!
//! let query = Vector::new(vec![1.0, 0.0]).unwrap();
//! let candidates = vec![
//!     Candidate::new("a", Vector::new(vec![1.0, 0.0]).unwrap()),
//!     Candidate::new("b", Vector::new(vec![0.0, 1.0]).unwrap()),
//!     Candidate::new("c", Vector::new(vec![1.0, 1.0]).unwrap()),
//! ];
//!
//! let results = rank(&query, &candidates, MetricKind::Cosine, 2).unwrap();
//! assert_eq!(results[0].candidate_id.to_string(), "a");
//! assert_eq!(results[1].candidate_id.to_string(), "c");
//! ```
//!
//! Every function here is pure: no I/O, no shared state, safe to call from
//! any number of threads at once.

pub mod candidate;
pub mod error;
pub mod metric;
pub mod rank;
pub mod vector;

/// Dot product, norm and L2 distance over `f64` slices
pub mod kernels;

pub use candidate::{Candidate, CandidateId};
pub use error::{Error, Result};
pub use metric::{pairwise_similarity, MetricKind, Scorer};
pub use rank::{rank, rank_positions, rank_with, top_k_from_signed, RankOptions, ScoredResult, DEFAULT_PARALLEL_THRESHOLD};
pub use vector::Vector;
