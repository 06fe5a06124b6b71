use crate::candidate::CandidateId;
use crate::metric::MetricKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dimension mismatch: expected {expected}, got {actual}{}", describe(.candidate))]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        candidate: Option<CandidateId>,
    },

    #[error("Degenerate vector: zero norm has no direction for cosine similarity{}", describe(.candidate))]
    DegenerateVector { candidate: Option<CandidateId> },

    #[error("Unsupported metric: {0} (expected cosine, euclidean or dot_product)")]
    UnsupportedMetric(String),

    #[error("Invalid top_k: {0} (must be non-negative)")]
    InvalidTopK(i64),

    #[error("Vector must have at least one component")]
    EmptyVector,

    #[error("Vector component {index} is not finite")]
    NonFiniteComponent { index: usize },

    #[error("Numeric overflow: {metric} similarity is not a number{}", describe(.candidate))]
    NumericOverflow {
        metric: MetricKind,
        candidate: Option<CandidateId>,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Attach the offending candidate to a vector-level error.
    pub(crate) fn for_candidate(self, id: &CandidateId) -> Self {
        match self {
            Error::DimensionMismatch { expected, actual, .. } => Error::DimensionMismatch {
                expected,
                actual,
                candidate: Some(id.clone()),
            },
            Error::DegenerateVector { .. } => Error::DegenerateVector {
                candidate: Some(id.clone()),
            },
            Error::NumericOverflow { metric, .. } => Error::NumericOverflow {
                metric,
                candidate: Some(id.clone()),
            },
            other => other,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

fn describe(candidate: &Option<CandidateId>) -> String {
    match candidate {
        Some(id) => format!(" (candidate {})", id),
        None => String::new(),
    }
}
