use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a ranking candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CandidateId {
    Integer(u64),
    Uuid(Uuid),
    String(String),
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandidateId::String(s) => write!(f, "{}", s),
            CandidateId::Uuid(u) => write!(f, "{}", u),
            CandidateId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        CandidateId::String(s)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        CandidateId::String(s.to_string())
    }
}

impl From<u64> for CandidateId {
    fn from(i: u64) -> Self {
        CandidateId::Integer(i)
    }
}

impl From<Uuid> for CandidateId {
    fn from(u: Uuid) -> Self {
        CandidateId::Uuid(u)
    }
}

/// A vector eligible for ranking, with its id and associated payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub vector: Vector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl Candidate {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<CandidateId>, vector: Vector) -> Self {
        Self {
            id: id.into(),
            vector,
            payload: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}
