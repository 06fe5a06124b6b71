//! In-memory candidate corpus
//!
//! Loads embedded chunks from a `.json` array or a `.jsonl` file and hands
//! out candidate sets for ranking, optionally restricted to a set of scopes
//! (for example the source files a question should be answered from).

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};
use vecrank_core::{Candidate, CandidateId, Error, Result, Vector};

/// One stored record. Records without an embedding are not rankable yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub id: CandidateId,
    #[serde(default)]
    pub embedding: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
struct Entry {
    candidate: Candidate,
    scope: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<Entry>,
    skipped: usize,
}

impl Corpus {
    /// Build from records, dropping those with no embedding.
    pub fn from_records(records: Vec<CorpusRecord>) -> Result<Self> {
        let mut corpus = Corpus::default();
        for record in records {
            corpus.push(record)?;
        }
        Ok(corpus)
    }

    /// Load from a file; `.jsonl` is read line by line, anything else as a JSON array.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;

        let is_jsonl = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("jsonl"))
            .unwrap_or(false);

        let records: Vec<CorpusRecord> = if is_jsonl {
            raw.lines()
                .enumerate()
                .filter(|(_, line)| !line.trim().is_empty())
                .map(|(n, line)| {
                    serde_json::from_str(line).map_err(|e| {
                        Error::Serialization(format!("{} line {}: {}", path.display(), n + 1, e))
                    })
                })
                .collect::<Result<_>>()?
        } else {
            serde_json::from_str(&raw)
                .map_err(|e| Error::Serialization(format!("{}: {}", path.display(), e)))?
        };

        let corpus = Self::from_records(records)?;
        info!(
            "Loaded corpus from {:?}: {} candidates, {} without embedding",
            path,
            corpus.len(),
            corpus.skipped()
        );
        Ok(corpus)
    }

    pub fn push(&mut self, record: CorpusRecord) -> Result<()> {
        let data = match record.embedding {
            Some(data) if !data.is_empty() => data,
            _ => {
                debug!("Skipping record {} with no embedding", record.id);
                self.skipped += 1;
                return Ok(());
            }
        };

        let vector = Vector::new(data).map_err(|e| {
            Error::InvalidRequest(format!("record {}: {}", record.id, e))
        })?;

        let mut candidate = Candidate::new(record.id, vector);
        candidate.payload = record.payload;
        self.entries.push(Entry {
            candidate,
            scope: record.scope,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records dropped for lacking an embedding
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, id: &CandidateId) -> Option<&Candidate> {
        self.entries
            .iter()
            .map(|e| &e.candidate)
            .find(|c| &c.id == id)
    }

    /// Candidates in load order. An empty `scopes` selects everything;
    /// otherwise only entries whose scope is listed.
    pub fn select(&self, scopes: &[String]) -> Vec<Candidate> {
        if scopes.is_empty() {
            return self.entries.iter().map(|e| e.candidate.clone()).collect();
        }

        let wanted: AHashSet<&str> = scopes.iter().map(String::as_str).collect();
        self.entries
            .iter()
            .filter(|e| e.scope.as_deref().map(|s| wanted.contains(s)).unwrap_or(false))
            .map(|e| e.candidate.clone())
            .collect()
    }
}
