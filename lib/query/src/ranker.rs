use crate::config::RankerConfig;
use crate::corpus::Corpus;
use crate::request::{SearchHit, SearchRequest, SearchResponse, SimilarityRequest, SimilarityResponse};
use tracing::debug;
use vecrank_core::{
    pairwise_similarity, rank_positions, rank_with, top_k_from_signed, Candidate, CandidateId, Error, MetricKind,
    Result, ScoredResult, Vector,
};

/// Executes similarity and search requests with configured defaults
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankerConfig,
}

impl Ranker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Similarity between `embedding1` and `embedding2`
    pub fn similarity(&self, request: &SimilarityRequest) -> Result<SimilarityResponse> {
        if request.embedding1.is_empty() || request.embedding2.is_empty() {
            return Err(Error::InvalidRequest("both embeddings are required".to_string()));
        }

        let metric = self.resolve_metric(request.metric.as_deref())?;
        let a = Vector::from_slice(&request.embedding1)?;
        let b = Vector::from_slice(&request.embedding2)?;

        let similarity = pairwise_similarity(&a, &b, metric)?;
        debug!(%metric, dim = a.dim(), similarity, "pairwise similarity");

        Ok(SimilarityResponse { similarity, metric })
    }

    /// Rank `embeddings` against `query_embedding`; hits are identified by input index
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        if request.query_embedding.is_empty() || request.embeddings.is_empty() {
            return Err(Error::InvalidRequest(
                "query embedding and embeddings array are required".to_string(),
            ));
        }

        let metric = self.resolve_metric(request.metric.as_deref())?;
        let top_k = self.resolve_top_k(request.top_k)?;
        let query = Vector::from_slice(&request.query_embedding)?;

        let candidates = request
            .embeddings
            .iter()
            .enumerate()
            .map(|(index, data)| {
                let id = CandidateId::Integer(index as u64);
                Vector::from_slice(data)
                    .map(|vector| Candidate::new(id, vector))
                    .map_err(|e| Error::InvalidRequest(format!("embeddings[{}]: {}", index, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let positions = rank_positions(&query, &candidates, metric, top_k, &self.config.rank_options())?;
        debug!(
            %metric,
            candidates = candidates.len(),
            top_k,
            returned = positions.len(),
            "ranked search embeddings"
        );

        let results = positions
            .into_iter()
            .map(|(index, similarity)| SearchHit { index, similarity })
            .collect();

        Ok(SearchResponse { results, metric })
    }

    /// Rank the corpus entries in `scopes` (all entries when empty) against `query`
    pub fn query_corpus(
        &self,
        corpus: &Corpus,
        query: &Vector,
        scopes: &[String],
        metric: Option<MetricKind>,
        top_k: Option<i64>,
    ) -> Result<Vec<ScoredResult>> {
        let metric = metric.unwrap_or(self.config.default_metric);
        let top_k = self.resolve_top_k(top_k)?;
        let candidates = corpus.select(scopes);
        debug!(
            scopes = scopes.len(),
            selected = candidates.len(),
            corpus = corpus.len(),
            "selected corpus candidates"
        );
        self.rank(query, &candidates, metric, top_k)
    }

    fn rank(
        &self,
        query: &Vector,
        candidates: &[Candidate],
        metric: MetricKind,
        top_k: usize,
    ) -> Result<Vec<ScoredResult>> {
        let results = rank_with(query, candidates, metric, top_k, &self.config.rank_options())?;
        debug!(
            %metric,
            candidates = candidates.len(),
            top_k,
            returned = results.len(),
            "ranked candidates"
        );
        Ok(results)
    }

    fn resolve_metric(&self, metric: Option<&str>) -> Result<MetricKind> {
        match metric {
            Some(name) => name.parse(),
            None => Ok(self.config.default_metric),
        }
    }

    fn resolve_top_k(&self, top_k: Option<i64>) -> Result<usize> {
        match top_k {
            Some(k) => top_k_from_signed(k),
            None => Ok(self.config.default_top_k),
        }
    }
}
