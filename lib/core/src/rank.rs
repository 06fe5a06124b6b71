//! Top-k ranking of candidates against a query vector
//!
//! Scores every candidate in one pass, then orders by descending score with
//! ties broken by input position. When fewer than all candidates are
//! requested, a partial selection isolates the head before sorting it.

use crate::{Candidate, CandidateId, Error, MetricKind, Result, Vector};
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Candidate count at which scoring moves onto the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    pub candidate_id: CandidateId,
    pub score: f64,
    /// 0-based position in the output
    pub rank: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    pub parallel_threshold: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Rank `candidates` against `query` and keep the best `top_k`.
///
/// `top_k` larger than the candidate count returns every candidate.
pub fn rank(
    query: &Vector,
    candidates: &[Candidate],
    metric: MetricKind,
    top_k: usize,
) -> Result<Vec<ScoredResult>> {
    rank_with(query, candidates, metric, top_k, &RankOptions::default())
}

/// [`rank`] with explicit options.
pub fn rank_with(
    query: &Vector,
    candidates: &[Candidate],
    metric: MetricKind,
    top_k: usize,
    options: &RankOptions,
) -> Result<Vec<ScoredResult>> {
    let order = rank_positions(query, candidates, metric, top_k, options)?;
    Ok(order
        .into_iter()
        .enumerate()
        .map(|(rank, (index, score))| ScoredResult {
            candidate_id: candidates[index].id.clone(),
            score,
            rank,
        })
        .collect())
}

/// Like [`rank_with`], but yields `(input position, score)` pairs in rank order.
pub fn rank_positions(
    query: &Vector,
    candidates: &[Candidate],
    metric: MetricKind,
    top_k: usize,
    options: &RankOptions,
) -> Result<Vec<(usize, f64)>> {
    let scorer = metric.scorer(query)?;

    // Reject the whole call before doing any scoring work
    if let Some(bad) = candidates.iter().find(|c| c.vector.dim() != query.dim()) {
        return Err(Error::DimensionMismatch {
            expected: query.dim(),
            actual: bad.vector.dim(),
            candidate: Some(bad.id.clone()),
        });
    }

    let score_one = |c: &Candidate| scorer.score(&c.vector).map_err(|e| e.for_candidate(&c.id));

    let scores: Vec<f64> = if candidates.len() >= options.parallel_threshold {
        // Collected in input order, so the first error matches the sequential path
        candidates
            .par_iter()
            .map(score_one)
            .collect::<Vec<Result<f64>>>()
            .into_iter()
            .collect::<Result<_>>()?
    } else {
        candidates.iter().map(score_one).collect::<Result<_>>()?
    };

    let k = top_k.min(candidates.len());
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut order: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
    if k < order.len() {
        order.select_nth_unstable_by(k - 1, by_score_then_position);
        order.truncate(k);
    }
    order.sort_unstable_by(by_score_then_position);
    Ok(order)
}

/// Convert a signed `top_k` from an external boundary.
pub fn top_k_from_signed(top_k: i64) -> Result<usize> {
    usize::try_from(top_k).map_err(|_| Error::InvalidTopK(top_k))
}

/// Descending score, then ascending input position. A total order, so an
/// unstable sort gives the same result as a stable one.
#[inline]
fn by_score_then_position(a: &(usize, f64), b: &(usize, f64)) -> Ordering {
    OrderedFloat(b.1)
        .cmp(&OrderedFloat(a.1))
        .then_with(|| a.0.cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cand(id: &str, data: &[f64]) -> Candidate {
        Candidate::new(id, Vector::from_slice(data).unwrap())
    }

    fn query(data: &[f64]) -> Vector {
        Vector::from_slice(data).unwrap()
    }

    fn ids(results: &[ScoredResult]) -> Vec<String> {
        results.iter().map(|r| r.candidate_id.to_string()).collect()
    }

    fn random_candidates(rng: &mut StdRng, n: usize, dim: usize) -> Vec<Candidate> {
        (0..n)
            .map(|i| {
                let data: Vec<f64> = (0..dim).map(|_| rng.random_range(-1.0..1.0)).collect();
                Candidate::new(i as u64, Vector::new(data).unwrap())
            })
            .collect()
    }

    #[test]
    fn test_cosine_example() {
        let candidates = vec![
            cand("a", &[1.0, 0.0]),
            cand("b", &[0.0, 1.0]),
            cand("c", &[1.0, 1.0]),
        ];
        let results = rank(&query(&[1.0, 0.0]), &candidates, MetricKind::Cosine, 2).unwrap();

        assert_eq!(ids(&results), vec!["a", "c"]);
        assert!((results[0].score - 1.0).abs() < 1e-12);
        assert!((results[1].score - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(results[0].rank, 0);
        assert_eq!(results[1].rank, 1);
    }

    #[test]
    fn test_top_k_clamped() {
        let candidates = vec![cand("a", &[1.0]), cand("b", &[2.0])];
        let results = rank(&query(&[1.0]), &candidates, MetricKind::DotProduct, 10).unwrap();
        assert_eq!(ids(&results), vec!["b", "a"]);
    }

    #[test]
    fn test_top_k_zero_and_empty_candidates() {
        let candidates = vec![cand("a", &[1.0])];
        assert!(rank(&query(&[1.0]), &candidates, MetricKind::Cosine, 0).unwrap().is_empty());
        assert!(rank(&query(&[1.0]), &[], MetricKind::Cosine, 5).unwrap().is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![
            cand("first", &[1.0, 1.0]),
            cand("low", &[0.0, 0.1]),
            cand("second", &[2.0, 2.0]),
            cand("third", &[0.5, 0.5]),
        ];
        // All three diagonal vectors have cosine exactly 1/sqrt(2) against [1, 0]
        let results = rank(&query(&[1.0, 0.0]), &candidates, MetricKind::Cosine, 4).unwrap();
        assert_eq!(ids(&results), vec!["first", "second", "third", "low"]);

        let head = rank(&query(&[1.0, 0.0]), &candidates, MetricKind::Cosine, 2).unwrap();
        assert_eq!(ids(&head), vec!["first", "second"]);
    }

    #[test]
    fn test_euclidean_prefers_nearest() {
        let candidates = vec![
            cand("far", &[10.0, 10.0]),
            cand("near", &[1.0, 1.0]),
            cand("same", &[0.0, 0.0]),
        ];
        let results = rank(&query(&[0.0, 0.0]), &candidates, MetricKind::Euclidean, 3).unwrap();
        assert_eq!(ids(&results), vec!["same", "near", "far"]);
        assert_eq!(results[0].score, 1.0);
    }

    #[test]
    fn test_dimension_mismatch_names_candidate() {
        let candidates = vec![cand("ok", &[1.0, 0.0]), cand("bad", &[1.0, 0.0, 0.0])];
        let err = rank(&query(&[1.0, 0.0]), &candidates, MetricKind::DotProduct, 1).unwrap_err();
        match err {
            Error::DimensionMismatch { expected, actual, candidate } => {
                assert_eq!((expected, actual), (2, 3));
                assert_eq!(candidate, Some(CandidateId::from("bad")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_candidate_fails_whole_call() {
        let candidates = vec![cand("ok", &[1.0, 0.0]), cand("zero", &[0.0, 0.0])];
        let err = rank(&query(&[1.0, 0.0]), &candidates, MetricKind::Cosine, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateVector { candidate: Some(CandidateId::String(ref id)) } if id == "zero"
        ));

        // The same input is fine for the other metrics
        assert_eq!(rank(&query(&[1.0, 0.0]), &candidates, MetricKind::Euclidean, 2).unwrap().len(), 2);
        assert_eq!(rank(&query(&[1.0, 0.0]), &candidates, MetricKind::DotProduct, 2).unwrap().len(), 2);
    }

    #[test]
    fn test_degenerate_query() {
        let candidates = vec![cand("a", &[1.0, 0.0])];
        let err = rank(&query(&[0.0, 0.0]), &candidates, MetricKind::Cosine, 1).unwrap_err();
        assert!(matches!(err, Error::DegenerateVector { candidate: None }));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = random_candidates(&mut rng, 600, 16);
        let q = Vector::new((0..16).map(|_| rng.random_range(-1.0..1.0)).collect()).unwrap();

        let parallel = RankOptions { parallel_threshold: 1 };
        let sequential = RankOptions { parallel_threshold: usize::MAX };
        for metric in MetricKind::ALL {
            for top_k in [0, 1, 10, 600, 1000] {
                let a = rank_with(&q, &candidates, metric, top_k, &parallel).unwrap();
                let b = rank_with(&q, &candidates, metric, top_k, &sequential).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_partial_selection_matches_full_sort() {
        let mut rng = StdRng::seed_from_u64(42);
        let candidates = random_candidates(&mut rng, 200, 8);
        let q = Vector::new((0..8).map(|_| rng.random_range(-1.0..1.0)).collect()).unwrap();

        let full = rank(&q, &candidates, MetricKind::DotProduct, candidates.len()).unwrap();
        for k in [1, 5, 50, 199] {
            let head = rank(&q, &candidates, MetricKind::DotProduct, k).unwrap();
            assert_eq!(head.as_slice(), &full[..k]);
        }
    }

    #[test]
    fn test_positions_follow_rank_order() {
        let candidates = vec![
            cand("a", &[1.0, 0.0]),
            cand("b", &[0.0, 1.0]),
            cand("c", &[1.0, 1.0]),
        ];
        let positions = rank_positions(
            &query(&[1.0, 0.0]),
            &candidates,
            MetricKind::Cosine,
            3,
            &RankOptions::default(),
        )
        .unwrap();

        let order: Vec<usize> = positions.iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![0, 2, 1]);
        assert_eq!(positions[0].1, 1.0);
    }

    #[test]
    fn test_top_k_from_signed() {
        assert_eq!(top_k_from_signed(0).unwrap(), 0);
        assert_eq!(top_k_from_signed(12).unwrap(), 12);
        assert!(matches!(top_k_from_signed(-1), Err(Error::InvalidTopK(-1))));
    }
}
