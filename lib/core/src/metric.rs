//! Similarity metrics
//!
//! Every metric maps a pair of vectors to a score where larger means more
//! similar:
//!
//! - `cosine`: `dot(q, c) / (|q| * |c|)`, undefined for zero-norm vectors
//! - `euclidean`: `1 / (1 + |q - c|)`, in `(0, 1]`
//! - `dot_product`: raw dot product, unbounded

use crate::{kernels, Error, Result, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MetricKind {
    #[default]
    Cosine,
    Euclidean,
    DotProduct,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Cosine,
        MetricKind::Euclidean,
        MetricKind::DotProduct,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Cosine => "cosine",
            MetricKind::Euclidean => "euclidean",
            MetricKind::DotProduct => "dot_product",
        }
    }

    /// Prepare a scorer for `query`. Query-side work (the cosine scale and
    /// norm) is done once here instead of once per candidate.
    pub fn scorer<'q>(&self, query: &'q Vector) -> Result<Scorer<'q>> {
        let (query_scale, query_unit_norm) = match self {
            MetricKind::Cosine => {
                let scale = kernels::max_abs(query.as_slice());
                if scale == 0.0 {
                    return Err(Error::DegenerateVector { candidate: None });
                }
                (scale, kernels::scaled_norm(query.as_slice(), scale))
            }
            MetricKind::Euclidean | MetricKind::DotProduct => (0.0, 0.0),
        };

        Ok(Scorer {
            metric: *self,
            query,
            query_scale,
            query_unit_norm,
        })
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cosine" => Ok(MetricKind::Cosine),
            "euclidean" => Ok(MetricKind::Euclidean),
            "dot_product" => Ok(MetricKind::DotProduct),
            other => Err(Error::UnsupportedMetric(other.to_string())),
        }
    }
}

impl TryFrom<String> for MetricKind {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<MetricKind> for String {
    fn from(metric: MetricKind) -> Self {
        metric.as_str().to_string()
    }
}

/// A metric bound to one query vector
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'q> {
    metric: MetricKind,
    query: &'q Vector,
    /// Largest query magnitude and the norm of the query divided by it
    query_scale: f64,
    query_unit_norm: f64,
}

impl Scorer<'_> {
    #[inline]
    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// Score one vector against the bound query.
    #[inline]
    pub fn score(&self, other: &Vector) -> Result<f64> {
        self.query.check_dim(other)?;

        let a = self.query.as_slice();
        let b = other.as_slice();

        let score = match self.metric {
            MetricKind::Cosine => {
                // A zero norm means every component is zero
                let other_scale = kernels::max_abs(b);
                if other_scale == 0.0 {
                    return Err(Error::DegenerateVector { candidate: None });
                }
                let dot = kernels::scaled_dot(a, self.query_scale, b, other_scale);
                dot / (self.query_unit_norm * kernels::scaled_norm(b, other_scale))
            }
            MetricKind::Euclidean => {
                let (half_scale, unit) = kernels::l2_distance_parts(a, b);
                let distance = 2.0 * half_scale * unit;
                if distance.is_finite() {
                    1.0 / (1.0 + distance)
                } else {
                    // 1 / (1 + 2hu) rewritten so no intermediate overflows
                    let t = 0.5 / half_scale;
                    t / (unit + t)
                }
            }
            MetricKind::DotProduct => kernels::dot(a, b),
        };

        if score.is_nan() {
            return Err(Error::NumericOverflow {
                metric: self.metric,
                candidate: None,
            });
        }
        Ok(score)
    }
}

/// Similarity of exactly two vectors under `metric`.
pub fn pairwise_similarity(a: &Vector, b: &Vector, metric: MetricKind) -> Result<f64> {
    a.check_dim(b)?;
    metric.scorer(a)?.score(b)
}
