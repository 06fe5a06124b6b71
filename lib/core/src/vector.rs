use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A dense embedding vector.
///
/// Always holds at least one component and every component is finite.
/// Deserialization runs the same checks as [`Vector::new`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyVector);
        }
        if let Some(index) = data.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteComponent { index });
        }
        Ok(Self { data })
    }

    #[inline]
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        Self::new(data.to_vec())
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        crate::kernels::norm(&self.data)
    }

    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        crate::kernels::dot(&self.data, &other.data)
    }

    /// Fails with [`Error::DimensionMismatch`] unless both vectors have the same length.
    #[inline]
    pub fn check_dim(&self, other: &Vector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
                candidate: None,
            });
        }
        Ok(())
    }

    /// Scale by a finite factor, e.g. to build test fixtures.
    pub fn scaled(&self, factor: f64) -> Result<Self> {
        Self::new(self.data.iter().map(|x| x * factor).collect())
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Self::new(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Vector::new(vec![]), Err(Error::EmptyVector)));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = Vector::new(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteComponent { index: 1 }));

        let err = Vector::new(vec![f64::INFINITY]).unwrap_err();
        assert!(matches!(err, Error::NonFiniteComponent { index: 0 }));
    }

    #[test]
    fn test_norm_and_dot() {
        let v = Vector::new(vec![3.0, 4.0]).unwrap();
        assert_eq!(v.norm(), 5.0);
        assert_eq!(v.dot(&v), 25.0);
    }

    #[test]
    fn test_check_dim() {
        let a = Vector::new(vec![1.0, 2.0]).unwrap();
        let b = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(a.check_dim(&a).is_ok());
        assert!(matches!(
            a.check_dim(&b),
            Err(Error::DimensionMismatch { expected: 2, actual: 3, candidate: None })
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let v: Vector = serde_json::from_str("[0.5, -1.0]").unwrap();
        assert_eq!(v.as_slice(), &[0.5, -1.0]);
        assert!(serde_json::from_str::<Vector>("[]").is_err());
        assert_eq!(serde_json::to_string(&v).unwrap(), "[0.5,-1.0]");
    }
}
