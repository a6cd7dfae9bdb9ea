// src/vector.rs
//! Dense real vector primitives over slices.
//!
//! Vectors are borrowed as `&[T]` and every operation returns a fresh
//! `Vec<T>` or scalar; inputs are never mutated. Binary operations check that
//! both operands share a dimension and report [`GramSchmidtError::DimensionMismatch`]
//! otherwise.

use num_traits::Float;

use crate::error::{GramSchmidtError, Result};

/// Fail unless `a` and `b` have the same length.
#[inline]
pub fn ensure_same_dimension<T>(a: &[T], b: &[T]) -> Result<()> {
    if a.len() != b.len() {
        return Err(GramSchmidtError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Euclidean norm `sqrt(Σ vᵢ²)`.
///
/// Zero for the zero vector and for an empty slice. Callers dividing by the
/// result must guard against that themselves.
#[inline]
pub fn magnitude<T: Float>(vector: &[T]) -> T {
    vector
        .iter()
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Component-wise difference `a − b`.
#[inline]
pub fn subtract<T: Float>(a: &[T], b: &[T]) -> Result<Vec<T>> {
    ensure_same_dimension(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x - y).collect())
}

/// Dot product `Σ aᵢ·bᵢ`.
#[inline]
pub fn inner_product<T: Float>(a: &[T], b: &[T]) -> Result<T> {
    ensure_same_dimension(a, b)?;
    Ok(dot_unchecked(a, b))
}

/// Multiply every component by `constant`.
#[inline]
pub fn scale<T: Float>(vector: &[T], constant: T) -> Vec<T> {
    vector.iter().map(|&x| x * constant).collect()
}

/// Dot product for operands already known to share a dimension.
#[inline]
pub(crate) fn dot_unchecked<T: Float>(a: &[T], b: &[T]) -> T {
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_magnitude_pythagorean() {
        assert!((magnitude(&[3.0, 4.0]) - 5.0).abs() < EPS);
        assert!((magnitude(&[2.0, 1.0, -1.0]) - 6.0_f64.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_magnitude_zero_and_empty() {
        assert_eq!(magnitude(&[0.0, 0.0, 0.0]), 0.0);
        assert_eq!(magnitude::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_magnitude_f32() {
        let m = magnitude(&[3.0_f32, 4.0_f32]);
        assert!((m - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_subtract_componentwise() {
        let d = subtract(&[2.0, 1.0, -1.0], &[1.0, 1.0, 0.0]).unwrap();
        assert_eq!(d, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_subtract_dimension_mismatch() {
        let err = subtract(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            GramSchmidtError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_inner_product() {
        let ip = inner_product(&[2.0_f64, 1.0, -1.0], &[0.0, -1.0, 1.0]).unwrap();
        assert!((ip - (-2.0)).abs() < EPS);
        assert!(inner_product(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_scale_negative_and_zero() {
        assert_eq!(scale(&[1.0, -2.0], -3.0), vec![-3.0, 6.0]);
        assert_eq!(scale(&[1.0, -2.0], 0.0), vec![0.0, -0.0]);
    }
}
