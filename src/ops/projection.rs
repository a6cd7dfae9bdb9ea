// src/ops/projection.rs
//! Vector projection and rejection over slices.

use num_traits::Float;

use crate::error::{GramSchmidtError, Result};
use crate::vector::{dot_unchecked, ensure_same_dimension, scale};

/// Trait for projecting and rejecting slices onto axes.
pub trait Projection<T> {
    /// Project this vector onto `axis`.
    fn project_onto(&self, axis: &[T]) -> Result<Vec<T>>;

    /// Reject (component orthogonal to `axis`).
    fn reject_from(&self, axis: &[T]) -> Result<Vec<T>>;
}

impl<T: Float> Projection<T> for [T] {
    #[inline]
    fn project_onto(&self, axis: &[T]) -> Result<Vec<T>> {
        projection(axis, self)
    }

    #[inline]
    fn reject_from(&self, axis: &[T]) -> Result<Vec<T>> {
        rejection(axis, self)
    }
}

/// Scalar `(u·v) / (v·v)` such that `proj_v(u) = coefficient · v`.
#[inline]
pub fn projection_coefficient<T: Float>(v: &[T], u: &[T]) -> Result<T> {
    ensure_same_dimension(v, u)?;
    let denom = dot_unchecked(v, v);
    if denom == T::zero() {
        return Err(GramSchmidtError::ZeroAxis);
    }
    Ok(dot_unchecked(u, v) / denom)
}

/// Orthogonal projection of `u` onto `v`: `[(u·v) / (v·v)] · v`.
///
/// Projecting onto a zero `v` is an error rather than a division by zero.
#[inline]
pub fn projection<T: Float>(v: &[T], u: &[T]) -> Result<Vec<T>> {
    let coefficient = projection_coefficient(v, u)?;
    Ok(scale(v, coefficient))
}

/// Component of `u` orthogonal to `v`: `u − proj_v(u)`.
#[inline]
pub fn rejection<T: Float>(v: &[T], u: &[T]) -> Result<Vec<T>> {
    let coefficient = projection_coefficient(v, u)?;
    Ok(u
        .iter()
        .zip(v.iter())
        .map(|(&ui, &vi)| ui - coefficient * vi)
        .collect())
}
