// src/process.rs
//! Classical Gram-Schmidt orthonormalization
//!
//! Turns a list of linearly independent vectors v₀ … vₙ₋₁ into an orthonormal
//! list e₀ … eₙ₋₁ spanning the same nested subspaces, in the same order.
//!
//! # Algorithm
//!
//! ```text
//! for i in 0..n:
//!     uᵢ ← vᵢ
//!     for j in 0..i:
//!         uᵢ ← uᵢ − proj_{uⱼ}(vᵢ)
//!     eᵢ ← uᵢ / ‖uᵢ‖
//! ```
//!
//! Each projection takes the raw vᵢ onto the already-orthogonalized uⱼ
//! (classical, not modified, Gram-Schmidt). There is a single pass and no
//! re-orthogonalization, so ill-conditioned inputs lose orthogonality at the
//! usual classical-GS rate.
//!
//! # Failure
//!
//! If some vᵢ lies in the span of v₀ … vᵢ₋₁ then uᵢ vanishes and the run stops
//! with [`GramSchmidtError::DegenerateVector`] instead of dividing by zero.
//! "Vanishes" is relative: ‖uᵢ‖ ≤ tolerance · ‖vᵢ‖, see [`GramSchmidtParams`].

use std::fmt;

use num_traits::Float;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::error::{GramSchmidtError, Result};
use crate::ops::projection::projection_coefficient;
use crate::params::GramSchmidtParams;
use crate::vector::{dot_unchecked, magnitude, scale, subtract};

/// Retained state of one Gram-Schmidt run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GramSchmidt<T> {
    /// Unnormalized orthogonal vectors uᵢ
    orthogonal: Vec<Vec<T>>,
    /// Orthonormal vectors eᵢ = uᵢ / ‖uᵢ‖
    orthonormal: Vec<Vec<T>>,
    /// Projection coefficients μ[i][j] = ⟨vᵢ, uⱼ⟩ / ⟨uⱼ, uⱼ⟩ for j < i
    mu: Vec<Vec<T>>,
    /// Squared norms ‖uᵢ‖²
    norms_sq: Vec<T>,
    dimension: usize,
    num_vectors: usize,
}

impl<T: Float> GramSchmidt<T> {
    /// Run classical Gram-Schmidt over `basis`.
    ///
    /// # Errors
    ///
    /// - [`GramSchmidtError::InconsistentDimension`] if the vectors differ in length.
    /// - [`GramSchmidtError::DegenerateVector`] if the inputs are linearly dependent.
    /// - [`GramSchmidtError::NonFiniteResidual`] if a magnitude overflows or is NaN.
    pub fn compute(basis: &[Vec<T>], params: &GramSchmidtParams) -> Result<Self> {
        let dimension = check_consistent_dimensions(basis)?;
        let num_vectors = basis.len();
        let tolerance = T::from(params.degeneracy_tolerance).unwrap_or_else(T::zero);

        debug!(num_vectors, dimension, "running Gram-Schmidt");

        let mut orthogonal: Vec<Vec<T>> = Vec::with_capacity(num_vectors);
        let mut orthonormal: Vec<Vec<T>> = Vec::with_capacity(num_vectors);
        let mut mu = vec![vec![T::zero(); num_vectors]; num_vectors];
        let mut norms_sq = Vec::with_capacity(num_vectors);

        for (i, v) in basis.iter().enumerate() {
            let mut u = v.clone();

            // uᵢ -= proj_{uⱼ}(vᵢ)
            for (j, u_j) in orthogonal.iter().enumerate() {
                let coefficient = projection_coefficient(u_j, v)?;
                mu[i][j] = coefficient;
                u = subtract(&u, &scale(u_j, coefficient))?;
            }

            let norm = magnitude(&u);
            if !norm.is_finite() {
                warn!(index = i, "residual magnitude is not finite");
                return Err(GramSchmidtError::NonFiniteResidual { index: i });
            }
            if is_degenerate(norm, magnitude(v), tolerance) {
                let residual = norm.to_f64().unwrap_or(f64::NAN);
                warn!(
                    index = i,
                    residual, "orthogonalized vector vanished, inputs are linearly dependent"
                );
                return Err(GramSchmidtError::DegenerateVector {
                    index: i,
                    magnitude: residual,
                });
            }

            trace!(
                index = i,
                norm = norm.to_f64().unwrap_or(f64::NAN),
                "orthogonalized vector"
            );

            orthonormal.push(scale(&u, T::one() / norm));
            norms_sq.push(norm * norm);
            orthogonal.push(u);
        }

        Ok(Self {
            orthogonal,
            orthonormal,
            mu,
            norms_sq,
            dimension,
            num_vectors,
        })
    }

    /// The orthonormal vectors eᵢ, in input order.
    pub fn orthonormal(&self) -> &[Vec<T>] {
        &self.orthonormal
    }

    /// Consume the state, keeping only the orthonormal vectors.
    pub fn into_orthonormal(self) -> Vec<Vec<T>> {
        self.orthonormal
    }

    /// The orthogonal, unnormalized vectors uᵢ.
    pub fn orthogonal(&self) -> &[Vec<T>] {
        &self.orthogonal
    }

    /// Consume the state, keeping only the orthogonal vectors.
    pub fn into_orthogonal(self) -> Vec<Vec<T>> {
        self.orthogonal
    }

    /// μ[i][j], the multiple of uⱼ removed from vᵢ (zero for j ≥ i).
    pub fn mu(&self) -> &[Vec<T>] {
        &self.mu
    }

    /// ‖uᵢ‖² for each step.
    pub fn norms_sq(&self) -> &[T] {
        &self.norms_sq
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn num_vectors(&self) -> usize {
        self.num_vectors
    }

    pub fn is_empty(&self) -> bool {
        self.num_vectors == 0
    }

    /// Rebuild the inputs as vᵢ = uᵢ + Σⱼ₍ⱼ<ᵢ₎ μ[i][j]·uⱼ.
    pub fn reconstruct(&self) -> Vec<Vec<T>> {
        self.orthogonal
            .iter()
            .enumerate()
            .map(|(i, u_i)| {
                let mut v = u_i.clone();
                for (j, u_j) in self.orthogonal[..i].iter().enumerate() {
                    let c = self.mu[i][j];
                    for (vk, &uk) in v.iter_mut().zip(u_j.iter()) {
                        *vk = *vk + c * uk;
                    }
                }
                v
            })
            .collect()
    }

    /// [`max_orthogonality_error`] of the orthonormal vectors.
    pub fn max_orthogonality_error(&self) -> Result<T> {
        max_orthogonality_error(&self.orthonormal)
    }

    /// [`max_normalization_error`] of the orthonormal vectors.
    pub fn max_normalization_error(&self) -> T {
        max_normalization_error(&self.orthonormal)
    }

    /// [`is_orthonormal`] applied to the orthonormal vectors.
    pub fn is_orthonormal(&self, tolerance: T) -> Result<bool> {
        is_orthonormal(&self.orthonormal, tolerance)
    }
}

impl<T: Float> fmt::Display for GramSchmidt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gram-Schmidt")?;
        writeln!(f, "  Dimension: {}", self.dimension)?;
        writeln!(f, "  Vectors: {}", self.num_vectors)?;
        writeln!(
            f,
            "  Max orthogonality error: {:.3e}",
            self.max_orthogonality_error()
                .ok()
                .and_then(|e| e.to_f64())
                .unwrap_or(f64::NAN)
        )?;
        write!(
            f,
            "  Max normalization error: {:.3e}",
            self.max_normalization_error().to_f64().unwrap_or(f64::NAN)
        )
    }
}

/// Orthonormalize `vectors` with default parameters.
///
/// An empty list yields an empty list.
pub fn orthonormalize<T: Float>(vectors: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    orthonormalize_with(vectors, &GramSchmidtParams::default())
}

/// Orthonormalize `vectors` with explicit parameters.
pub fn orthonormalize_with<T: Float>(
    vectors: &[Vec<T>],
    params: &GramSchmidtParams,
) -> Result<Vec<Vec<T>>> {
    GramSchmidt::compute(vectors, params).map(GramSchmidt::into_orthonormal)
}

/// The orthogonal vectors uᵢ, without the final normalization.
pub fn orthogonalize<T: Float>(vectors: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    GramSchmidt::compute(vectors, &GramSchmidtParams::default()).map(GramSchmidt::into_orthogonal)
}

/// Orthonormalize many independent sets in parallel.
///
/// One result per set, in input order. A failing set does not affect the others.
pub fn orthonormalize_batch<T>(sets: &[Vec<Vec<T>>]) -> Vec<Result<Vec<Vec<T>>>>
where
    T: Float + Send + Sync,
{
    orthonormalize_batch_with(sets, &GramSchmidtParams::default())
}

/// [`orthonormalize_batch`] with explicit parameters.
pub fn orthonormalize_batch_with<T>(
    sets: &[Vec<Vec<T>>],
    params: &GramSchmidtParams,
) -> Vec<Result<Vec<Vec<T>>>>
where
    T: Float + Send + Sync,
{
    debug!(sets = sets.len(), "orthonormalizing batch");
    sets.par_iter()
        .map(|set| orthonormalize_with(set, params))
        .collect()
}

/// Largest |⟨aᵢ, aⱼ⟩| over i ≠ j.
pub fn max_orthogonality_error<T: Float>(vectors: &[Vec<T>]) -> Result<T> {
    check_consistent_dimensions(vectors)?;
    Ok(pairwise_max_dot(vectors))
}

/// Largest |‖aᵢ‖ − 1|.
pub fn max_normalization_error<T: Float>(vectors: &[Vec<T>]) -> T {
    max_unit_deviation(vectors)
}

/// True if `vectors` are pairwise orthogonal unit vectors within `tolerance`.
pub fn is_orthonormal<T: Float>(vectors: &[Vec<T>], tolerance: T) -> Result<bool> {
    Ok(max_orthogonality_error(vectors)? <= tolerance
        && max_normalization_error(vectors) <= tolerance)
}

/// Common dimension of `vectors` (zero for an empty list).
fn check_consistent_dimensions<T>(vectors: &[Vec<T>]) -> Result<usize> {
    let expected = vectors.first().map_or(0, Vec::len);
    for (index, v) in vectors.iter().enumerate() {
        if v.len() != expected {
            return Err(GramSchmidtError::InconsistentDimension {
                index,
                expected,
                actual: v.len(),
            });
        }
    }
    Ok(expected)
}

#[inline]
fn is_degenerate<T: Float>(norm: T, reference: T, tolerance: T) -> bool {
    norm == T::zero() || norm <= tolerance * reference
}

fn pairwise_max_dot<T: Float>(vectors: &[Vec<T>]) -> T {
    let mut worst = T::zero();
    for i in 0..vectors.len() {
        for j in 0..i {
            worst = worst.max(dot_unchecked(&vectors[i], &vectors[j]).abs());
        }
    }
    worst
}

fn max_unit_deviation<T: Float>(vectors: &[Vec<T>]) -> T {
    vectors
        .iter()
        .map(|v| (magnitude(v) - T::one()).abs())
        .fold(T::zero(), T::max)
}
