// src/params.rs
//! Parameters for a Gram-Schmidt run.

use serde::{Deserialize, Serialize};

/// Default relative threshold below which an orthogonalized vector counts as zero.
pub const DEFAULT_DEGENERACY_TOLERANCE: f64 = 1e-10;

/// Tunables for [`GramSchmidt::compute`](crate::GramSchmidt::compute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GramSchmidtParams {
    /// Relative tolerance: step `i` fails when `‖uᵢ‖ ≤ tolerance · ‖vᵢ‖`.
    pub degeneracy_tolerance: f64,
}

impl GramSchmidtParams {
    /// Params with the given relative tolerance.
    ///
    /// Negative or non-finite values are clamped to `0.0`.
    pub fn new(degeneracy_tolerance: f64) -> Self {
        let degeneracy_tolerance = if degeneracy_tolerance.is_finite() {
            degeneracy_tolerance.max(0.0)
        } else {
            0.0
        };
        Self {
            degeneracy_tolerance,
        }
    }

    /// Only an exactly zero (or non-finite) residual is degenerate.
    pub fn exact() -> Self {
        Self::new(0.0)
    }
}

impl Default for GramSchmidtParams {
    fn default() -> Self {
        Self::new(DEFAULT_DEGENERACY_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_invalid_tolerance() {
        assert_eq!(GramSchmidtParams::new(-1.0).degeneracy_tolerance, 0.0);
        assert_eq!(GramSchmidtParams::new(f64::NAN).degeneracy_tolerance, 0.0);
        assert_eq!(GramSchmidtParams::new(f64::INFINITY).degeneracy_tolerance, 0.0);
    }

    #[test]
    fn test_default_and_exact() {
        assert_eq!(
            GramSchmidtParams::default().degeneracy_tolerance,
            DEFAULT_DEGENERACY_TOLERANCE
        );
        assert_eq!(GramSchmidtParams::exact().degeneracy_tolerance, 0.0);
    }
}
