//! # gram_schmidt
//!
//! Classical Gram-Schmidt orthonormalization over dense real vectors.
//!
//! Vectors are plain slices (`&[f64]`, or any [`num_traits::Float`]) and lists
//! of vectors are `&[Vec<T>]`. The building blocks live in [`vector`] and
//! [`ops::projection`]; the iteration itself is in [`process`].
//!
//! ```
//! use gram_schmidt::orthonormalize;
//!
//! let e = orthonormalize(&[vec![3.0_f64, 4.0]]).unwrap();
//! assert!((e[0][0] - 0.6).abs() < 1e-12);
//! assert!((e[0][1] - 0.8).abs() < 1e-12);
//! ```

pub mod error;
pub mod ops;
pub mod params;
pub mod process;
pub mod vector;

pub use error::{GramSchmidtError, Result};
pub use process::{
    is_orthonormal, max_normalization_error, max_orthogonality_error, orthogonalize,
    orthonormalize, orthonormalize_batch, orthonormalize_batch_with, orthonormalize_with,
    GramSchmidt,
};
pub use ops::projection::{projection, projection_coefficient, rejection, Projection};
pub use params::GramSchmidtParams;
pub use vector::{inner_product, magnitude, scale, subtract};
