//! Geometric operations built on the vector primitives.

pub mod projection;

pub use projection::{projection, projection_coefficient, rejection, Projection};
