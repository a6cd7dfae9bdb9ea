// tests/projection_tests.rs

use gram_schmidt::ops::projection::{projection, rejection, Projection};
use gram_schmidt::{inner_product, subtract, GramSchmidtError};

const EPS: f64 = 1e-12;

#[test]
fn test_project_onto_axis() {
    let u = [3.0_f64, 4.0, 0.0];
    let axis = [0.0, 1.0, 0.0];

    // free-function version
    let p1 = projection(&axis, &u).unwrap();
    // method version
    let p2 = u.project_onto(&axis).unwrap();

    assert!(p1[0].abs() < EPS && (p1[1] - 4.0).abs() < EPS && p1[2].abs() < EPS);
    assert_eq!(p1, p2);
}

#[test]
fn test_reject_from_axis() {
    let u = [3.0_f64, 4.0, 0.0];
    let axis = [0.0, 1.0, 0.0];

    let r1 = rejection(&axis, &u).unwrap();
    let r2 = u.reject_from(&axis).unwrap();

    // projection was (0,4,0) so rejection is (3,0,0)
    assert!((r1[0] - 3.0).abs() < EPS && r1[1].abs() < EPS && r1[2].abs() < EPS);
    assert_eq!(r1, r2);
}

#[test]
fn test_projection_onto_oblique_axis() {
    // proj_v(u) with v = (1,1), u = (2,0): (2/2)·(1,1)
    let p = projection(&[1.0_f64, 1.0], &[2.0, 0.0]).unwrap();
    assert!((p[0] - 1.0).abs() < EPS && (p[1] - 1.0).abs() < EPS);
}

#[test]
fn test_projection_is_parallel_to_axis() {
    let v = [2.0_f64, -1.0, 3.0];
    let u = [0.5, 4.0, -2.0];
    let p = projection(&v, &u).unwrap();

    // p = c·v: cross-ratios agree
    let c = p[0] / v[0];
    for (pi, vi) in p.iter().zip(v.iter()) {
        assert!((pi - c * vi).abs() < EPS);
    }
}

#[test]
fn test_residual_orthogonal_to_axis() {
    let v = [2.0_f64, 1.0, -1.0];
    let u = [1.0_f64, 1.0, 0.0];

    let residual = subtract(&u, &projection(&v, &u).unwrap()).unwrap();
    assert!(inner_product(&residual, &v).unwrap().abs() < 1e-9);
    assert_eq!(residual, rejection(&v, &u).unwrap());
}

#[test]
fn test_project_onto_zero_axis_is_error() {
    let u = [3.0_f64, 4.0, 5.0];
    let zero = [0.0, 0.0, 0.0];

    assert_eq!(projection(&zero, &u), Err(GramSchmidtError::ZeroAxis));
    assert_eq!(u.project_onto(&zero), Err(GramSchmidtError::ZeroAxis));
}

#[test]
fn test_projection_dimension_mismatch() {
    let err = projection(&[1.0, 0.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(
        err,
        GramSchmidtError::DimensionMismatch {
            expected: 2,
            actual: 3
        }
    );
}
