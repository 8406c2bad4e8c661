//! Integration tests for the reduction engine
//!
//! Properties checked here are independent of the elimination algorithm:
//! form predicates, idempotence, pivot-column structure, rank bounds, and
//! the zero-rows-at-the-bottom invariant.

mod common;

use common::{assert_allclose_f64, random_int_matrix, rng};
use linr::matrix::Matrix;

#[test]
fn test_reduction_reaches_row_echelon_form() {
    let mut rng = rng(1);
    for (rows, cols) in [(2, 2), (3, 3), (3, 5), (5, 3), (4, 4), (6, 2)] {
        let mut m = random_int_matrix(&mut rng, rows, cols);
        m.reduce(false);
        assert!(m.is_row_echelon(), "not in echelon form:\n{m}");
    }
}

#[test]
fn test_canonical_reduction_reaches_reduced_form() {
    let mut rng = rng(2);
    for (rows, cols) in [(2, 2), (3, 3), (3, 5), (5, 3), (4, 4)] {
        let mut m = random_int_matrix(&mut rng, rows, cols);
        m.reduce(true);
        assert!(m.is_reduced_row_echelon(), "not in reduced form:\n{m}");
    }
}

#[test]
fn test_reduction_idempotent_on_echelon_input() {
    let mut rng = rng(3);
    for _ in 0..10 {
        let mut m = random_int_matrix(&mut rng, 4, 5);
        m.reduce(false);
        let echelon = m.clone();
        m.reduce(false);
        assert_eq!(m, echelon);
    }
}

#[test]
fn test_reduced_form_pivot_columns_are_unit() {
    let mut m = Matrix::from_rows([
        [2.0, 4.0, 6.0, 2.0],
        [1.0, 3.0, 5.0, 7.0],
        [3.0, 7.0, 11.0, 9.0],
    ]);
    m.reduce(true);

    // Every pivot column holds exactly one nonzero entry, and it is 1
    for r in 1..=m.rows() {
        if let Some((col, lead)) = m.leading_entry(r) {
            assert_eq!(lead, 1.0);
            let column = m.column(col);
            let nonzero = column.iter().filter(|&&v| v != 0.0).count();
            assert_eq!(nonzero, 1, "pivot column {col} not cleared: {column:?}");
        }
    }
}

#[test]
fn test_zero_rows_sort_to_the_bottom() {
    // Contiguity of nonzero rows is asserted rather than assumed: rank
    // counting depends on it.
    let mut rng = rng(4);
    for _ in 0..20 {
        let mut m = random_int_matrix(&mut rng, 5, 4);
        m.reduce(false);
        let mut seen_zero = false;
        for r in 1..=m.rows() {
            match m.leading_entry(r) {
                None => seen_zero = true,
                Some(_) => assert!(!seen_zero, "nonzero row below a zero row:\n{m}"),
            }
        }
    }
}

#[test]
fn test_rank_bounds_hold() {
    let mut rng = rng(5);
    for (rows, cols) in [(2, 4), (4, 2), (3, 3), (5, 5), (1, 6)] {
        let m = random_int_matrix(&mut rng, rows, cols);
        assert!(m.rank() <= rows.min(cols));
    }
}

#[test]
fn test_rank_of_known_matrices() {
    assert_eq!(Matrix::identity(5).rank(), 5);
    assert_eq!(Matrix::zeros(4, 7).rank(), 0);

    // Rank 1: every row is a multiple of the first
    let m = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]);
    assert_eq!(m.rank(), 1);

    // Full-rank rectangular
    let m = Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
    assert_eq!(m.rank(), 2);
}

#[test]
fn test_rank_invariant_under_row_operations() {
    let mut rng = rng(6);
    let m = random_int_matrix(&mut rng, 4, 4);
    let rank = m.rank();

    let mut shuffled = m.clone();
    shuffled.interchange_rows(1, 4).unwrap();
    shuffled.scale_row(2, 3.0).unwrap();
    shuffled.add_scaled_row(3, 1, -2.0).unwrap();
    assert_eq!(shuffled.rank(), rank);
}

#[test]
fn test_reduction_preserves_row_space_solution() {
    // Reducing [A | b] must not change the solution of A x = b:
    // x = (1, 2) solves both the original and the reduced system.
    let mut aug = Matrix::from_rows([[2.0, 1.0, 4.0], [1.0, 3.0, 7.0]]);
    aug.reduce(true);
    assert_allclose_f64(aug.column(3).as_slice(), &[1.0, 2.0], 1e-12, 1e-12, "solution");
}

#[test]
fn test_reduce_handles_leading_zero_columns() {
    let mut m = Matrix::from_rows([
        [0.0, 0.0, 2.0, 4.0],
        [0.0, 0.0, 1.0, 3.0],
    ]);
    m.reduce(true);
    assert!(m.is_reduced_row_echelon());
    assert_eq!(m.leading_entry(1), Some((3, 1.0)));
    assert_eq!(m.leading_entry(2), Some((4, 1.0)));
}
