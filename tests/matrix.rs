use exactfit::{FitError, Fraction, FractionMatrix, Pivoting, invert_matrix};

fn matrix(rows: &[&[&str]]) -> FractionMatrix {
    let rows: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
    FractionMatrix::from_decimal_rows(&rows).expect("parse matrix")
}

#[test]
fn inverse_times_original_is_identity() {
    let m = matrix(&[&["2", "1", "1"], &["1", "3", "2"], &["1", "0", "0"]]);
    let inv = m.inverse(Pivoting::Diagonal).unwrap();
    assert_eq!(m.product(&inv).unwrap(), FractionMatrix::identity(3));
    assert_eq!(inv.product(&m).unwrap(), FractionMatrix::identity(3));
}

#[test]
fn double_inverse_recovers_matrix() {
    let m = matrix(&[&["1.5", "2", "-1"], &["0.25", "3", "4"], &["2", "-0.5", "1"]]);
    let back = m
        .inverse(Pivoting::Diagonal)
        .and_then(|inv| inv.inverse(Pivoting::Diagonal))
        .unwrap();
    assert_eq!(back, m);
}

#[test]
fn decimal_entry_point_inverts_power_matrix() {
    let rows = vec![vec!["1", "1"], vec!["2", "4"]];
    let inv = invert_matrix(&rows).unwrap().simplified();
    assert_eq!(
        inv.tokens(),
        vec![vec!["2/1", "-1/2"], vec!["-1/1", "1/2"]]
    );
}

#[test]
fn elimination_leaves_entries_unreduced() {
    let rows = vec![vec!["2"]];
    let inv = invert_matrix(&rows).unwrap();
    assert_eq!(inv.get(0, 0).to_string(), "1/2");

    let rows = vec![vec!["0.5"]];
    let inv = invert_matrix(&rows).unwrap();
    assert_eq!(inv.get(0, 0).to_string(), "10/5");
    assert_eq!(inv.get(0, 0), &Fraction::from(2));
}

#[test]
fn zero_pivot_mid_elimination_is_singular() {
    // After clearing column 0 the second diagonal entry vanishes.
    let m = matrix(&[&["1", "1", "0"], &["1", "1", "1"], &["0", "1", "1"]]);
    assert_eq!(
        m.inverse(Pivoting::Diagonal),
        Err(FitError::SingularMatrix { pivot: 1 })
    );
    let inv = m.inverse(Pivoting::Partial).unwrap();
    assert_eq!(m.product(&inv).unwrap(), FractionMatrix::identity(3));
}

#[test]
fn zero_matrix_is_singular_under_both_strategies() {
    let m = matrix(&[&["0", "0"], &["0", "0"]]);
    for pivoting in [Pivoting::Diagonal, Pivoting::Partial] {
        assert_eq!(m.inverse(pivoting), Err(FitError::SingularMatrix { pivot: 0 }));
    }
}

#[test]
fn malformed_entry_is_parse_error() {
    let rows = vec![vec!["1", "x"], vec!["2", "3"]];
    assert!(matches!(invert_matrix(&rows), Err(FitError::Parse(_))));
}

#[test]
fn empty_matrix_inverts_to_empty() {
    let rows: Vec<Vec<&str>> = Vec::new();
    let inv = invert_matrix(&rows).unwrap();
    assert_eq!(inv.rows(), 0);
    assert!(inv.tokens().is_empty());
}

#[test]
fn product_checks_dimensions() {
    let a = matrix(&[&["1", "2"]]);
    let b = matrix(&[&["1", "2"]]);
    assert_eq!(
        a.product(&b),
        Err(FitError::DimensionMismatch { left: 2, right: 1 })
    );
    assert_eq!(
        a.mul_vec_simplified(&[Fraction::one()]),
        Err(FitError::DimensionMismatch { left: 2, right: 1 })
    );
}
