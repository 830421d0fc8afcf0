//! Integration tests for the sparse vector type.

use veracity_classifiers::math::SparseVector;

#[test]
fn from_entries_sorts_merges_and_drops_zeros() {
    let v = SparseVector::from_entries(5, vec![(3, 1.0), (1, 2.0), (3, 0.5), (4, 0.0)]);
    assert_eq!(v.nnz(), 2);
    assert_eq!(v.get(1), 2.0);
    assert_eq!(v.get(3), 1.5);
    assert_eq!(v.get(4), 0.0);

    let indices: Vec<usize> = v.iter().map(|(i, _)| i).collect();
    assert_eq!(indices, vec![1, 3]);
}

#[test]
fn empty_vector_has_no_entries() {
    let v = SparseVector::empty(10);
    assert_eq!(v.dim(), 10);
    assert!(v.is_empty());
    assert_eq!(v.l2_norm(), 0.0);
}

#[test]
fn l2_norm_and_normalize() {
    let mut v = SparseVector::from_entries(4, vec![(0, 3.0), (2, 4.0)]);
    assert!((v.l2_norm() - 5.0).abs() < 1e-12);

    v.normalize();
    assert!((v.l2_norm() - 1.0).abs() < 1e-12);
    assert!((v.get(0) - 0.6).abs() < 1e-12);
    assert!((v.get(2) - 0.8).abs() < 1e-12);
}

#[test]
fn normalize_zero_vector_is_a_no_op() {
    let mut v = SparseVector::empty(3);
    v.normalize();
    assert!(v.is_empty());
}

#[test]
fn to_dense_round_trip() {
    let v = SparseVector::from_entries(4, vec![(1, 2.5), (3, -1.0)]);
    assert_eq!(v.to_dense(), vec![0.0, 2.5, 0.0, -1.0]);
}
