//! Internal utility functions and helpers.

// number of entries in the packed upper triangle of a k x k matrix
pub(crate) fn triangular_number(k: usize) -> usize {
    (k * (k + 1)) >> 1
}

#[test]
fn test_triangular_number() {
    assert_eq!(triangular_number(0), 0);
    assert_eq!(triangular_number(1), 1);
    assert_eq!(triangular_number(4), 10);
    assert_eq!(triangular_number(10), 55);
}
