#![allow(non_snake_case)]
use itertools::iproduct;
use symarray::{algebra::*, symmetric::*};

#[test]
fn sym3_example() {
    let mut A = SymmetricArray3::<f64>::new(10).unwrap();
    A.set(&[1, 9, 2], 5.0).unwrap();

    assert_eq!(A.get(&[9, 1, 2]).unwrap(), 5.0);
    assert_eq!(A.len(), 550);
    assert_eq!(
        A.to_string(),
        "Representation of an 10x10x10 array where array[i,j,k] = array[j,i,k] with 550 unique values."
    );
    assert_eq!(format!("{:?}", A), A.describe());
}

#[test]
fn sym3_symmetry() {
    let n = 5;
    let mut A = SymmetricArray3::<i32>::new(n).unwrap();

    for (i, j, k) in iproduct!(0..n, 0..n, 0..n) {
        let v = (100 * i + 10 * j + k) as i32;
        A.set(&[i, j, k], v).unwrap();
        assert_eq!(A.get(&[i, j, k]).unwrap(), v);
        assert_eq!(A.get(&[j, i, k]).unwrap(), v);
        assert_eq!(A[(j, i, k)], v);
    }
}

#[test]
fn sym3_third_index_independent() {
    let n = 4;
    let mut A = SymmetricArray3::<f64>::new(n).unwrap();
    A.set3(2, 1, 3, 8.0).unwrap();

    for k in 0..n {
        let expected = if k == 3 { 8.0 } else { 0.0 };
        assert_eq!(A.get3(1, 2, k).unwrap(), expected);
        assert_eq!(A.get3(2, 1, k).unwrap(), expected);
    }
    // no other pair sees the write
    let total: f64 = A.as_slice().iter().sum();
    assert_eq!(total, 8.0);
}

#[test]
fn sym3_cardinality() {
    for n in 1..12 {
        let A = SymmetricArray3::<u8>::new(n).unwrap();
        assert_eq!(A.len(), n * (n + 1) / 2 * n);
        assert_eq!(A.as_slice().len(), A.len());
        assert_eq!(A.size(), (n, n, n));
    }
}

#[test]
fn sym3_bounds() {
    let mut A = SymmetricArray3::<f64>::new(3).unwrap();

    assert_eq!(
        A.get(&[0, 0, 3]),
        Err(IndexError::OutOfRange {
            axis: 2,
            index: 3,
            dim: 3
        })
    );
    assert!(matches!(
        A.set(&[5, 0, 0], 1.0),
        Err(IndexError::OutOfRange { axis: 0, .. })
    ));
    assert!(matches!(
        A.get(&[0, 1]),
        Err(IndexError::WrongArity { expected: 3, .. })
    ));
    assert!(matches!(
        A.set(&[0, 1, 2, 0], 1.0),
        Err(IndexError::WrongArity { expected: 3, .. })
    ));
    assert!(A.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn sym3_zero_dimension() {
    assert_eq!(
        SymmetricArray3::<f64>::new(0).unwrap_err(),
        ConfigurationError::ZeroDimension
    );
}

#[test]
fn sym3_dimension_too_large() {
    assert_eq!(
        SymmetricArray3::<u8>::new(usize::MAX / 2).unwrap_err(),
        ConfigurationError::DimensionTooLarge { n: usize::MAX / 2 }
    );
}

#[test]
fn sym3_storage_bytes() {
    let A = SymmetricArray3::<f64>::new(10).unwrap();
    let B = SymmetricArray3::<f32>::new(10).unwrap();
    assert!(A.total_storage_bytes() > B.total_storage_bytes());
    assert!(A.total_storage_bytes() >= 550 * 8);
}

#[test]
#[should_panic]
fn sym3_index_wrong_range() {
    let A = SymmetricArray3::<f64>::new(2).unwrap();
    let _ = A[(2, 0, 0)];
}
