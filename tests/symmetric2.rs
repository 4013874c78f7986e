#![allow(non_snake_case)]
use itertools::iproduct;
use symarray::{algebra::*, symmetric::*};

#[test]
fn sym2_example() {
    let mut A = SymmetricArray2::<f64>::new(10).unwrap();
    A.set(&[1, 9], 1.0).unwrap();

    assert_eq!(A.get(&[9, 1]).unwrap(), 1.0);
    assert_eq!(A.len(), 55);
    assert_eq!(
        A.describe(),
        "Representation of an 10x10 array where array[i,j] = array[j,i] with 55 unique values."
    );
    assert_eq!(format!("{}", A), A.describe());
    assert_eq!(format!("{:?}", A), A.describe());
}

#[test]
fn sym2_symmetry() {
    for n in 1..7 {
        let mut A = SymmetricArray2::<i64>::new(n).unwrap();
        for (i, j) in iproduct!(0..n, 0..n) {
            let v = (100 * i + j) as i64;
            A.set(&[i, j], v).unwrap();
            assert_eq!(A.get(&[i, j]).unwrap(), v);
            assert_eq!(A.get(&[j, i]).unwrap(), v);
            assert_eq!(A[(j, i)], v);
        }
    }
}

#[test]
fn sym2_cardinality() {
    for n in 1..20 {
        let A = SymmetricArray2::<f32>::new(n).unwrap();
        assert_eq!(A.len(), n * (n + 1) / 2);
        assert_eq!(A.as_slice().len(), A.len());
        assert_eq!(A.dim(), n);
        assert_eq!(A.size(), (n, n));
        assert!(!A.is_empty());
    }
}

#[test]
fn sym2_bounds() {
    let mut A = SymmetricArray2::<f64>::new(4).unwrap();

    assert_eq!(
        A.get(&[4, 0]),
        Err(IndexError::OutOfRange {
            axis: 0,
            index: 4,
            dim: 4
        })
    );
    assert_eq!(
        A.set(&[1, 7], 1.0),
        Err(IndexError::OutOfRange {
            axis: 1,
            index: 7,
            dim: 4
        })
    );
    assert!(matches!(
        A.get(&[1]),
        Err(IndexError::WrongArity { expected: 2, .. })
    ));
    assert!(matches!(
        A.get(&[1, 2, 3]),
        Err(IndexError::WrongArity { expected: 2, .. })
    ));
    assert!(matches!(
        A.set(&[], 1.0),
        Err(IndexError::WrongArity { expected: 2, .. })
    ));
    assert!(A.get2(3, 3).is_ok());
    assert!(A.set2(0, 4, 1.0).is_err());

    // failed writes leave everything untouched
    assert!(A.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn sym2_error_messages() {
    let A = SymmetricArray2::<f64>::new(4).unwrap();
    let err = A.get(&[2, 12]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index 12 (axis 1) is out of range for dimension 4"
    );
    let err = A.get(&[2, 1, 0]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Index [2, 1, 0] has the wrong number of keys (expected 2)"
    );
}

#[test]
fn sym2_zero_dimension() {
    assert_eq!(
        SymmetricArray2::<f64>::new(0).unwrap_err(),
        ConfigurationError::ZeroDimension
    );
}

#[test]
fn sym2_add_constant_skips_diagonal() {
    let mut A = SymmetricArray2::<i32>::new(4).unwrap();
    A.add_constant(5);

    for (i, j) in iproduct!(0..4, 0..4) {
        if i == j {
            assert_eq!(A[(i, j)], 0);
        } else {
            assert_eq!(A[(i, j)], 5);
        }
    }

    // adds rather than overwrites
    A.add_constant(5);
    assert_eq!(A[(0, 3)], 10);
    assert_eq!(A[(3, 3)], 0);
}

#[test]
fn sym2_to_dense_skips_diagonal() {
    let mut A = SymmetricArray2::<f64>::with_fill(3, Full, &1.0).unwrap();
    for (i, j) in iproduct!(0..3, 0..3) {
        if i != j {
            A.set(&[i, j], 7.0).unwrap();
        }
    }

    let D = A.to_dense();
    assert_eq!(D.size(), (3, 3));
    assert!(D.is_symmetric());
    for (i, j) in iproduct!(0..3, 0..3) {
        if i == j {
            assert_eq!(D[(i, j)], 0.0);
        } else {
            assert_eq!(D[(i, j)], 7.0);
        }
    }

    // the dense copy is independent of the symmetric store
    A.set(&[0, 1], -1.0).unwrap();
    assert_eq!(D[(0, 1)], 7.0);
}

#[test]
fn sym2_from_triu() {
    let M = Matrix::from(&[[1.0, 2.0, 3.0], [99.0, 4.0, 5.0], [99.0, 99.0, 6.0]]);
    let A = SymmetricArray2::from_triu(&M).unwrap();

    assert_eq!(A.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(A[(2, 0)], 3.0);
    assert_eq!(A[(1, 1)], 4.0);

    let D = A.to_dense();
    for (i, j) in iproduct!(0..3, 0..3) {
        if i < j {
            assert_eq!(D[(i, j)], M[(i, j)]);
            assert_eq!(D[(j, i)], M[(i, j)]);
        }
    }

    let R = Matrix::<f64>::zeros((2, 3));
    assert_eq!(
        SymmetricArray2::from_triu(&R).unwrap_err(),
        ConfigurationError::NotSquare { m: 2, n: 3 }
    );
    let E = Matrix::<f64>::zeros((0, 0));
    assert_eq!(
        SymmetricArray2::from_triu(&E).unwrap_err(),
        ConfigurationError::ZeroDimension
    );
}

#[test]
#[should_panic]
fn sym2_index_wrong_range() {
    let mut A = SymmetricArray2::<f64>::new(4).unwrap();
    A[(1, 4)] = 1.0;
}
