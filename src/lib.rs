//! __symarray__ provides compact storage for symmetric numeric arrays.
//!
//! An `n x n` array with `A[i,j] = A[j,i]` has only `n(n+1)/2` unique
//! values.  The containers in this crate store just those values, using a
//! little over half the memory of the equivalent dense array, while
//! reading and writing through either ordering of a symmetric pair.
//!
//! * [`SymmetricArray2`](symmetric::SymmetricArray2): `n x n` arrays with `A[i,j] = A[j,i]`.
//! * [`SymmetricArray3`](symmetric::SymmetricArray3): `n x n x n` arrays with `A[i,j,k] = A[j,i,k]`.
//!
//! Containers are initialised segment by segment through a
//! [`FillFunction`](symmetric::FillFunction).  Stock fills are provided for
//! zeros, constants and uniformly distributed random values, and any
//! closure returning a [`Block`](symmetric::Block) can be used instead.
//!
//! ```
//! use symarray::symmetric::{Full, SymmetricArray2};
//!
//! let mut A = SymmetricArray2::<i64>::with_fill(10, Full, &5).unwrap();
//! assert_eq!(A[(1, 5)], 5);
//!
//! A[(1, 9)] = 1;
//! assert_eq!(A[(9, 1)], 1);
//! assert_eq!(
//!     A.to_string(),
//!     "Representation of an 10x10 array where array[i,j] = array[j,i] with 55 unique values."
//! );
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;
pub mod symmetric;
