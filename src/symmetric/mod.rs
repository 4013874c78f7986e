//! Symmetric containers storing only their unique values.
//!
//! [`SymmetricArray2`] represents an `n x n` array with `A[i,j] = A[j,i]`.
//! [`SymmetricArray3`] represents an `n x n x n` array with
//! `A[i,j,k] = A[j,i,k]`.  Both map every symmetric ordering of a
//! coordinate pair to one slot of a packed upper triangular buffer.

mod array2;
mod array3;
mod fill;
mod index;

pub use array2::*;
pub use array3::*;
pub use fill::*;
