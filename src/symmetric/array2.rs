#![allow(non_snake_case)]

use super::fill::{check_block, FillFunction, Zeros};
use super::index::{check_index, packed_len, segment_start, triu_slot};
use crate::algebra::*;
use itertools::Itertools;
use std::ops::{AddAssign, Index, IndexMut};

/// Symmetric `n x n` array storing only its unique values.
///
/// Entries `(i,j)` and `(j,i)` share a single storage slot, so the
/// array holds `n(n+1)/2` values rather than `n^2`.  Values are kept
/// as the packed upper triangle in one contiguous buffer, with row
/// `i` of the triangle (the segment for `i`) holding the `n - i`
/// entries `(i,i)..(i,n-1)`.
///
/// ```
/// use symarray::symmetric::SymmetricArray2;
///
/// let mut A = SymmetricArray2::<f64>::new(10).unwrap();
/// A.set(&[1, 9], 1.0).unwrap();
/// assert_eq!(A.get(&[9, 1]).unwrap(), 1.0);
/// assert_eq!(A.len(), 55);
/// ```
#[derive(Clone, PartialEq)]
pub struct SymmetricArray2<T> {
    n: usize,
    unique: usize,
    data: Vec<T>,
}

impl<T> SymmetricArray2<T>
where
    T: Element,
{
    /// Zero filled `n x n` symmetric array
    pub fn new(n: usize) -> Result<Self, ConfigurationError> {
        Self::with_fill(n, Zeros, &())
    }

    /// Build an `n x n` symmetric array, requesting segment `i` from
    /// `fill` as a vector of length `n - i`.  The `config` value is
    /// passed to every call of `fill` without interpretation.
    pub fn with_fill<F, C>(n: usize, mut fill: F, config: &C) -> Result<Self, ConfigurationError>
    where
        F: FillFunction<T, C>,
    {
        if n == 0 {
            return Err(ConfigurationError::ZeroDimension);
        }

        let unique = packed_len::<T>(n, 1)?;
        let mut data = Vec::with_capacity(unique);

        for i in 0..n {
            let shape = SegmentShape::Vector(n - i);
            let block = fill.fill(shape, config);
            check_block(&block, i, shape)?;
            data.extend_from_slice(block.as_slice());
        }
        debug_assert_eq!(data.len(), unique);

        tracing::debug!(n, unique, dtype = %T::DTYPE, "constructed symmetric array");
        Ok(Self { n, unique, data })
    }

    /// Pack the upper triangle (diagonal included) of a square
    /// dense matrix.  Entries below the diagonal are ignored.
    pub fn from_triu(M: &Matrix<T>) -> Result<Self, ConfigurationError> {
        if !M.is_square() {
            return Err(ConfigurationError::NotSquare { m: M.m, n: M.n });
        }
        let n = M.nrows();
        if n == 0 {
            return Err(ConfigurationError::ZeroDimension);
        }

        let mut data = Vec::with_capacity(triangular_number(n));
        for i in 0..n {
            for j in i..n {
                data.push(M[(i, j)]);
            }
        }
        Ok(Self {
            n,
            unique: data.len(),
            data,
        })
    }

    #[inline]
    fn slot(&self, idx: &[usize]) -> Result<usize, IndexError> {
        check_index(idx, 2, self.n)?;
        Ok(triu_slot(self.n, idx[0], idx[1]))
    }

    /// Value at `idx`, which must hold exactly two coordinates
    pub fn get(&self, idx: &[usize]) -> Result<T, IndexError> {
        let slot = self.slot(idx)?;
        Ok(self.data[slot])
    }

    /// Write `value` at `idx`.  Nothing is written if `idx` is invalid.
    pub fn set(&mut self, idx: &[usize], value: T) -> Result<(), IndexError> {
        let slot = self.slot(idx)?;
        self.data[slot] = value;
        Ok(())
    }

    /// Value at `(i, j)`
    pub fn get2(&self, i: usize, j: usize) -> Result<T, IndexError> {
        self.get(&[i, j])
    }

    /// Write `value` at `(i, j)` and its mirror `(j, i)`
    pub fn set2(&mut self, i: usize, j: usize, value: T) -> Result<(), IndexError> {
        self.set(&[i, j], value)
    }

    /// Add `value` to every off-diagonal unique entry.
    ///
    /// Diagonal entries are left unchanged.
    pub fn add_constant(&mut self, value: T) {
        let n = self.n;
        for (i, j) in (0..n).tuple_combinations() {
            self.data[triu_slot(n, i, j)] += value;
        }
    }

    /// Expand to a dense `n x n` matrix.
    ///
    /// Off-diagonal entries are mirrored across the diagonal.  The
    /// diagonal of the result is zero and does not copy the stored
    /// diagonal values.
    pub fn to_dense(&self) -> Matrix<T> {
        let n = self.n;
        let mut A = Matrix::zeros((n, n));
        for (i, j) in (0..n).tuple_combinations() {
            let v = self.data[triu_slot(n, i, j)];
            A[(i, j)] = v;
            A[(j, i)] = v;
        }
        tracing::debug!(n, "expanded symmetric array to dense");
        A
    }

    /// Number of unique values stored
    pub fn len(&self) -> usize {
        self.unique
    }

    /// Always false, since the dimension is at least 1
    pub fn is_empty(&self) -> bool {
        self.unique == 0
    }

    /// Side length `n`
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Runtime tag of the element type `T`
    pub fn dtype(&self) -> ElementType {
        T::DTYPE
    }

    /// Unique values in packed upper triangular order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Storage segment `i`, i.e. the entries `(i,i)..(i,n-1)`
    pub fn segment(&self, i: usize) -> &[T] {
        assert!(i < self.n);
        let start = segment_start(self.n, i);
        &self.data[start..start + (self.n - i)]
    }

    /// Mutable access to storage segment `i`
    pub fn segment_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.n);
        let start = segment_start(self.n, i);
        &mut self.data[start..start + (self.n - i)]
    }

    /// Approximate memory footprint in bytes, including the
    /// container itself and its allocated buffer
    pub fn total_storage_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }

    pub fn describe(&self) -> String {
        format!(
            "Representation of an {n}x{n} array where array[i,j] = array[j,i] with {u} unique values.",
            n = self.n,
            u = self.unique
        )
    }
}

impl<T> ShapedMatrix for SymmetricArray2<T> {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
}

impl<T> AddAssign<T> for SymmetricArray2<T>
where
    T: Element,
{
    fn add_assign(&mut self, value: T) {
        self.add_constant(value);
    }
}

// tuple indexing panics on invalid coordinates, as for Matrix

impl<T> Index<(usize, usize)> for SymmetricArray2<T>
where
    T: Element,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        match self.slot(&[idx.0, idx.1]) {
            Ok(slot) => &self.data[slot],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for SymmetricArray2<T>
where
    T: Element,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        match self.slot(&[idx.0, idx.1]) {
            Ok(slot) => &mut self.data[slot],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::fmt::Display for SymmetricArray2<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl<T> std::fmt::Debug for SymmetricArray2<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
