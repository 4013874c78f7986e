#![allow(non_snake_case)]

use super::fill::{check_block, FillFunction, Zeros};
use super::index::{check_index, packed_len, segment_start, triu_slot};
use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Array of size `n x n x n` symmetric in its first two indices,
/// i.e. `A[i,j,k] = A[j,i,k]`, storing only its unique values.
///
/// Each unique pair `(i,j)` with `i <= j` owns a contiguous run of
/// `n` values indexed by the third coordinate `k`, for a total of
/// `n^2(n+1)/2` stored values.  Segment `i` is the row major
/// `(n - i) x n` block covering the pairs `(i,i)..(i,n-1)`.
///
/// ```
/// use symarray::symmetric::SymmetricArray3;
///
/// let mut A = SymmetricArray3::<f64>::new(10).unwrap();
/// A.set(&[1, 9, 2], 5.0).unwrap();
/// assert_eq!(A.get(&[9, 1, 2]).unwrap(), 5.0);
/// assert_eq!(A.len(), 550);
/// ```
#[derive(Clone, PartialEq)]
pub struct SymmetricArray3<T> {
    n: usize,
    unique: usize,
    data: Vec<T>,
}

impl<T> SymmetricArray3<T>
where
    T: Element,
{
    /// Zero filled `n x n x n` array
    pub fn new(n: usize) -> Result<Self, ConfigurationError> {
        Self::with_fill(n, Zeros, &())
    }

    /// Build an `n x n x n` array, requesting segment `i` from `fill`
    /// as an `(n - i) x n` matrix.  The `config` value is passed to
    /// every call of `fill` without interpretation.
    pub fn with_fill<F, C>(n: usize, mut fill: F, config: &C) -> Result<Self, ConfigurationError>
    where
        F: FillFunction<T, C>,
    {
        if n == 0 {
            return Err(ConfigurationError::ZeroDimension);
        }

        let unique = packed_len::<T>(n, n)?;
        let mut data = Vec::with_capacity(unique);

        for i in 0..n {
            let shape = SegmentShape::Matrix(n - i, n);
            let block = fill.fill(shape, config);
            check_block(&block, i, shape)?;
            data.extend_from_slice(block.as_slice());
        }
        debug_assert_eq!(data.len(), unique);

        tracing::debug!(n, unique, dtype = %T::DTYPE, "constructed symmetric 3-d array");
        Ok(Self { n, unique, data })
    }

    #[inline]
    fn slot(&self, idx: &[usize]) -> Result<usize, IndexError> {
        check_index(idx, 3, self.n)?;
        Ok(triu_slot(self.n, idx[0], idx[1]) * self.n + idx[2])
    }

    /// Value at `idx`, which must hold exactly three coordinates
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

    /// Value at `(i, j, k)`
    pub fn get3(&self, i: usize, j: usize, k: usize) -> Result<T, IndexError> {
        self.get(&[i, j, k])
    }

    /// Write `value` at `(i, j, k)`, shared with `(j, i, k)`
    pub fn set3(&mut self, i: usize, j: usize, k: usize, value: T) -> Result<(), IndexError> {
        self.set(&[i, j, k], value)
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

    /// Logical shape `(n, n, n)`
    pub fn size(&self) -> (usize, usize, usize) {
        (self.n, self.n, self.n)
    }

    /// Runtime tag of the element type `T`
    pub fn dtype(&self) -> ElementType {
        T::DTYPE
    }

    /// Unique values, segment by segment, each a row major block
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Storage segment `i` as a row major `(n - i) x n` block
    pub fn segment(&self, i: usize) -> &[T] {
        let (start, stop) = self.segment_range(i);
        &self.data[start..stop]
    }

    /// Mutable access to storage segment `i`
    pub fn segment_mut(&mut self, i: usize) -> &mut [T] {
        let (start, stop) = self.segment_range(i);
        &mut self.data[start..stop]
    }

    fn segment_range(&self, i: usize) -> (usize, usize) {
        assert!(i < self.n);
        let n = self.n;
        let start = segment_start(n, i) * n;
        (start, start + (n - i) * n)
    }

    /// Approximate memory footprint in bytes, including the
    /// container itself and its allocated buffer
    pub fn total_storage_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.data.capacity() * std::mem::size_of::<T>()
    }

    pub fn describe(&self) -> String {
        format!(
            "Representation of an {n}x{n}x{n} array where array[i,j,k] = array[j,i,k] with {u} unique values.",
            n = self.n,
            u = self.unique
        )
    }
}

impl<T> Index<(usize, usize, usize)> for SymmetricArray3<T>
where
    T: Element,
{
    type Output = T;
    fn index(&self, idx: (usize, usize, usize)) -> &Self::Output {
        match self.slot(&[idx.0, idx.1, idx.2]) {
            Ok(slot) => &self.data[slot],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize, usize)> for SymmetricArray3<T>
where
    T: Element,
{
    fn index_mut(&mut self, idx: (usize, usize, usize)) -> &mut Self::Output {
        match self.slot(&[idx.0, idx.1, idx.2]) {
            Ok(slot) => &mut self.data[slot],
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::fmt::Display for SymmetricArray3<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl<T> std::fmt::Debug for SymmetricArray3<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
