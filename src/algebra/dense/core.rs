#![allow(non_snake_case)]

use crate::algebra::{Element, Matrix, ShapedMatrix};
use std::ops::{Index, IndexMut};

impl<T> Matrix<T>
where
    T: Element,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    //convert row col coordinate to column major index
    #[inline]
    pub fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 + self.m * idx.1
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn is_symmetric(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for c in 0..self.ncols() {
            for r in (c + 1)..self.nrows() {
                if self[(r, c)] != self[(c, r)] {
                    return false;
                }
            }
        }
        true
    }
}

// construct from an array of rows, e.g. Matrix::from(&[[1., 2.], [3., 4.]])
impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: Element,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let mut A = Self::zeros((M, N));
        for (r, row) in rows.iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                A[(r, c)] = *v;
            }
        }
        A
    }
}

impl<T> Index<(usize, usize)> for Matrix<T>
where
    T: Element,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        &self.data[self.index_linear(idx)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T>
where
    T: Element,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n);
        let lidx = self.index_linear(idx);
        &mut self.data[lidx]
    }
}

impl<T> ShapedMatrix for Matrix<T>
where
    T: Element,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
