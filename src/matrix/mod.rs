use crate::prelude::*;
use std::ops::{Index, IndexMut};

pub mod ops;

/// Dense row-major matrix with a shape fixed at creation.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T: Clone> Matrix2<T> {
    /// Copies a row out of the matrix. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vec<T> {
        let start = row * self.cols();
        self.data[start..start + self.cols()].to_vec()
    }

    /// Copies a column out of the matrix. Panics if `col` is out of bounds.
    pub fn col(&self, col: usize) -> Vec<T> {
        (0..self.rows())
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Copies a row out as a 1 x cols matrix.
    pub fn clone_row(&self, row: usize) -> Matrix2<T> {
        Matrix2::from_row(self.row(row))
    }

    /// Builds a new matrix of the same shape by calling `f(row, col, value)` on every cell.
    pub fn map_indexed<F: Fn(usize, usize, T) -> T>(&self, f: F) -> Self {
        let cols = self.cols();
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, x)| f(i / cols, i % cols, x.clone()))
            .collect();

        Self {
            data,
            dim: self.dim,
        }
    }
}

impl<T: Default + Clone> Matrix2<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            dim: (rows, cols),
        }
    }
}

impl<T> Matrix2<T> {
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    /// Fills a rows x cols matrix with `f(row, col)`, visiting cells in row-major order.
    pub fn from_fn<F: FnMut(usize, usize) -> T>(rows: usize, cols: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(row, col));
            }
        }

        Self {
            data,
            dim: (rows, cols),
        }
    }

    /// Wraps row-major `data` as a rows x cols matrix.
    pub fn from_shape_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DimensionMismatch {
                lhs: (rows, cols),
                rhs: (1, data.len()),
            });
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// True when the matrix holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn from_row(row_vec: Vec<T>) -> Self {
        Self {
            dim: (1, row_vec.len()),
            data: row_vec,
        }
    }

    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionMismatch {
                    lhs: (1, cols),
                    rhs: (1, row.len()),
                });
            }

            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let (rows, cols) = self.dim;
        let mut res = Vec::with_capacity(rows);
        let mut values = self.data.into_iter();
        for _ in 0..rows {
            res.push(values.by_ref().take(cols).collect());
        }
        res
    }

    /// Iterates over every value in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Matrix2<T>
where
    T: Default,
{
    /// Applies a function to every element of the matrix
    pub fn apply<F: Fn(T) -> T>(&mut self, f: F) {
        for x in &mut self.data {
            let old = std::mem::take(x);
            *x = f(old);
        }
    }
}

impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}

impl From<Matrix2<i32>> for Matrix2<f64> {
    fn from(value: Matrix2<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(f64::from).collect(),
        }
    }
}
