use super::Matrix2;
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<T: Default + Copy> Transpose for Matrix2<T> {
    fn transpose(&self) -> Self {
        let mut transposed = Matrix2::new(self.cols(), self.rows());

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                transposed[(col, row)] = self[(row, col)];
            }
        }
        transposed
    }
}

impl<'a, T> Dot<&Matrix2<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &Matrix2<T>) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionMismatch {
                lhs: self.dim,
                rhs: rhs.dim,
            });
        }

        let mut data = Vec::with_capacity(self.rows() * rhs.cols());

        for lhs_row in 0..self.rows() {
            for rhs_col in 0..rhs.cols() {
                let mut sum = T::default();
                for n in 0..self.cols() {
                    sum += self[(lhs_row, n)] * rhs[(n, rhs_col)]
                }
                data.push(sum);
            }
        }

        Ok(Matrix2 {
            data,
            dim: (self.rows(), rhs.cols()),
        })
    }
}

impl<T: Copy> Matrix2<T> {
    fn zip_with<F: Fn(T, T) -> T>(&self, rhs: &Matrix2<T>, f: F) -> Result<Matrix2<T>> {
        if self.dim != rhs.dim {
            return Err(Error::DimensionMismatch {
                lhs: self.dim,
                rhs: rhs.dim,
            });
        }

        Ok(Matrix2 {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
            dim: self.dim,
        })
    }
}

/// Adds two Matrix2s element-wise.
impl<'a, T> Add for &'a Matrix2<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

/// Subs two Matrix2s element-wise.
impl<'a, T> Sub for &'a Matrix2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Result<Matrix2<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T> Matrix2<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Element-wise (Hadamard) product.
    pub fn hadamard(&self, rhs: &Matrix2<T>) -> Result<Matrix2<T>> {
        self.zip_with(rhs, |a, b| a * b)
    }

    /// Multiplies every element by `k`.
    pub fn scale(&self, k: T) -> Matrix2<T> {
        Matrix2 {
            data: self.data.iter().map(|&x| x * k).collect(),
            dim: self.dim,
        }
    }
}

impl<T> Matrix2<T>
where
    T: Add<Output = T> + Copy,
{
    /// Adds a 1 x cols row vector to every row of the matrix.
    pub fn broadcast_add_row(&self, row: &Matrix2<T>) -> Result<Matrix2<T>> {
        if row.rows() != 1 || row.cols() != self.cols() {
            return Err(Error::DimensionMismatch {
                lhs: self.dim,
                rhs: row.dim,
            });
        }

        let cols = self.cols();
        Ok(Matrix2 {
            data: self
                .data
                .iter()
                .enumerate()
                .map(|(i, &x)| x + row.data[i % cols])
                .collect(),
            dim: self.dim,
        })
    }
}

impl<T> Matrix2<T>
where
    T: AddAssign + Default + Copy,
{
    /// Sums along an axis, preserving the other dimension.
    /// Axis 0 sums down each column into a 1 x cols row,
    /// axis 1 sums across each row into a rows x 1 column.
    pub fn sum_along_axis(&self, axis: usize) -> Result<Matrix2<T>> {
        match axis {
            0 => {
                let mut sums = Matrix2::new(1, self.cols());
                for row in 0..self.rows() {
                    for col in 0..self.cols() {
                        sums[(0, col)] += self[(row, col)];
                    }
                }
                Ok(sums)
            }
            1 => {
                let mut sums = Matrix2::new(self.rows(), 1);
                for row in 0..self.rows() {
                    for col in 0..self.cols() {
                        sums[(row, 0)] += self[(row, col)];
                    }
                }
                Ok(sums)
            }
            _ => Err(Error::InvalidAxis(axis)),
        }
    }
}
