#[cfg(feature = "parallel")]
pub mod parallel;
mod quadrants;
mod strassen;

pub use quadrants::Quadrants;

use crate::error::{MatrixError, Result};
use crate::mod2::Mod2;
use rand::Rng;
use ref_cast::RefCast;
use std::{
    fmt,
    ops::{Add, Index, Mul, Sub},
};
use tracing::debug;

/// A square matrix over GF(2)
///
/// The matrix is stored in row-major order as a single vector of `order * order` [`Mod2`]s. A
/// `SquareMatrix` is never mutated once it has been returned from a constructor: every arithmetic
/// operation builds a fresh result and leaves its operands alone.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix {
    /// the number of rows, which is also the number of columns
    order: usize,

    /// the entries of the matrix, stored row after row
    data: Vec<Mod2>,
}

/// A single row of a [`SquareMatrix`], borrowed from the matrix's storage
#[derive(RefCast, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Row([Mod2]);

impl Row {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, j: usize) -> Mod2 {
        self.0[j]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Mod2> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Mod2] {
        &self.0
    }

    /// Returns the raw 0/1 values of the row
    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().map(Mod2::value).collect()
    }
}

impl Index<usize> for Row {
    type Output = Mod2;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl SquareMatrix {
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Mod2 {
        self.data[self.order * i + j]
    }

    /// Assigns a single entry while a matrix is still being built
    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, x: Mod2) {
        self.data[self.order * i + j] = x;
    }

    /// Builds a `SquareMatrix` from a function `f` that determines the value of each entry
    ///
    /// # Panics
    ///
    /// Panics if `order` is 0.
    pub fn build(order: usize, mut f: impl FnMut(usize, usize) -> Mod2) -> Self {
        assert!(order >= 1, "A square matrix must have order at least 1");
        let data = (0..order)
            .flat_map(|i| (0..order).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        SquareMatrix { order, data }
    }

    /// Creates the `order`x`order` zero matrix
    ///
    /// # Panics
    ///
    /// Panics if `order` is 0.
    pub fn zeros(order: usize) -> Self {
        assert!(order >= 1, "A square matrix must have order at least 1");
        SquareMatrix {
            order,
            data: vec![Mod2::ZERO; order * order],
        }
    }

    pub fn identity(order: usize) -> Self {
        let mut m = SquareMatrix::zeros(order);
        for i in 0..order {
            m.set(i, i, Mod2::ONE);
        }
        m
    }

    #[inline]
    pub fn random(rng: &mut impl Rng, order: usize) -> Self {
        SquareMatrix::build(order, |_, _| Mod2::from(rng.random::<bool>()))
    }

    /// Creates a matrix from nested rows of integers, reducing each entry mod 2
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::Empty`] if no rows are given, and [`MatrixError::NotSquare`] if
    /// some row does not have exactly as many entries as there are rows.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        let order = rows.len();
        if order == 0 {
            debug!("rejecting empty row list");
            return Err(MatrixError::Empty);
        }

        if let Some((row, len)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, len)| len != order)
        {
            debug!(row, len, order, "rejecting non-square row list");
            return Err(MatrixError::NotSquare { row, len, order });
        }

        let data = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().map(|&x| Mod2::new(x)))
            .collect();
        Ok(SquareMatrix { order, data })
    }

    /// Returns the raw 0/1 values of the matrix, one vector per row
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(Row::to_vec).collect()
    }

    /// The number of rows (equivalently, columns) of the matrix
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn row(&self, i: usize) -> &Row {
        Row::ref_cast(&self.data[i * self.order..(i + 1) * self.order])
    }

    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.data.chunks_exact(self.order).map(Row::ref_cast)
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|x| x.is_zero())
    }

    /// Fails with [`MatrixError::SizeMismatch`] unless `self` and `rhs` have the same order
    fn check_same_order(&self, rhs: &SquareMatrix) -> Result<()> {
        if self.order != rhs.order {
            debug!(
                left = self.order,
                right = rhs.order,
                "rejecting operands of different orders"
            );
            return Err(MatrixError::SizeMismatch {
                left: self.order,
                right: rhs.order,
            });
        }
        Ok(())
    }

    /// Entrywise sum, assuming both matrices have the same order
    fn sum(&self, rhs: &SquareMatrix) -> SquareMatrix {
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        SquareMatrix {
            order: self.order,
            data,
        }
    }

    /// Cubic-time product, assuming both matrices have the same order
    fn naive_product(&self, rhs: &SquareMatrix) -> SquareMatrix {
        let n = self.order;
        let mut res = SquareMatrix::zeros(n);
        for i in 0..n {
            let row = self.row(i);
            for j in 0..n {
                let mut acc = Mod2::ZERO;
                for k in 0..n {
                    acc += row[k] * rhs[(k, j)];
                }
                res.set(i, j, acc);
            }
        }
        res
    }

    /// Adds two matrices of the same order
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ.
    pub fn try_add(&self, rhs: &SquareMatrix) -> Result<SquareMatrix> {
        self.check_same_order(rhs)?;
        Ok(self.sum(rhs))
    }

    /// Subtracts `rhs` from `self`. Over GF(2) this always agrees with [`SquareMatrix::try_add`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ.
    pub fn try_sub(&self, rhs: &SquareMatrix) -> Result<SquareMatrix> {
        self.try_add(rhs)
    }

    /// Multiplies two matrices of the same order with the schoolbook `O(n^3)` algorithm
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ.
    pub fn try_mul(&self, rhs: &SquareMatrix) -> Result<SquareMatrix> {
        self.check_same_order(rhs)?;
        Ok(self.naive_product(rhs))
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = Mod2;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.order * index.0 + index.1]
    }
}

/// `matrix[i]` borrows the `i`-th row
impl Index<usize> for SquareMatrix {
    type Output = Row;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.row(index)
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", x)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SquareMatrix")
            .field("order", &self.order)
            .field(
                "rows",
                &self.rows().map(Row::as_slice).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Add for &SquareMatrix {
    type Output = SquareMatrix;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
            .unwrap_or_else(|e| panic!("Attempting to add matrices: {}", e))
    }
}

impl Add<&SquareMatrix> for SquareMatrix {
    type Output = SquareMatrix;
    fn add(self, rhs: &SquareMatrix) -> Self::Output {
        &self + rhs
    }
}

impl Sub for &SquareMatrix {
    type Output = SquareMatrix;
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
            .unwrap_or_else(|e| panic!("Attempting to subtract matrices: {}", e))
    }
}

impl Sub<&SquareMatrix> for SquareMatrix {
    type Output = SquareMatrix;
    fn sub(self, rhs: &SquareMatrix) -> Self::Output {
        &self - rhs
    }
}

impl Mul for &SquareMatrix {
    type Output = SquareMatrix;
    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
            .unwrap_or_else(|e| panic!("Attempting to multiply matrices: {}", e))
    }
}
