use super::SquareMatrix;
use crate::error::{MatrixError, Result};
use tracing::debug;

/// The four equally sized blocks of a matrix split at its row and column midpoint
///
/// Each quadrant owns a fresh copy of its entries, so nothing is shared with the matrix it came
/// from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quadrants {
    /// rows `[0, n/2)`, columns `[0, n/2)`
    pub top_left: SquareMatrix,

    /// rows `[0, n/2)`, columns `[n/2, n)`
    pub top_right: SquareMatrix,

    /// rows `[n/2, n)`, columns `[0, n/2)`
    pub bottom_left: SquareMatrix,

    /// rows `[n/2, n)`, columns `[n/2, n)`
    pub bottom_right: SquareMatrix,
}

impl Quadrants {
    /// Glues the quadrants back into one matrix of twice their order
    ///
    /// Row `i < m` of the result is row `i` of `top_left` followed by row `i` of `top_right`,
    /// and row `m + i` is row `i` of `bottom_left` followed by row `i` of `bottom_right`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] unless all four quadrants have the same order.
    pub fn recompose(&self) -> Result<SquareMatrix> {
        let m = self.top_left.order();
        for q in [&self.top_right, &self.bottom_left, &self.bottom_right] {
            if q.order() != m {
                debug!(
                    left = m,
                    right = q.order(),
                    "rejecting quadrants of different orders"
                );
                return Err(MatrixError::SizeMismatch {
                    left: m,
                    right: q.order(),
                });
            }
        }
        Ok(self.join())
    }

    /// Order of each quadrant
    #[inline]
    pub fn order(&self) -> usize {
        self.top_left.order()
    }

    /// Recomposition without the order check
    pub(crate) fn join(&self) -> SquareMatrix {
        let m = self.order();
        let mut data = Vec::with_capacity(4 * m * m);
        for (left, right) in [
            (&self.top_left, &self.top_right),
            (&self.bottom_left, &self.bottom_right),
        ] {
            for i in 0..m {
                data.extend_from_slice(left.row(i).as_slice());
                data.extend_from_slice(right.row(i).as_slice());
            }
        }
        SquareMatrix {
            order: 2 * m,
            data,
        }
    }
}

impl SquareMatrix {
    /// Splits a matrix of even order into its four quadrants
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OddOrder`] if the order is odd. The order need not be a power of two.
    pub fn decompose(&self) -> Result<Quadrants> {
        if self.order % 2 != 0 {
            debug!(order = self.order, "rejecting decomposition of odd order");
            return Err(MatrixError::OddOrder(self.order));
        }
        Ok(self.split())
    }

    /// Inverse of [`SquareMatrix::decompose`]; see [`Quadrants::recompose`]
    pub fn from_quadrants(
        top_left: SquareMatrix,
        top_right: SquareMatrix,
        bottom_left: SquareMatrix,
        bottom_right: SquareMatrix,
    ) -> Result<SquareMatrix> {
        Quadrants {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
        .recompose()
    }

    /// Decomposition without the parity check
    pub(crate) fn split(&self) -> Quadrants {
        let h = self.order / 2;
        Quadrants {
            top_left: self.block(0, 0, h),
            top_right: self.block(0, h, h),
            bottom_left: self.block(h, 0, h),
            bottom_right: self.block(h, h, h),
        }
    }

    /// Copies the `size`x`size` block whose top-left corner is at `(row, col)`
    fn block(&self, row: usize, col: usize, size: usize) -> SquareMatrix {
        let mut data = Vec::with_capacity(size * size);
        for i in row..row + size {
            data.extend_from_slice(&self.row(i).as_slice()[col..col + size]);
        }
        SquareMatrix { order: size, data }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn decompose_4x4() {
        let m = SquareMatrix::from_rows(&[
            [1, 0, 0, 1],
            [0, 1, 1, 1],
            [0, 0, 1, 0],
            [1, 1, 0, 0],
        ])
        .unwrap();
        let q = m.decompose().unwrap();
        assert_eq!(q.order(), 2);
        assert_eq!(q.top_left.to_rows(), vec![vec![1, 0], vec![0, 1]]);
        assert_eq!(q.top_right.to_rows(), vec![vec![0, 1], vec![1, 1]]);
        assert_eq!(q.bottom_left.to_rows(), vec![vec![0, 0], vec![1, 1]]);
        assert_eq!(q.bottom_right.to_rows(), vec![vec![1, 0], vec![0, 0]]);
    }

    #[test]
    fn decompose_odd() {
        assert_eq!(
            SquareMatrix::zeros(3).decompose(),
            Err(MatrixError::OddOrder(3))
        );
        assert_eq!(
            SquareMatrix::zeros(1).decompose(),
            Err(MatrixError::OddOrder(1))
        );
    }

    #[test]
    fn decompose_even_non_power_of_two() {
        let mut rng = SmallRng::seed_from_u64(1);
        let m = SquareMatrix::random(&mut rng, 6);
        let q = m.decompose().unwrap();
        assert_eq!(q.order(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(q.top_left[(i, j)], m[(i, j)]);
                assert_eq!(q.top_right[(i, j)], m[(i, j + 3)]);
                assert_eq!(q.bottom_left[(i, j)], m[(i + 3, j)]);
                assert_eq!(q.bottom_right[(i, j)], m[(i + 3, j + 3)]);
            }
        }
    }

    #[test]
    fn round_trip() {
        let mut rng = SmallRng::seed_from_u64(1);
        for order in [2, 4, 10, 32] {
            let m = SquareMatrix::random(&mut rng, order);
            assert_eq!(m.decompose().unwrap().recompose().unwrap(), m);
        }
    }

    #[test]
    fn recompose_mismatch() {
        let r = SquareMatrix::from_quadrants(
            SquareMatrix::zeros(2),
            SquareMatrix::zeros(2),
            SquareMatrix::zeros(3),
            SquareMatrix::zeros(2),
        );
        assert_eq!(r, Err(MatrixError::SizeMismatch { left: 2, right: 3 }));
    }

    #[test]
    fn recompose_identity() {
        let id = SquareMatrix::identity(3);
        let z = SquareMatrix::zeros(3);
        let m = SquareMatrix::from_quadrants(id.clone(), z.clone(), z, id).unwrap();
        assert_eq!(m, SquareMatrix::identity(6));
    }
}
