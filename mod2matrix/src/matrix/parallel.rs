use super::strassen::{assemble, multiply_recursive, product_factors};
use super::SquareMatrix;
use crate::error::Result;

use tracing::trace_span;

/// Tuning for [`ParallelMatrixOps::par_strassen`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrassenConfig {
    /// sub-products of order below this are computed sequentially on the current thread
    pub parallel_cutoff: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        StrassenConfig {
            parallel_cutoff: 64,
        }
    }
}

impl StrassenConfig {
    pub fn new(parallel_cutoff: usize) -> Self {
        StrassenConfig { parallel_cutoff }
    }

    /// Strassen multiplication that hands the seven sub-products of each level to rayon
    ///
    /// Accepts and rejects exactly the same operands as [`SquareMatrix::strassen`] and returns
    /// the same product.
    pub fn par_strassen(&self, lhs: &SquareMatrix, rhs: &SquareMatrix) -> Result<SquareMatrix> {
        let _span = trace_span!(
            "par_strassen",
            order = lhs.order,
            cutoff = self.parallel_cutoff
        )
        .entered();
        lhs.check_strassen_operands(rhs)?;
        Ok(self.multiply(lhs, rhs))
    }

    fn multiply(&self, a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
        if a.order < self.parallel_cutoff.max(2) {
            return multiply_recursive(a, b);
        }

        let [f0, f1, f2, f3, f4, f5, f6] = product_factors(a.split(), b.split());
        let mul = |(x, y): &(SquareMatrix, SquareMatrix)| self.multiply(x, y);

        // all seven products are joined before assembly
        let ((p0, p1), ((p2, p3), (p4, (p5, p6)))) = rayon::join(
            || rayon::join(|| mul(&f0), || mul(&f1)),
            || {
                rayon::join(
                    || rayon::join(|| mul(&f2), || mul(&f3)),
                    || rayon::join(|| mul(&f4), || rayon::join(|| mul(&f5), || mul(&f6))),
                )
            },
        );

        assemble([p0, p1, p2, p3, p4, p5, p6])
    }
}

pub trait ParallelMatrixOps: Sized {
    fn par_strassen(&self, rhs: &Self) -> Result<Self>;
}

impl ParallelMatrixOps for SquareMatrix {
    /// [`StrassenConfig::par_strassen`] with the default configuration
    fn par_strassen(&self, rhs: &Self) -> Result<Self> {
        StrassenConfig::default().par_strassen(self, rhs)
    }
}
