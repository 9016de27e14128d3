use super::{Quadrants, SquareMatrix};
use crate::error::{MatrixError, Result};
use tracing::{debug, trace_span};

impl SquareMatrix {
    /// Multiplies two matrices with Strassen's recursive algorithm
    ///
    /// Each level splits both operands into quadrants and replaces the eight quadrant products of
    /// the schoolbook method with seven, giving `O(n^log2(7))` scalar operations. The result is
    /// always equal to [`SquareMatrix::try_mul`].
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::SizeMismatch`] if the orders differ and
    /// [`MatrixError::NotPowerOfTwo`] if the common order is not a power of two.
    pub fn strassen(&self, rhs: &SquareMatrix) -> Result<SquareMatrix> {
        let _span = trace_span!("strassen", order = self.order).entered();
        self.check_strassen_operands(rhs)?;
        Ok(multiply_recursive(self, rhs))
    }

    pub(crate) fn check_strassen_operands(&self, rhs: &SquareMatrix) -> Result<()> {
        self.check_same_order(rhs)?;
        if !self.order.is_power_of_two() {
            debug!(order = self.order, "rejecting Strassen operands");
            return Err(MatrixError::NotPowerOfTwo(self.order));
        }
        Ok(())
    }
}

/// Strassen recursion on operands already known to share a power-of-two order
pub(crate) fn multiply_recursive(a: &SquareMatrix, b: &SquareMatrix) -> SquareMatrix {
    if a.order == 1 {
        return a.naive_product(b);
    }
    let factors = product_factors(a.split(), b.split());
    assemble(factors.map(|(x, y)| multiply_recursive(&x, &y)))
}

/// Forms the operands of the seven half-size products from the quadrants of `a` and `b`
///
/// Entry `k` of the result is the pair whose product is `p_k`.
pub(crate) fn product_factors(a: Quadrants, b: Quadrants) -> [(SquareMatrix, SquareMatrix); 7] {
    let s0 = &b.top_right - &b.bottom_right;
    let s1 = &a.top_left + &a.top_right;
    let s2 = &a.bottom_left + &a.bottom_right;
    let s3 = &b.bottom_left - &b.top_left;
    let s4 = &a.top_left + &a.bottom_right;
    let s5 = &b.top_left + &b.bottom_right;
    let s6 = &a.top_right - &a.bottom_right;
    let s7 = &b.bottom_left + &b.bottom_right;
    let s8 = &a.top_left - &a.bottom_left;
    let s9 = &b.top_left + &b.top_right;

    [
        (a.top_left, s0),
        (s1, b.bottom_right),
        (s2, b.top_left),
        (a.bottom_right, s3),
        (s4, s5),
        (s6, s7),
        (s8, s9),
    ]
}

/// Combines the seven products into the quadrants of the result and glues them together
pub(crate) fn assemble(products: [SquareMatrix; 7]) -> SquareMatrix {
    let [p0, p1, p2, p3, p4, p5, p6] = products;
    Quadrants {
        top_left: &p4 + &p3 - &p1 + &p5,
        top_right: &p0 + &p1,
        bottom_left: &p2 + &p3,
        bottom_right: &p4 + &p0 - &p2 - &p6,
    }
    .join()
}
