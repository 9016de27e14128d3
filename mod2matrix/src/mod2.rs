use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// An element of the 2-element field GF(2)
///
/// Addition is XOR and multiplication is AND. Since -1 = 1 mod 2, subtraction and negation
/// are the same as addition and the identity respectively, but they are kept as separate
/// operators so algebra written on top of `Mod2` reads the way it would over any other field.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mod2(u8);

impl Mod2 {
    pub const ZERO: Mod2 = Mod2(0);
    pub const ONE: Mod2 = Mod2(1);

    /// Reduces `raw` mod 2. Negative inputs are reduced with the Euclidean remainder, so
    /// `Mod2::new(-1) == Mod2::ONE`.
    #[inline]
    pub fn new(raw: i64) -> Self {
        Mod2(raw.rem_euclid(2) as u8)
    }

    /// Returns the stored value, which is always 0 or 1
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<bool> for Mod2 {
    #[inline]
    fn from(b: bool) -> Self {
        Mod2(b as u8)
    }
}

impl From<Mod2> for bool {
    #[inline]
    fn from(x: Mod2) -> Self {
        x.0 == 1
    }
}

impl From<Mod2> for u8 {
    #[inline]
    fn from(x: Mod2) -> Self {
        x.0
    }
}

impl Add for Mod2 {
    type Output = Mod2;

    #[inline]
    fn add(self, rhs: Mod2) -> Self::Output {
        Mod2(self.0 ^ rhs.0)
    }
}

impl Sub for Mod2 {
    type Output = Mod2;

    #[inline]
    fn sub(self, rhs: Mod2) -> Self::Output {
        self + rhs
    }
}

impl Mul for Mod2 {
    type Output = Mod2;

    #[inline]
    fn mul(self, rhs: Mod2) -> Self::Output {
        Mod2(self.0 & rhs.0)
    }
}

impl Neg for Mod2 {
    type Output = Mod2;

    #[inline]
    fn neg(self) -> Self::Output {
        self
    }
}

impl AddAssign for Mod2 {
    #[inline]
    fn add_assign(&mut self, rhs: Mod2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mod2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Mod2) {
        *self = *self - rhs;
    }
}

impl MulAssign for Mod2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mod2) {
        *self = *self * rhs;
    }
}

impl fmt::Display for Mod2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Mod2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reduction() {
        assert_eq!(Mod2::new(0), Mod2::ZERO);
        assert_eq!(Mod2::new(1), Mod2::ONE);
        assert_eq!(Mod2::new(2), Mod2::ZERO);
        assert_eq!(Mod2::new(7), Mod2::ONE);
        assert_eq!(Mod2::new(-1), Mod2::ONE);
        assert_eq!(Mod2::new(-4), Mod2::ZERO);
        assert_eq!(Mod2::new(i64::MIN).value(), 0);
        assert_eq!(Mod2::new(i64::MAX).value(), 1);
    }

    #[test]
    fn field_tables() {
        for a in 0..2u8 {
            for b in 0..2u8 {
                let x = Mod2::new(a as i64);
                let y = Mod2::new(b as i64);
                assert_eq!((x + y).value(), a ^ b, "{a} + {b}");
                assert_eq!((x * y).value(), a & b, "{a} * {b}");
                assert_eq!(x - y, x + y, "{a} - {b}");
            }
        }
    }

    #[test]
    fn negation_is_identity() {
        assert_eq!(-Mod2::ZERO, Mod2::ZERO);
        assert_eq!(-Mod2::ONE, Mod2::ONE);
        assert_eq!(Mod2::ONE + -Mod2::ONE, Mod2::ZERO);
    }

    #[test]
    fn assign_ops() {
        let mut x = Mod2::ONE;
        x += Mod2::ONE;
        assert!(x.is_zero());
        x -= Mod2::ONE;
        assert_eq!(x, Mod2::ONE);
        x *= Mod2::ZERO;
        assert!(x.is_zero());
    }

    #[test]
    fn conversions() {
        assert_eq!(Mod2::from(true), Mod2::ONE);
        assert_eq!(Mod2::from(false), Mod2::ZERO);
        assert!(bool::from(Mod2::ONE));
        assert_eq!(u8::from(Mod2::new(3)), 1);
        assert_eq!(Mod2::default(), Mod2::ZERO);
        assert_eq!(format!("{} {}", Mod2::ZERO, Mod2::ONE), "0 1");
    }
}
