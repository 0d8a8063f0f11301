//! Comparison on types with a strict less-than.

/// Types admitting a strict less-than comparison.
///
/// Implementors supply [`lt`](Lt::lt); the non-strict [`le`](Lt::le) is
/// derived from it. The derivation is only meaningful if `lt` is a strict
/// total order (antisymmetric and transitive); nothing verifies this.
pub trait Lt {
    /// Test whether `self` is strictly smaller than `rhs`.
    fn lt(&self, rhs: &Self) -> bool;

    /// Test whether `self` is smaller than or equal to `rhs`.
    ///
    /// Equivalent to `!rhs.lt(self)` under a total order.
    fn le(&self, rhs: &Self) -> bool {
        !rhs.lt(self)
    }
}

macro_rules! impl_lt {
    ($($t:ty)*) => {$(
        impl Lt for $t {
            fn lt(&self, rhs: &Self) -> bool {
                self < rhs
            }
        }
    )*};
}

impl_lt!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize char);
