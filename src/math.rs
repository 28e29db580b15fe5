//! Math utilities.

use num_traits::{PrimInt, Unsigned};

/// Unsigned integer division rounding away from zero.
pub fn div_ceil<I: PrimInt + Unsigned>(lhs: I, rhs: I) -> I {
  let x = lhs / rhs;
  if lhs % rhs != I::zero() {
    x + I::one()
  } else {
    x
  }
}

/// The number of bytes needed to hold `bits` bits.
pub fn packed_len(bits: usize) -> usize {
  div_ceil(bits, 8)
}
