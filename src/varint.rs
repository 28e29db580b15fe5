//! Variable-width integers for archive headers.
//!
//! Values are split into 7-bit groups, least significant group first. Each
//! group is stored in the low 7 bits of a byte whose high bit is set when
//! another byte of the same value follows:
//!
//! ```text
//! 131 = 1000 0011
//!
//! 1000 0011   0000 0001
//! ^~~~ ~~~~           #
//! ```
//!
//! Small values, such as the lengths of short texts, take a single byte.

/// Appends the encoding of `value` to `out`.
pub fn write(mut value: u64, out: &mut Vec<u8>) {
  loop {
    let group = (value & 0x7f) as u8;
    value >>= 7;
    if value == 0 {
      out.push(group);
      return;
    }
    out.push(group | 0x80);
  }
}

/// Why a varint could not be read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReadError {
  /// The input ended while a continuation bit was set.
  Truncated,
  /// The value does not fit in 64 bits.
  Overflow,
}

/// Reads a value from the front of `input`, returning it along with the
/// number of bytes consumed.
pub fn read(input: &[u8]) -> Result<(u64, usize), ReadError> {
  let mut value = 0u64;
  for (i, &byte) in input.iter().enumerate() {
    let shift = 7 * i as u32;
    let group = u64::from(byte & 0x7f);
    if shift >= 64 || (group << shift) >> shift != group {
      return Err(ReadError::Overflow);
    }
    value |= group << shift;
    if byte & 0x80 == 0 {
      return Ok((value, i + 1));
    }
  }
  Err(ReadError::Truncated)
}

#[cfg(test)]
mod test {
  use super::*;
  use proptest::prelude::*;

  fn encoded(value: u64) -> Vec<u8> {
    let mut out = Vec::new();
    write(value, &mut out);
    out
  }

  #[test]
  fn zero_is_one_byte() {
    assert_eq!(vec![0], encoded(0));
  }

  #[test]
  fn no_high_bit() {
    assert_eq!(vec![0x7f], encoded(0x7f));
  }

  #[test]
  fn value_128() {
    assert_eq!(vec![0x80, 0x01], encoded(128));
  }

  #[test]
  fn value_131() {
    assert_eq!(vec![0x83, 0x01], encoded(131));
  }

  #[test]
  fn value_0x7081() {
    assert_eq!(vec![0x81, 0xe1, 0x01], encoded(0x7081));
  }

  #[test]
  fn u64_max_is_10_bytes() {
    let bytes = encoded(u64::MAX);
    assert_eq!(10, bytes.len());
    assert_eq!(Ok((u64::MAX, 10)), read(&bytes));
  }

  #[test]
  fn read_stops_at_last_group() {
    assert_eq!(Ok((131, 2)), read(&[0x83, 0x01, 0xff]));
  }

  #[test]
  fn read_truncated() {
    assert_eq!(Err(ReadError::Truncated), read(&[0x83]));
    assert_eq!(Err(ReadError::Truncated), read(&[]));
  }

  #[test]
  fn read_overflow() {
    let mut bytes = vec![0xff; 9];
    bytes.push(0x02);
    assert_eq!(Err(ReadError::Overflow), read(&bytes));
  }

  proptest! {
    #[test]
    fn prop_read_inverts_write(x: u64) {
      let bytes = encoded(x);
      prop_assert_eq!(Ok((x, bytes.len())), read(&bytes));
    }

    #[test]
    fn prop_last_byte_never_has_high_bit_set(x: u64) {
      let bytes = encoded(x);
      prop_assert!(bytes.last().unwrap() & 0x80 == 0);
    }
  }
}
