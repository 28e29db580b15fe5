//! Utility functions for dealing with bit vectors.

pub use bit_vec::BitVec;

/// Extensions to `BitVec`.
pub trait BitVecExt: Sized {
  /// Parses a string of `0` and `1` characters, the first character becoming
  /// the bit at index 0.
  ///
  /// Returns `None` if any other character is present.
  ///
  /// # Example
  ///
  /// ```
  /// # use huffarc::bit::{BitVec, BitVecExt};
  /// let b = BitVec::from_bit_str("1101").unwrap();
  /// assert_eq!(b.to_bytes(), &[0b1101_0000]);
  /// ```
  fn from_bit_str(s: &str) -> Option<Self>;

  /// Renders the bits as a string of `0` and `1` characters.
  ///
  /// This is the inverse operation of [`from_bit_str`].
  ///
  /// [`from_bit_str`]: BitVecExt::from_bit_str
  fn to_bit_string(&self) -> String;

  /// Unpacks the first `len` bits of `bytes`, most significant bit first.
  ///
  /// Returns `None` if `bytes` holds fewer than `len` bits.
  fn from_packed(bytes: &[u8], len: usize) -> Option<Self>;
}

impl BitVecExt for BitVec {
  fn from_bit_str(s: &str) -> Option<Self> {
    s.chars()
      .map(|c| match c {
        '0' => Some(false),
        '1' => Some(true),
        _ => None,
      })
      .collect()
  }

  fn to_bit_string(&self) -> String {
    self.iter().map(|b| if b { '1' } else { '0' }).collect()
  }

  fn from_packed(bytes: &[u8], len: usize) -> Option<Self> {
    if bytes.len().checked_mul(8)? < len {
      return None;
    }
    let mut bits = BitVec::from_bytes(bytes);
    bits.truncate(len);
    Some(bits)
  }
}

/// Serde adapter which writes a `BitVec` as a string of `0` and `1`
/// characters.
///
/// Use with `#[serde(with = "crate::bit::bit_string")]`.
pub mod bit_string {
  use super::{BitVec, BitVecExt};
  use serde::de::{self, Deserialize, Deserializer};
  use serde::Serializer;

  pub fn serialize<S>(bits: &BitVec, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&bits.to_bit_string())
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec, D::Error>
  where
    D: Deserializer<'de>,
  {
    let s = String::deserialize(deserializer)?;
    BitVec::from_bit_str(&s)
      .ok_or_else(|| de::Error::custom("expected a string of 0 and 1 digits"))
  }
}
