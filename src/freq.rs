//! Symbol frequency analysis.

use crate::error::{HuffmanError, Result};
use std::collections::BTreeMap;

/// Occurrence counts for each distinct symbol of a text.
///
/// A `Frequencies` value always holds at least two distinct symbols with a
/// non-zero count, which is the minimum needed to form a Huffman tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frequencies {
  counts: BTreeMap<u8, u64>,
}

impl Frequencies {
  /// Counts the symbols of `text`.
  ///
  /// # Errors
  ///
  /// Returns `EmptyInput` if `text` is empty and `InsufficientAlphabet` if it
  /// contains fewer than two distinct symbols.
  pub fn analyze(text: &[u8]) -> Result<Self> {
    if text.is_empty() {
      return Err(HuffmanError::EmptyInput);
    }

    let mut counts = BTreeMap::new();
    for &symbol in text {
      *counts.entry(symbol).or_insert(0) += 1;
    }
    Self::checked(counts)
  }

  /// Constructs frequencies from explicit `(symbol, count)` pairs.
  ///
  /// Repeated symbols have their counts summed, saturating at `u64::MAX`, and
  /// zero counts are dropped.
  pub fn from_counts<I>(pairs: I) -> Result<Self>
  where
    I: IntoIterator<Item = (u8, u64)>,
  {
    let mut counts = BTreeMap::new();
    for (symbol, count) in pairs.into_iter().filter(|&(_, c)| c != 0) {
      let total = counts.entry(symbol).or_insert(0u64);
      *total = total.saturating_add(count);
    }
    Self::checked(counts)
  }

  fn checked(counts: BTreeMap<u8, u64>) -> Result<Self> {
    if counts.len() < 2 {
      return Err(HuffmanError::InsufficientAlphabet {
        distinct: counts.len(),
      });
    }
    Ok(Frequencies { counts })
  }

  /// The number of distinct symbols.
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  /// True if there are no symbols, which never holds for a constructed value.
  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// The count for `symbol`, zero if it never occurs.
  pub fn get(&self, symbol: u8) -> u64 {
    self.counts.get(&symbol).copied().unwrap_or(0)
  }

  /// The sum of all counts, i.e. the length of the analyzed text. Saturates
  /// at `u64::MAX`.
  pub fn total(&self) -> u64 {
    self.counts.values().fold(0, |acc, &c| acc.saturating_add(c))
  }

  /// Iterates over `(symbol, count)` pairs in ascending symbol order.
  pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
    self.counts.iter().map(|(&s, &c)| (s, c))
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn analyze_counts_each_symbol() -> Result<()> {
    let f = Frequencies::analyze(b"AABBBCCCCDDDDDDDDDD")?;
    assert_eq!(4, f.len());
    assert_eq!(2, f.get(b'A'));
    assert_eq!(3, f.get(b'B'));
    assert_eq!(4, f.get(b'C'));
    assert_eq!(10, f.get(b'D'));
    assert_eq!(0, f.get(b'E'));
    assert_eq!(19, f.total());
    Ok(())
  }

  #[test]
  fn analyze_empty_input() {
    assert_eq!(Err(HuffmanError::EmptyInput), Frequencies::analyze(b""));
  }

  #[test]
  fn analyze_single_symbol() {
    let expected = Err(HuffmanError::InsufficientAlphabet { distinct: 1 });
    assert_eq!(expected, Frequencies::analyze(b"A"));
    assert_eq!(expected, Frequencies::analyze(b"AAAA"));
  }

  #[test]
  fn iteration_is_in_symbol_order() -> Result<()> {
    let f = Frequencies::analyze(b"zzya")?;
    let pairs: Vec<_> = f.iter().collect();
    assert_eq!(vec![(b'a', 1), (b'y', 1), (b'z', 2)], pairs);
    Ok(())
  }

  #[test]
  fn from_counts_merges_and_drops_zeros() -> Result<()> {
    let f = Frequencies::from_counts(vec![(b'a', 2), (b'b', 0), (b'a', 3), (b'c', 1)])?;
    assert_eq!(2, f.len());
    assert_eq!(5, f.get(b'a'));
    assert_eq!(0, f.get(b'b'));
    Ok(())
  }

  #[test]
  fn from_counts_saturates_large_counts() -> Result<()> {
    let f = Frequencies::from_counts(vec![(b'a', u64::MAX), (b'a', 1), (b'b', 1)])?;
    assert_eq!(u64::MAX, f.get(b'a'));
    assert_eq!(1, f.get(b'b'));
    assert_eq!(u64::MAX, f.total());
    Ok(())
  }

  #[test]
  fn from_counts_requires_two_symbols() {
    let result = Frequencies::from_counts(vec![(b'a', 2), (b'b', 0)]);
    assert_eq!(
      Err(HuffmanError::InsufficientAlphabet { distinct: 1 }),
      result
    );
  }
}
