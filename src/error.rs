//! Error types shared by the compression engine.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Result type returned by the engine.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Errors raised while building trees or encoding and decoding streams.
///
/// None of these are recoverable for the call that raised them; no partial
/// output is ever returned alongside an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HuffmanError {
  /// The input text has zero length.
  EmptyInput,

  /// Fewer than two distinct symbols are present, so no tree with the
  /// required two leaves can be formed.
  InsufficientAlphabet { distinct: usize },

  /// A symbol was asked to be encoded which has no leaf in the tree.
  UnknownSymbol(u8),

  /// A bit or leaf stream does not describe a well formed tree or message.
  MalformedStream(Malformed),
}

/// The specific way in which a stream was malformed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Malformed {
  /// Message bits ran out part way through a code.
  TruncatedCode,

  /// Structural bits ran out before every internal node had two children.
  TruncatedTree,

  /// A leaf marker had no leaf symbol left to consume.
  MissingLeaf,

  /// Structural bits remained after the tree was complete.
  TrailingBits(usize),

  /// Leaf symbols remained after the tree was complete.
  TrailingLeaves(usize),

  /// The tree consists of a single leaf.
  SingleLeaf,

  /// The same symbol appears on more than one leaf.
  DuplicateLeaf(u8),
}

impl Display for HuffmanError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    use HuffmanError::*;
    match self {
      EmptyInput => write!(f, "cannot build a tree from empty input"),
      InsufficientAlphabet { distinct } => write!(
        f,
        "at least two distinct symbols are required, found {}",
        distinct
      ),
      UnknownSymbol(symbol) => {
        write!(f, "symbol {:#04x} has no code in this tree", symbol)
      }
      MalformedStream(reason) => write!(f, "malformed stream: {}", reason),
    }
  }
}

impl Display for Malformed {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    use Malformed::*;
    match self {
      TruncatedCode => write!(f, "message ends in the middle of a code"),
      TruncatedTree => write!(f, "tree bits end before the tree is complete"),
      MissingLeaf => write!(f, "ran out of leaf symbols"),
      TrailingBits(n) => write!(f, "{} unused tree bits", n),
      TrailingLeaves(n) => write!(f, "{} unused leaf symbols", n),
      SingleLeaf => write!(f, "tree has only one leaf"),
      DuplicateLeaf(symbol) => {
        write!(f, "symbol {:#04x} appears on more than one leaf", symbol)
      }
    }
  }
}

impl Error for HuffmanError {}

impl From<Malformed> for HuffmanError {
  fn from(reason: Malformed) -> Self {
    HuffmanError::MalformedStream(reason)
  }
}
