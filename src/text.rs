//! Encoding text into bits, and back, using a Huffman tree.

use crate::bit::BitVec;
use crate::error::{HuffmanError, Malformed, Result};
use crate::tree::{Node, Tree};
use std::collections::BTreeMap;

/// The code of every leaf symbol in a tree.
///
/// A symbol's code is the sequence of edge labels on the path from the root to
/// its leaf. Since every code ends at a leaf the set of codes is prefix-free.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CodeTable {
  codes: BTreeMap<u8, BitVec>,
}

impl CodeTable {
  /// Derives the code table for `tree`.
  pub fn new(tree: &Tree) -> Self {
    let mut codes = BTreeMap::new();
    let mut stack = vec![(tree.root(), BitVec::new())];
    while let Some((node, path)) = stack.pop() {
      match node {
        Node::Leaf(symbol) => {
          codes.insert(*symbol, path);
        }
        Node::Internal { zero, one } => {
          let mut one_path = path.clone();
          one_path.push(true);
          stack.push((one, one_path));

          let mut zero_path = path;
          zero_path.push(false);
          stack.push((zero, zero_path));
        }
      }
    }
    CodeTable { codes }
  }

  /// The code for `symbol`, or `None` if the tree has no leaf for it.
  pub fn get(&self, symbol: u8) -> Option<&BitVec> {
    self.codes.get(&symbol)
  }

  /// Iterates over `(symbol, code)` pairs in ascending symbol order.
  pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> + '_ {
    self.codes.iter().map(|(&s, code)| (s, code))
  }

  /// Like `get` but fails with `UnknownSymbol`.
  fn code(&self, symbol: u8) -> Result<&BitVec> {
    self.get(symbol).ok_or(HuffmanError::UnknownSymbol(symbol))
  }

  /// Appends the code of every symbol in `text` to a new bit vector.
  pub fn encode(&self, text: &[u8]) -> Result<BitVec> {
    let mut bits = BitVec::new();
    for &symbol in text {
      bits.extend(self.code(symbol)?.iter());
    }
    Ok(bits)
  }
}

/// A tree bundled with its code table so that many texts can be encoded
/// without rebuilding the table.
///
/// Codecs uphold the following for every `text` whose symbols all have a
/// leaf in the tree:
///
/// ```text
/// decode(encode(text)) == text
/// ```
#[derive(Clone, Debug)]
pub struct HuffmanCodec {
  tree: Tree,
  table: CodeTable,
}

impl HuffmanCodec {
  pub fn new(tree: Tree) -> Self {
    let table = CodeTable::new(&tree);
    HuffmanCodec { tree, table }
  }

  pub fn tree(&self) -> &Tree {
    &self.tree
  }

  pub fn table(&self) -> &CodeTable {
    &self.table
  }

  /// Encodes `text` by concatenating the code of each symbol in order.
  ///
  /// # Errors
  ///
  /// Returns `UnknownSymbol` for the first symbol without a leaf in the tree.
  pub fn encode(&self, text: &[u8]) -> Result<BitVec> {
    self.table.encode(text)
  }

  /// The number of bits `encode` would produce for `text`.
  pub fn encoded_len(&self, text: &[u8]) -> Result<usize> {
    text.iter().try_fold(0, |acc, &symbol| {
      Ok(acc + self.table.code(symbol)?.len())
    })
  }

  /// Decodes `bits` back into text.
  ///
  /// # Errors
  ///
  /// Returns `MalformedStream` if the bits end part way through a code.
  pub fn decode(&self, bits: &BitVec) -> Result<Vec<u8>> {
    decode_text(bits, &self.tree)
  }
}

/// Encodes `text` by appending the code of each of its symbols, in order.
///
/// # Errors
///
/// Returns `UnknownSymbol` if `tree` has no leaf for a symbol of `text`.
pub fn encode_text(text: &[u8], tree: &Tree) -> Result<BitVec> {
  CodeTable::new(tree).encode(text)
}

/// Decodes `bits` into text by walking `tree`.
///
/// Starting at the root, each bit selects the zero or one child until a leaf
/// is reached; its symbol is emitted and the walk restarts at the root.
///
/// # Errors
///
/// Returns `MalformedStream` if the bits end part way through a code.
pub fn decode_text(bits: &BitVec, tree: &Tree) -> Result<Vec<u8>> {
  let root = tree.root();
  let mut text = Vec::new();
  let mut node = root;
  for bit in bits.iter() {
    // Leaves are resolved as soon as they are reached and the root of a
    // `Tree` is internal, so `node` always has children here.
    node = match node.child(bit) {
      Some(child) => child,
      None => return Err(Malformed::TruncatedCode.into()),
    };
    if let Node::Leaf(symbol) = node {
      text.push(*symbol);
      node = root;
    }
  }

  if !std::ptr::eq(node, root) {
    return Err(Malformed::TruncatedCode.into());
  }
  Ok(text)
}
