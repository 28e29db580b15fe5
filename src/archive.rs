//! Self-contained compressed archives.
//!
//! An archive carries everything needed to restore a text: the shape of the
//! Huffman tree used to encode it, the tree's leaf symbols and the encoded
//! message itself.

use crate::bit::{self, BitVec};
use crate::error::Result;
use crate::shape::{decode_tree, encode_tree};
use crate::text::{decode_text, encode_text};
use crate::tree::build_tree;
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod test;

/// The result of compressing a text.
///
/// The three sequences are only meaningful together, as produced by a single
/// call to [`compress`].
///
/// [`compress`]: fn.compress.html
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Archive {
  /// Pre-order structure of the tree; 0 marks a leaf and 1 an internal node.
  #[serde(with = "bit::bit_string")]
  pub tree_bits: BitVec,

  /// Leaf symbols in the order their markers appear in `tree_bits`.
  pub tree_leaves: Vec<u8>,

  /// The concatenated codes of the text's symbols.
  #[serde(with = "bit::bit_string")]
  pub message_bits: BitVec,
}

impl Archive {
  /// The number of bits of payload held by this archive, counting each leaf
  /// symbol as 8 bits.
  pub fn total_bits(&self) -> usize {
    self.tree_bits.len() + self.tree_leaves.len() * 8 + self.message_bits.len()
  }
}

/// Compresses `text` into an archive.
///
/// # Errors
///
/// Returns `EmptyInput` if `text` is empty and `InsufficientAlphabet` if it
/// has fewer than two distinct symbols.
pub fn compress(text: &[u8]) -> Result<Archive> {
  let tree = build_tree(text)?;
  let (tree_bits, tree_leaves) = encode_tree(&tree);
  let message_bits = encode_text(text, &tree)?;

  let archive = Archive {
    tree_bits,
    tree_leaves,
    message_bits,
  };
  debug!(
    "compressed {} bytes into {} bits ({} tree, {} message)",
    text.len(),
    archive.total_bits(),
    archive.tree_bits.len() + archive.tree_leaves.len() * 8,
    archive.message_bits.len()
  );
  Ok(archive)
}

/// Restores the text held by `archive`.
///
/// # Errors
///
/// Returns `MalformedStream` if the archive does not hold a valid tree or if
/// its message does not decode cleanly against that tree.
pub fn decompress(archive: &Archive) -> Result<Vec<u8>> {
  let tree = decode_tree(&archive.tree_bits, &archive.tree_leaves)?;
  let text = decode_text(&archive.message_bits, &tree)?;
  debug!(
    "decompressed {} bits into {} bytes",
    archive.message_bits.len(),
    text.len()
  );
  Ok(text)
}
