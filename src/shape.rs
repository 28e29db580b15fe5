//! Serialization of a tree's shape and leaf symbols.
//!
//! A tree is written as a pre-order sequence of markers, one bit per node: a
//! 0 marks a leaf, whose symbol is appended to a separate leaf sequence, and a
//! 1 marks an internal node, which is followed by its zero subtree and then
//! its one subtree. For example:
//!
//! ```text
//!       *
//!      / \          bits:   1 1 0 0 0
//!     *   C         leaves:     A B C
//!    / \
//!   A   B
//! ```

use crate::bit::BitVec;
use crate::error::{Malformed, Result};
use crate::tree::{Node, Tree};

/// Encodes the shape of `tree` as structural bits along with its leaf
/// symbols in the order they are encountered.
pub fn encode_tree(tree: &Tree) -> (BitVec, Vec<u8>) {
  let mut bits = BitVec::new();
  let mut leaves = Vec::new();

  let mut stack = vec![tree.root()];
  while let Some(node) = stack.pop() {
    match node {
      Node::Leaf(symbol) => {
        bits.push(false);
        leaves.push(*symbol);
      }
      Node::Internal { zero, one } => {
        bits.push(true);
        stack.push(one);
        stack.push(zero);
      }
    }
  }

  (bits, leaves)
}

/// Rebuilds a tree from the output of [`encode_tree`].
///
/// Both children of every internal marker are always rebuilt; running out of
/// input before that happens is an error rather than a partial tree.
///
/// # Errors
///
/// Returns `MalformedStream` if either sequence ends early, if input remains
/// once the tree is complete, or if the result is not a valid tree.
///
/// [`encode_tree`]: fn.encode_tree.html
pub fn decode_tree(bits: &BitVec, leaves: &[u8]) -> Result<Tree> {
  let mut bits = bits.iter();
  let mut leaves = leaves.iter();

  // Internal nodes still waiting on children. `None` while the zero subtree
  // is being read, `Some(zero)` while the one subtree is being read.
  let mut pending: Vec<Option<Node>> = Vec::new();

  // Repeats are rejected as they are read so no subtree ever holds more than
  // 256 leaves, which keeps the nodes built so far shallow enough to drop.
  let mut seen = [false; 256];

  let root = 'read: loop {
    let mut node = match bits.next() {
      Some(true) => {
        pending.push(None);
        continue;
      }
      Some(false) => match leaves.next() {
        Some(&symbol) => {
          let slot = &mut seen[symbol as usize];
          if *slot {
            return Err(Malformed::DuplicateLeaf(symbol).into());
          }
          *slot = true;
          Node::leaf(symbol)
        }
        None => return Err(Malformed::MissingLeaf.into()),
      },
      None => return Err(Malformed::TruncatedTree.into()),
    };

    // Attach the finished subtree to its parent, completing every parent
    // whose one subtree this was.
    loop {
      match pending.pop() {
        None => break 'read node,
        Some(None) => {
          pending.push(Some(node));
          break;
        }
        Some(Some(zero)) => node = Node::internal(zero, node),
      }
    }
  };

  let trailing_bits = bits.count();
  if trailing_bits != 0 {
    return Err(Malformed::TrailingBits(trailing_bits).into());
  }
  let trailing_leaves = leaves.count();
  if trailing_leaves != 0 {
    return Err(Malformed::TrailingLeaves(trailing_leaves).into());
  }

  Tree::new(root)
}
