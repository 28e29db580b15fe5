//! Huffman trees and their construction from symbol frequencies.

use crate::error::{HuffmanError, Malformed, Result};
use crate::freq::Frequencies;
use crate::queue::{HeapQueue, MinQueue};
use log::{debug, trace};

/// A node in a Huffman tree.
///
/// Internal nodes always own exactly two children. The edge to `zero` is
/// labelled with a 0 bit and the edge to `one` with a 1 bit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node {
  Leaf(u8),
  Internal { zero: Box<Node>, one: Box<Node> },
}

impl Node {
  /// Constructs a leaf holding `symbol`.
  pub fn leaf(symbol: u8) -> Self {
    Node::Leaf(symbol)
  }

  /// Constructs an internal node from its two children.
  pub fn internal(zero: Node, one: Node) -> Self {
    Node::Internal {
      zero: Box::new(zero),
      one: Box::new(one),
    }
  }

  /// True if `self` is a `Leaf` variant.
  pub fn is_leaf(&self) -> bool {
    matches!(self, Node::Leaf(_))
  }

  /// The child reached by following the edge labelled `bit`, or `None` for
  /// leaves.
  pub fn child(&self, bit: bool) -> Option<&Node> {
    match self {
      Node::Leaf(_) => None,
      Node::Internal { zero, one } => Some(if bit { one } else { zero }),
    }
  }
}

/// A well formed Huffman tree.
///
/// The root is always an internal node, so the tree has at least two leaves,
/// and no symbol is held by more than one leaf.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree {
  root: Node,
}

impl Tree {
  /// Wraps `root` as a tree after checking that it has at least two leaves
  /// and that every leaf symbol is distinct.
  pub fn new(root: Node) -> Result<Self> {
    if root.is_leaf() {
      return Err(Malformed::SingleLeaf.into());
    }

    let mut seen = [false; 256];
    let mut stack = vec![&root];
    while let Some(node) = stack.pop() {
      match node {
        Node::Leaf(symbol) => {
          let slot = &mut seen[*symbol as usize];
          if *slot {
            return Err(Malformed::DuplicateLeaf(*symbol).into());
          }
          *slot = true;
        }
        Node::Internal { zero, one } => {
          stack.push(one);
          stack.push(zero);
        }
      }
    }

    Ok(Tree { root })
  }

  /// The root node.
  pub fn root(&self) -> &Node {
    &self.root
  }

  /// Consumes the tree returning its root node.
  pub fn into_root(self) -> Node {
    self.root
  }

  /// The number of leaves, which is the number of distinct symbols.
  pub fn leaf_count(&self) -> usize {
    self.walk().filter(|(node, _)| node.is_leaf()).count()
  }

  /// The length of the longest root to leaf path.
  pub fn height(&self) -> usize {
    self.walk().map(|(_, depth)| depth).max().unwrap_or(0)
  }

  /// Iterates over every node paired with its depth, in pre-order.
  fn walk(&self) -> impl Iterator<Item = (&Node, usize)> + '_ {
    let mut stack = vec![(&self.root, 0)];
    std::iter::from_fn(move || {
      let (node, depth) = stack.pop()?;
      if let Node::Internal { zero, one } = node {
        stack.push((one, depth + 1));
        stack.push((zero, depth + 1));
      }
      Some((node, depth))
    })
  }
}

/// Builds a Huffman tree for `text`.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty text and `InsufficientAlphabet` if the
/// text contains fewer than two distinct symbols.
pub fn build_tree(text: &[u8]) -> Result<Tree> {
  let frequencies = Frequencies::analyze(text)?;
  Ok(build_tree_with(&frequencies, HeapQueue::new()))
}

/// Builds a Huffman tree from `frequencies` using `queue` to select the two
/// lightest subtrees at each step.
///
/// Leaves are inserted in ascending symbol order. The first subtree taken
/// from the queue becomes the zero child of the merged node and the second
/// becomes the one child.
///
/// # Panics
///
/// Panics if `queue` loses entries, i.e. if `extract_min` returns `None` while
/// items inserted into it are still outstanding.
pub fn build_tree_with<Q>(frequencies: &Frequencies, mut queue: Q) -> Tree
where
  Q: MinQueue<Node>,
{
  for (symbol, count) in frequencies.iter() {
    queue.insert(Node::leaf(symbol), count);
  }

  loop {
    // Frequencies always hold two symbols and every step nets one fewer node,
    // so a queue that keeps its entries never runs dry before the root.
    let (first, w0) = match queue.extract_min() {
      Some(entry) => entry,
      None => panic!("queue lost entries during tree construction"),
    };
    let (second, w1) = match queue.extract_min() {
      Some(entry) => entry,
      None => {
        assert!(
          !first.is_leaf(),
          "queue lost entries during tree construction"
        );
        let tree = Tree { root: first };
        debug!(
          "built tree with {} leaves and height {}",
          tree.leaf_count(),
          tree.height()
        );
        return tree;
      }
    };

    trace!("merging subtrees of weight {} and {}", w0, w1);
    queue.insert(Node::internal(first, second), w0.saturating_add(w1));
  }
}

impl From<Tree> for Node {
  fn from(tree: Tree) -> Self {
    tree.into_root()
  }
}

impl std::convert::TryFrom<Node> for Tree {
  type Error = HuffmanError;

  fn try_from(root: Node) -> Result<Self> {
    Tree::new(root)
  }
}
