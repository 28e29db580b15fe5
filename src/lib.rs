//! # huffarc
//!
//! Huffman compression of byte strings into self-contained archives.
//!
//! ```
//! let archive = huffarc::compress(b"ABANANAABANDANA")?;
//! assert_eq!(archive.tree_leaves, b"DBNA");
//!
//! let text = huffarc::decompress(&archive)?;
//! assert_eq!(text, b"ABANANAABANDANA");
//! # Ok::<(), huffarc::HuffmanError>(())
//! ```
//!
//! The building blocks are public as well: [`build_tree`] constructs a tree,
//! [`encode_text`]/[`decode_text`] move text through it and
//! [`encode_tree`]/[`decode_tree`] serialize the tree itself.
//!
//! [`build_tree`]: tree/fn.build_tree.html
//! [`encode_text`]: text/fn.encode_text.html
//! [`decode_text`]: text/fn.decode_text.html
//! [`encode_tree`]: shape/fn.encode_tree.html
//! [`decode_tree`]: shape/fn.decode_tree.html

pub mod archive;
pub mod bit;
pub mod container;
pub mod error;
pub mod freq;
pub mod queue;
pub mod shape;
pub mod text;
pub mod tree;

mod math;
mod varint;

pub use archive::{compress, decompress, Archive};
pub use container::ContainerError;
pub use error::{HuffmanError, Malformed, Result};
pub use shape::{decode_tree, encode_tree};
pub use text::{decode_text, encode_text, CodeTable, HuffmanCodec};
pub use tree::{build_tree, build_tree_with, Node, Tree};
