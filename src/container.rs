//! Packed binary form of an [`Archive`].
//!
//! ```text
//! magic            "HUF" 0x01
//! varint           number of tree bits
//! varint           number of leaves, followed by the leaf bytes
//! varint           number of message bits
//! tree bits        packed most significant bit first, zero padded
//! message bits     packed most significant bit first, zero padded
//! ```
//!
//! [`Archive`]: ../archive/struct.Archive.html

use crate::archive::Archive;
use crate::bit::{BitVec, BitVecExt};
use crate::math;
use crate::varint;
use std::convert::TryFrom;
use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Leading bytes of every packed archive.
pub const MAGIC: [u8; 4] = *b"HUF\x01";

/// Errors raised while reading a packed archive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContainerError {
  /// The input does not start with [`MAGIC`].
  ///
  /// [`MAGIC`]: constant.MAGIC.html
  BadMagic,
  /// The input ended before the archive was complete.
  Truncated,
  /// A length does not fit in memory on this platform.
  LengthOverflow,
  /// Bytes remained after the archive was complete.
  TrailingBytes(usize),
}

impl Display for ContainerError {
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    use ContainerError::*;
    match self {
      BadMagic => write!(f, "not a packed archive"),
      Truncated => write!(f, "archive ends unexpectedly"),
      LengthOverflow => write!(f, "archive length field is too large"),
      TrailingBytes(n) => write!(f, "{} unexpected bytes after archive", n),
    }
  }
}

impl Error for ContainerError {}

impl From<varint::ReadError> for ContainerError {
  fn from(e: varint::ReadError) -> Self {
    match e {
      varint::ReadError::Truncated => ContainerError::Truncated,
      varint::ReadError::Overflow => ContainerError::LengthOverflow,
    }
  }
}

impl Archive {
  /// Packs this archive into bytes.
  pub fn to_bytes(&self) -> Vec<u8> {
    let mut out = MAGIC.to_vec();
    varint::write(self.tree_bits.len() as u64, &mut out);
    varint::write(self.tree_leaves.len() as u64, &mut out);
    out.extend_from_slice(&self.tree_leaves);
    varint::write(self.message_bits.len() as u64, &mut out);
    out.extend(self.tree_bits.to_bytes());
    out.extend(self.message_bits.to_bytes());
    out
  }

  /// Unpacks an archive produced by [`to_bytes`].
  ///
  /// Only the container is checked; whether the tree and message are valid is
  /// left to decompression.
  ///
  /// [`to_bytes`]: struct.Archive.html#method.to_bytes
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContainerError> {
    let mut reader = Reader { bytes };
    if reader.take(MAGIC.len())? != MAGIC {
      return Err(ContainerError::BadMagic);
    }

    let tree_len = reader.len()?;
    let leaf_count = reader.len()?;
    let tree_leaves = reader.take(leaf_count)?.to_vec();
    let message_len = reader.len()?;
    let tree_bits = reader.bits(tree_len)?;
    let message_bits = reader.bits(message_len)?;

    if !reader.bytes.is_empty() {
      return Err(ContainerError::TrailingBytes(reader.bytes.len()));
    }

    Ok(Archive {
      tree_bits,
      tree_leaves,
      message_bits,
    })
  }
}

/// Consumes a byte slice front to back.
struct Reader<'a> {
  bytes: &'a [u8],
}

impl<'a> Reader<'a> {
  fn take(&mut self, n: usize) -> Result<&'a [u8], ContainerError> {
    if self.bytes.len() < n {
      return Err(ContainerError::Truncated);
    }
    let (head, tail) = self.bytes.split_at(n);
    self.bytes = tail;
    Ok(head)
  }

  fn len(&mut self) -> Result<usize, ContainerError> {
    let (value, used) = varint::read(self.bytes)?;
    self.bytes = &self.bytes[used..];
    usize::try_from(value).map_err(|_| ContainerError::LengthOverflow)
  }

  fn bits(&mut self, len: usize) -> Result<BitVec, ContainerError> {
    let packed = self.take(math::packed_len(len))?;
    BitVec::from_packed(packed, len).ok_or(ContainerError::Truncated)
  }
}
