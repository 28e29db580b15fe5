//! Priority queues used while merging Huffman subtrees.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queue which hands back the item with the smallest weight first.
///
/// Tree construction only relies on this interface, so any queue with a
/// deterministic tie-breaking rule may be supplied. Different rules produce
/// different, but equally optimal, trees.
pub trait MinQueue<T> {
  /// Inserts `item` with priority `weight`.
  fn insert(&mut self, item: T, weight: u64);

  /// Removes and returns the item with the smallest weight along with that
  /// weight, or `None` if the queue is empty.
  fn extract_min(&mut self) -> Option<(T, u64)>;

  /// The number of queued items.
  fn len(&self) -> usize;

  /// True if nothing is queued.
  fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// The default queue: a binary heap ordered by weight where equal weights are
/// extracted in reverse insertion order (last inserted, first out).
pub struct HeapQueue<T> {
  heap: BinaryHeap<Entry<T>>,
  next_seq: u64,
}

impl<T> HeapQueue<T> {
  pub fn new() -> Self {
    HeapQueue {
      heap: BinaryHeap::new(),
      next_seq: 0,
    }
  }
}

impl<T> Default for HeapQueue<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> MinQueue<T> for HeapQueue<T> {
  fn insert(&mut self, item: T, weight: u64) {
    let seq = self.next_seq;
    self.next_seq += 1;
    self.heap.push(Entry { weight, seq, item });
  }

  fn extract_min(&mut self) -> Option<(T, u64)> {
    self.heap.pop().map(|e| (e.item, e.weight))
  }

  fn len(&self) -> usize {
    self.heap.len()
  }
}

/// A heap entry. Ordering ignores the item itself.
struct Entry<T> {
  weight: u64,
  seq: u64,
  item: T,
}

impl<T> Ord for Entry<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    // `BinaryHeap` is a max-heap: the lighter entry must compare greater, and
    // among equal weights the later insertion wins.
    other
      .weight
      .cmp(&self.weight)
      .then_with(|| self.seq.cmp(&other.seq))
  }
}

impl<T> PartialOrd for Entry<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T> PartialEq for Entry<T> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl<T> Eq for Entry<T> {}
