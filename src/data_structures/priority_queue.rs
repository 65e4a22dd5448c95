use std::cmp::Ordering;
use std::fmt::Debug;

use crate::{Error, Result};

/// A binary min-heap over dense `usize` items supporting decrease-priority
///
/// Every item may be present at most once. The `slots` vector maps an item to
/// its current position in `heap`, so that `decrease_priority` can locate the
/// item in O(1) and restore the heap order in O(log n).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Heap-ordered `(item, priority)` entries
    heap: Vec<(usize, P)>,

    /// Position of each item in `heap`, `None` if the item is not queued
    slots: Vec<Option<usize>>,
}

impl<P> Default for IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> IndexedMinHeap<P>
where
    P: PartialOrd + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinHeap {
            heap: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Creates a queue with room for items `0..capacity` without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            slots: vec![None; capacity],
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if `item` is currently queued
    pub fn contains(&self, item: usize) -> bool {
        self.slot(item).is_some()
    }

    /// Returns the current priority of `item`, if it is queued
    pub fn priority(&self, item: usize) -> Option<P> {
        self.slot(item).map(|pos| self.heap[pos].1)
    }

    /// Adds `item` with the given priority
    ///
    /// Fails with [`Error::DuplicateItem`] if the item is already queued.
    pub fn insert(&mut self, item: usize, priority: P) -> Result<()> {
        if self.contains(item) {
            return Err(Error::DuplicateItem(item));
        }
        if item >= self.slots.len() {
            self.slots.resize(item + 1, None);
        }

        let pos = self.heap.len();
        self.heap.push((item, priority));
        self.slots[item] = Some(pos);
        self.sift_up(pos);
        Ok(())
    }

    /// Lowers the priority of a queued item
    ///
    /// The new priority must be strictly smaller than the current one, otherwise
    /// [`Error::PriorityIncrease`] is returned and the queue is left untouched.
    pub fn decrease_priority(&mut self, item: usize, priority: P) -> Result<()> {
        let pos = self.slot(item).ok_or(Error::ItemNotFound(item))?;
        if priority.partial_cmp(&self.heap[pos].1) != Some(Ordering::Less) {
            return Err(Error::PriorityIncrease(item));
        }

        self.heap[pos].1 = priority;
        self.sift_up(pos);
        Ok(())
    }

    /// Removes the item with the smallest priority
    pub fn extract_min(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (item, priority) = self.heap.pop()?;
        self.slots[item] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((item, priority))
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.first().copied()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        for &(item, _) in &self.heap {
            self.slots[item] = None;
        }
        self.heap.clear();
    }

    fn slot(&self, item: usize) -> Option<usize> {
        self.slots.get(item).copied().flatten()
    }

    /// Swaps two heap entries and keeps `slots` in agreement
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.slots[self.heap[a].0] = Some(a);
        self.slots[self.heap[b].0] = Some(b);
    }

    /// Moves the entry at `pos` up while its parent is strictly larger
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].1 < self.heap[parent].1 {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the entry at `pos` down while a child is strictly smaller
    fn sift_down(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            if left >= n {
                break;
            }

            // Prefer the left child on ties
            let child = if right < n && self.heap[right].1 < self.heap[left].1 {
                right
            } else {
                left
            };

            if self.heap[child].1 < self.heap[pos].1 {
                self.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}
