//! A min-priority queue with decrease-key.
//!
//! The queue is an array-backed binary heap plus a companion
//! [`HashMap`] from item to its current slot in the array. The index is
//! kept in step with every swap, which makes [`MinHeapPQ::contains`] and
//! [`MinHeapPQ::change_priority`] cheap without scanning the heap.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;

use crate::error::QueueError;

/// A min-priority queue keyed by item identity.
///
/// Every item may be present at most once. Misuse (a duplicate insert,
/// changing an absent item, reading an empty queue) is reported as a
/// [`QueueError`] rather than ignored.
#[derive(Debug, Clone)]
pub struct MinHeapPQ<T> {
    heap: Vec<(T, OrderedFloat<f64>)>,
    index: HashMap<T, usize>,
}

impl<T> Default for MinHeapPQ<T> {
    fn default() -> Self {
        MinHeapPQ {
            heap: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash + Debug> MinHeapPQ<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index.contains_key(item)
    }

    /// Current priority of `item`, if queued.
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.index
            .get(item)
            .map(|&slot| self.heap[slot].1.into_inner())
    }

    /// Adds `item` with the given priority.
    ///
    /// # Time Complexity
    /// *O*(*log n*)
    pub fn insert(&mut self, item: T, priority: f64) -> Result<(), QueueError> {
        if self.contains(&item) {
            return Err(QueueError::DuplicateItem(format!("{:?}", item)));
        }
        let slot = self.heap.len();
        self.index.insert(item.clone(), slot);
        self.heap.push((item, OrderedFloat(priority)));
        self.sift_up(slot);
        Ok(())
    }

    /// Returns the item with the smallest priority without removing it.
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.heap
            .first()
            .map(|(item, _)| item)
            .ok_or(QueueError::Empty)
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// # Time Complexity
    /// *O*(*log n*)
    pub fn poll(&mut self) -> Result<T, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::Empty);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let (item, _) = self.heap.pop().ok_or(QueueError::Empty)?;
        self.index.remove(&item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Moves `item` to its place for `priority`. Both decreases and
    /// increases are supported.
    ///
    /// # Time Complexity
    /// *O*(*log n*)
    pub fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), QueueError> {
        let slot = *self
            .index
            .get(item)
            .ok_or_else(|| QueueError::MissingItem(format!("{:?}", item)))?;
        let old = self.heap[slot].1;
        let new = OrderedFloat(priority);
        self.heap[slot].1 = new;
        if new < old {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        Ok(())
    }

    //---------------------------------------------------------------
    // Heap maintenance
    //---------------------------------------------------------------

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].1 >= self.heap[parent].1 {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < len && self.heap[left].1 < self.heap[smallest].1 {
                smallest = left;
            }
            if right < len && self.heap[right].1 < self.heap[smallest].1 {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Swaps two heap slots and updates the reverse index for both.
    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.heap.swap(i, j);
        if let Some(slot) = self.index.get_mut(&self.heap[i].0) {
            *slot = i;
        }
        if let Some(slot) = self.index.get_mut(&self.heap[j].0) {
            *slot = j;
        }
    }
}
