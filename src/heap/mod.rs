//! HeapStore — array-backed binary min-heap.
//!
//! Slot `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and
//! `2i + 2`. The store is built once with a sift-down pass and is then only
//! read; there is no push or pop.

use std::ops::Index;

// ─── Index arithmetic ────────────────────────────────────────────────────────

/// Parent slot of `i`, or `None` for the root.
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 { None } else { Some((i - 1) / 2) }
}

pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

// ─── HeapStore ───────────────────────────────────────────────────────────────

/// A min-heap laid out in a contiguous vector.
///
/// After construction every slot `i > 0` satisfies
/// `values[i] >= values[parent(i)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapStore<K> {
    values: Vec<K>,
}

impl<K: Ord> HeapStore<K> {
    /// Heapify `values` in place. Linear time.
    pub fn new(values: Vec<K>) -> Self {
        let mut store = Self { values };
        store.init();
        store
    }

    /// Re-establish heap order over the current contents.
    pub fn init(&mut self) {
        let n = self.values.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i, n);
        }
    }

    fn sift_down(&mut self, mut i: usize, n: usize) {
        loop {
            let left = left_child(i);
            if left >= n {
                break;
            }
            let mut child = left;
            let right = right_child(i);
            // Right wins only when strictly smaller, ties stay on the left.
            if right < n && self.values[right] < self.values[left] {
                child = right;
            }
            if self.values[child] >= self.values[i] {
                break;
            }
            self.values.swap(i, child);
            i = child;
        }
    }

    /// True when every slot satisfies the min-heap order.
    pub fn is_heap(&self) -> bool {
        (1..self.values.len()).all(|i| {
            let p = (i - 1) / 2;
            self.values[i] >= self.values[p]
        })
    }
}

impl<K> HeapStore<K> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&K> {
        self.values.get(i)
    }

    pub fn values(&self) -> &[K] {
        &self.values
    }

    pub fn into_values(self) -> Vec<K> {
        self.values
    }

    /// Left child slot of `i` if it exists in this store.
    pub fn left_of(&self, i: usize) -> Option<usize> {
        let c = left_child(i);
        (c < self.values.len()).then_some(c)
    }

    /// Right child slot of `i` if it exists in this store.
    pub fn right_of(&self, i: usize) -> Option<usize> {
        let c = right_child(i);
        (c < self.values.len()).then_some(c)
    }
}

impl<K: Ord> From<Vec<K>> for HeapStore<K> {
    fn from(values: Vec<K>) -> Self {
        Self::new(values)
    }
}

impl<K: Ord> FromIterator<K> for HeapStore<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Panics when `i` is outside `[0, len)`.
impl<K> Index<usize> for HeapStore<K> {
    type Output = K;

    fn index(&self, i: usize) -> &K {
        &self.values[i]
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_heap.rs"]
mod tests;
