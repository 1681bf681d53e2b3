use std::hash::Hash;

use fxhash::FxHashMap;

/// Whether the smallest or the largest key sits on top of an [`IndexedHeap`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HeapOrder {
    #[default]
    Min,
    Max,
}

/// A binary heap of distinct items, each carrying a key.
///
/// The position of every item is tracked in a hash map, so `contains`, `key_of` run in
/// constant time and `decrease_key` (moving an item towards the top) in `O(log n)`.
#[derive(Debug, Clone)]
pub struct IndexedHeap<T, K> {
    entries: Vec<(T, K)>,
    positions: FxHashMap<T, usize>,
    order: HeapOrder,
}

impl<T, K> Default for IndexedHeap<T, K>
where
    T: Copy + Eq + Hash,
    K: Copy + PartialOrd,
{
    fn default() -> Self {
        Self::new(HeapOrder::default())
    }
}

impl<T, K> IndexedHeap<T, K>
where
    T: Copy + Eq + Hash,
    K: Copy + PartialOrd,
{
    /// Creates an empty heap with the given order
    pub fn new(order: HeapOrder) -> Self {
        Self {
            entries: Vec::new(),
            positions: FxHashMap::default(),
            order,
        }
    }

    /// Creates an empty heap popping the smallest key first
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Creates an empty heap popping the largest key first
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns *true* if the heap holds no items
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns *true* if `item` is in the heap
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the key of `item` if it is in the heap
    pub fn key_of(&self, item: &T) -> Option<K> {
        self.positions.get(item).map(|&pos| self.entries[pos].1)
    }

    /// Returns the top item without removing it
    pub fn peek(&self) -> Option<(T, K)> {
        self.entries.first().copied()
    }

    /// Inserts `item` with `key`. Returns *false* (and leaves the heap untouched) if `item`
    /// is already present.
    pub fn push(&mut self, item: T, key: K) -> bool {
        if self.contains(&item) {
            return false;
        }

        let pos = self.entries.len();
        self.entries.push((item, key));
        self.positions.insert(item, pos);
        self.sift_up(pos);
        true
    }

    /// Removes and returns the top item
    pub fn pop(&mut self) -> Option<(T, K)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let top = self.entries.pop()?;
        self.positions.remove(&top.0);
        self.sift_down(0);
        Some(top)
    }

    /// Replaces the key of `item` by `key` if that moves the item towards the top.
    /// Returns *true* if the key was changed.
    pub fn decrease_key(&mut self, item: T, key: K) -> bool {
        let Some(&pos) = self.positions.get(&item) else {
            return false;
        };

        if !self.precedes(key, self.entries[pos].1) {
            return false;
        }

        self.entries[pos].1 = key;
        self.sift_up(pos);
        true
    }

    /// Removes all items
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Returns *true* if key `a` belongs strictly above key `b`
    fn precedes(&self, a: K, b: K) -> bool {
        match self.order {
            HeapOrder::Min => a < b,
            HeapOrder::Max => a > b,
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.entries.swap(i, j);
        self.positions.insert(self.entries[i].0, i);
        self.positions.insert(self.entries[j].0, j);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.precedes(self.entries[pos].1, self.entries[parent].1) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.entries.len();
        loop {
            let mut best = pos;
            for child in [2 * pos + 1, 2 * pos + 2] {
                if child < len && self.precedes(self.entries[child].1, self.entries[best].1) {
                    best = child;
                }
            }

            if best == pos {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn pops_in_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for order in [HeapOrder::Min, HeapOrder::Max] {
            let keys = (0..200u32).map(|i| (i, rng.random_range(0..1000) as f64)).collect_vec();

            let mut heap = IndexedHeap::new(order);
            for &(item, key) in &keys {
                assert!(heap.push(item, key));
            }
            assert_eq!(heap.len(), keys.len());
            assert!(!heap.push(0, 0.0));

            let popped = std::iter::from_fn(|| heap.pop()).map(|(_, k)| k).collect_vec();
            let mut expected = keys.iter().map(|(_, k)| *k).collect_vec();
            expected.sort_by(|a, b| a.total_cmp(b));
            if order == HeapOrder::Max {
                expected.reverse();
            }

            assert_eq!(popped, expected);
            assert!(heap.is_empty());
        }
    }

    #[test]
    fn decrease_key() {
        let mut heap = IndexedHeap::min();
        heap.push(1u32, 10.0);
        heap.push(2, 5.0);
        heap.push(3, 7.0);

        assert_eq!(heap.peek(), Some((2, 5.0)));
        assert!(heap.decrease_key(1, 1.0));
        assert_eq!(heap.peek(), Some((1, 1.0)));

        // increasing is not allowed, absent items are ignored
        assert!(!heap.decrease_key(3, 8.0));
        assert!(!heap.decrease_key(4, 0.0));
        assert_eq!(heap.key_of(&3), Some(7.0));

        assert_eq!(heap.pop(), Some((1, 1.0)));
        assert!(!heap.contains(&1));
        assert_eq!(heap.pop(), Some((2, 5.0)));
        assert_eq!(heap.pop(), Some((3, 7.0)));
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn max_heap_decrease_moves_up() {
        let mut heap = IndexedHeap::max();
        for i in 1..=5u32 {
            heap.push(i, i);
        }
        assert!(heap.decrease_key(1, 9));
        assert_eq!(heap.pop(), Some((1, 9)));
        assert_eq!(heap.pop(), Some((5, 5)));
    }
}
