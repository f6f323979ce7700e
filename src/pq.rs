use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Smallest item by `Ord` comes out first.
#[derive(Debug, Clone)]
pub struct MinPq<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> MinPq<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    pub fn extract_min(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Ord> Default for MinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}
