//! Indexed binary heap with key updates.
//!
//! Entries live in a dense array; `positions[v]` holds the slot of vertex `v`.
//! Extracted entries are parked past the active size, so a vertex is still
//! active iff `positions[v] < size`. Every swap moves both the entries and
//! the two affected position-index cells.

use core::marker::PhantomData;

use crate::error::{Result, SsspError};

/// Comparison direction of the heap.
pub trait HeapOrder {
    /// Priority that loses to every reachable key (seed for unvisited vertices).
    const WORST: f64;

    /// True if `a` must sit above `b`. Strict: ties never beat.
    fn beats(a: f64, b: f64) -> bool;
}

/// Lowest priority at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinFirst;

/// Highest priority at the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxFirst;

impl HeapOrder for MinFirst {
    const WORST: f64 = f64::INFINITY;
    #[inline(always)]
    fn beats(a: f64, b: f64) -> bool {
        a < b
    }
}

impl HeapOrder for MaxFirst {
    const WORST: f64 = f64::NEG_INFINITY;
    #[inline(always)]
    fn beats(a: f64, b: f64) -> bool {
        a > b
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapEntry {
    pub priority: f64,
    pub vertex: u32,
}

impl HeapEntry {
    pub fn new(priority: f64, vertex: u32) -> Self {
        Self { priority, vertex }
    }
}

#[inline(always)]
pub(crate) fn parent(i: usize, size: usize) -> Option<usize> {
    if i > 0 && i < size { Some((i - 1) / 2) } else { None }
}
#[inline(always)]
pub(crate) fn left_child(i: usize, size: usize) -> Option<usize> {
    let l = 2 * i + 1;
    if l < size { Some(l) } else { None }
}
#[inline(always)]
pub(crate) fn right_child(i: usize, size: usize) -> Option<usize> {
    let r = 2 * i + 2;
    if r < size { Some(r) } else { None }
}

#[derive(Debug, Clone)]
pub struct IndexedBinaryHeap<O: HeapOrder> {
    entries: Vec<HeapEntry>,
    positions: Vec<usize>,
    size: usize,
    _order: PhantomData<O>,
}

impl<O: HeapOrder> IndexedBinaryHeap<O> {
    /// Heapify `entries` in O(n). Vertex ids must be a permutation of `0..n`.
    pub fn build(entries: Vec<HeapEntry>) -> Result<Self> {
        let n = entries.len();
        let mut positions = vec![usize::MAX; n];
        for (slot, e) in entries.iter().enumerate() {
            let v = e.vertex as usize;
            if v >= n {
                return Err(SsspError::VertexOutOfRange { vertex: e.vertex as u64, count: n });
            }
            if positions[v] != usize::MAX {
                return Err(SsspError::InvalidArgument(format!(
                    "vertex {} appears twice in heap seed",
                    v
                )));
            }
            positions[v] = slot;
        }
        let mut heap = Self { entries, positions, size: n, _order: PhantomData };
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }
        Ok(heap)
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].vertex as usize] = a;
        self.positions[self.entries[b].vertex as usize] = b;
    }

    /// Push the entry at `index` down until neither child beats it.
    pub fn sift_down(&mut self, mut index: usize) {
        loop {
            let mut best = index;
            if let Some(l) = left_child(index, self.size) {
                if O::beats(self.entries[l].priority, self.entries[best].priority) { best = l; }
            }
            if let Some(r) = right_child(index, self.size) {
                if O::beats(self.entries[r].priority, self.entries[best].priority) { best = r; }
            }
            if best == index { break; }
            self.swap_slots(index, best);
            index = best;
        }
    }

    #[inline]
    fn sift_up(&mut self, mut index: usize) {
        while let Some(p) = parent(index, self.size) {
            if !O::beats(self.entries[index].priority, self.entries[p].priority) { break; }
            self.swap_slots(index, p);
            index = p;
        }
    }

    /// Remove the root. The extracted vertex becomes inactive for good.
    pub fn extract_root(&mut self) -> Result<HeapEntry> {
        if self.size == 0 {
            return Err(SsspError::EmptyHeap);
        }
        let root = self.entries[0];
        self.size -= 1;
        self.swap_slots(0, self.size);
        self.sift_down(0);
        Ok(root)
    }

    /// Overwrite `vertex`'s priority and move it toward the root while it beats
    /// its parent (decrease-key for `MinFirst`, increase-key for `MaxFirst`).
    pub fn update_key(&mut self, vertex: u32, priority: f64) -> Result<()> {
        let v = vertex as usize;
        let slot = *self
            .positions
            .get(v)
            .ok_or(SsspError::VertexOutOfRange { vertex: vertex as u64, count: self.positions.len() })?;
        if slot >= self.size {
            return Err(SsspError::InvalidArgument(format!(
                "vertex {} already extracted",
                vertex
            )));
        }
        self.entries[slot].priority = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Vertex is still waiting to be extracted.
    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions.get(vertex).is_some_and(|&slot| slot < self.size)
    }

    pub fn priority_of(&self, vertex: usize) -> Option<f64> {
        if self.contains(vertex) { Some(self.entries[self.positions[vertex]].priority) } else { None }
    }

    pub fn peek(&self) -> Option<&HeapEntry> {
        self.active().first()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Active entries in slot order.
    pub fn active(&self) -> &[HeapEntry] {
        &self.entries[..self.size]
    }

    #[cfg(test)]
    pub(crate) fn slot_of(&self, vertex: usize) -> usize {
        self.positions[vertex]
    }
}
