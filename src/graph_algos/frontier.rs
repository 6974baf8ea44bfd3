use crate::collections::FxHashMap;
use crate::errors::SearchError;
use crate::geometry::Coord;


/// Parent index of an origin node
pub const NO_PARENT: usize = usize::MAX;


/// Node discovered by a search direction but not yet expanded
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub coord: Coord,
    pub g: f64, // cost from the search origin
    pub h: f64, // estimate to the search target
    pub parent: usize, // index in the closed node graph, NO_PARENT for the origin
    seq: u64, // insertion order, breaks f ties
}

impl SearchNode {

    pub fn new(coord: Coord, g: f64, h: f64, parent: usize) -> Self {
        Self { coord, g, h, parent, seq: 0 }
    }

    pub fn f(&self) -> f64 {
        self.g + self.h
    }

    /// Frontier order: lower f first, then the node pushed first
    pub fn less_by_f(&self, other: &SearchNode) -> bool {
        self.f()
            .total_cmp(&other.f())
            .then(self.seq.cmp(&other.seq))
            .is_lt()
    }
}


/// Open list: binary min-heap over f with a coordinate -> heap slot index
/// Each coordinate is queued at most once. The slot index is updated on every
/// swap, so membership and lookup by coordinate never scan the heap
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<SearchNode>,
    slots: FxHashMap<Coord, usize>,
    next_seq: u64,
}

impl Frontier {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.slots.contains_key(&coord)
    }

    pub fn peek_by_coord(&self, coord: Coord) -> Option<&SearchNode> {
        self.slots.get(&coord).map(|&slot| &self.heap[slot])
    }

    pub fn peek_min(&self) -> Option<&SearchNode> {
        self.heap.first()
    }

    /// Smallest f in the frontier, +inf when empty
    pub fn min_f(&self) -> f64 {
        self.peek_min().map_or(f64::INFINITY, SearchNode::f)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode> {
        self.heap.iter()
    }

    /// Queue a node
    /// Returns false and leaves the frontier untouched if the coordinate is already queued
    pub fn push(&mut self, mut node: SearchNode) -> bool {
        if self.contains(node.coord) {
            return false;
        }
        node.seq = self.next_seq;
        self.next_seq += 1;

        let slot = self.heap.len();
        self.slots.insert(node.coord, slot);
        self.heap.push(node);
        self.sift_up(slot);
        true
    }

    /// Lower the cost of a queued coordinate
    /// Only applies if g is strictly lower than the queued g. The node keeps its
    /// insertion order. Returns true if the node was updated
    pub fn decrease_key(&mut self, coord: Coord, g: f64, parent: usize) -> bool {
        let Some(&slot) = self.slots.get(&coord) else {
            return false;
        };
        let node = &mut self.heap[slot];
        if g >= node.g {
            return false;
        }
        node.g = g;
        node.parent = parent;
        self.sift_up(slot);
        true
    }

    /// Remove and return the node with the smallest f
    pub fn pop_min(&mut self) -> Result<SearchNode, SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyFrontier);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);

        let node = self.heap.pop().ok_or(SearchError::EmptyFrontier)?;
        self.slots.remove(&node.coord);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(node)
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.heap[slot].less_by_f(&self.heap[parent]) {
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

            if left < len && self.heap[left].less_by_f(&self.heap[smallest]) {
                smallest = left;
            }
            if right < len && self.heap[right].less_by_f(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Swap two heap entries and keep the slot index in step
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].coord, a);
        self.slots.insert(self.heap[b].coord, b);
    }
}
