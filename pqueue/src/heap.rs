use crate::error::EmptyContainer;

/// Which element wins the root: `Min` pops smallest-first, `Max` largest-first.
/// Fixed at construction time, so max-ordering needs no negated keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Min,
    Max,
}

/// Array-backed binary heap. The tree lives implicitly in `storage`:
/// children of index i are at 2i+1 and 2i+2. After every public call the
/// element at each index outranks-or-ties both of its children.
///
/// Elements are assumed mutually comparable; incomparable pairs (e.g. NaN
/// floats) get no defined placement.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    storage: Vec<T>,
    order: Order,
}

impl<T: PartialOrd> PriorityQueue<T> {
    pub fn new(order: Order) -> Self {
        PriorityQueue {
            storage: Vec::new(),
            order,
        }
    }

    pub fn min() -> Self {
        Self::new(Order::Min)
    }

    pub fn max() -> Self {
        Self::new(Order::Max)
    }

    /// O(n) heapify: sift down every internal node, deepest first.
    pub fn from_vec(order: Order, values: Vec<T>) -> Self {
        let mut pq = PriorityQueue {
            storage: values,
            order,
        };
        for i in (0..pq.storage.len() / 2).rev() {
            pq.sift_down(i);
        }
        pq
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.storage.push(value);
        self.sift_up(self.storage.len() - 1);
    }

    /// Removes and returns the root. The last element moves to the root slot
    /// and sifts down until it outranks both children.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        if self.storage.is_empty() {
            return Err(EmptyContainer);
        }
        let last = self.storage.len() - 1;
        self.storage.swap(0, last);
        let root = self.storage.pop().ok_or(EmptyContainer)?;
        self.sift_down(0);
        Ok(root)
    }

    pub fn peek(&self) -> Result<&T, EmptyContainer> {
        self.storage.first().ok_or(EmptyContainer)
    }

    // True when the element at index a should sit above the one at index b.
    fn outranks(&self, a: usize, b: usize) -> bool {
        match self.order {
            Order::Min => self.storage[a] < self.storage[b],
            Order::Max => self.storage[a] > self.storage[b],
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.outranks(i, parent) {
                break;
            }
            self.storage.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= self.storage.len() {
                break;
            }
            // Pick the stronger child; only a stronger child displaces i.
            let mut child = left;
            if right < self.storage.len() && self.outranks(right, left) {
                child = right;
            }
            if !self.outranks(child, i) {
                break;
            }
            self.storage.swap(i, child);
            i = child;
        }
    }
}

impl<T: PartialOrd> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::min()
    }
}
