/// One queue entry: an opaque payload tagged with its priority.
#[derive(Debug, Clone)]
struct HeapEntry<V, P> {
    value: V,
    priority: P,
}

/// An array-backed binary min-heap used as the frontier queue in shortest
/// path algorithms.
///
/// Entries live in a `Vec` laid out as a complete binary tree: the parent
/// of index `i` is `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`.
/// For every non-root index the parent's priority is less than or equal to
/// the entry's priority, so the minimum is always at the root. Lower
/// priority values are served first; ties are broken by structural
/// position only (the heap is not stable).
///
/// There is deliberately no decrease-key. Locating an arbitrary value in
/// the array is O(n), so a caller whose priority improves pushes a fresh
/// entry instead and skips the stale one when it eventually surfaces.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    P: Ord,
{
    entries: Vec<HeapEntry<V, P>>,
}

impl<V, P> MinHeap<V, P>
where
    P: Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        MinHeap {
            entries: Vec::new(),
        }
    }

    /// Creates a new empty queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Pushes a value with the given priority, in amortized O(log n).
    ///
    /// A value already present in the queue is not updated in place; the
    /// new entry simply coexists with the old one.
    pub fn push(&mut self, value: V, priority: P) {
        self.entries.push(HeapEntry { value, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Returns the minimum-priority value without removing it, or `None`
    /// on an empty queue
    pub fn peek_value(&self) -> Option<&V> {
        self.entries.first().map(|entry| &entry.value)
    }

    /// Returns the minimum priority without removing it, or `None` on an
    /// empty queue
    pub fn peek_priority(&self) -> Option<&P> {
        self.entries.first().map(|entry| &entry.priority)
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(&V, &P)> {
        self.entries.first().map(|entry| (&entry.value, &entry.priority))
    }

    /// Removes and returns the minimum-priority entry, or `None` on an
    /// empty queue, in amortized O(log n).
    ///
    /// The last entry is moved into the root slot and sifted down until
    /// both children are no smaller.
    pub fn pop(&mut self) -> Option<(V, P)> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let entry = self.entries.pop().map(|entry| (entry.value, entry.priority));
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        entry
    }

    /// Clears the queue
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Restores heap order after an append: swap with the parent while the
    /// new entry's priority is strictly smaller.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    /// Restores heap order after a root replacement: swap with the smaller
    /// child until neither child has a smaller priority.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < len && self.entries[left].priority < self.entries[smallest].priority {
                smallest = left;
            }
            if right < len && self.entries[right].priority < self.entries[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.entries.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    P: Ord,
{
    fn default() -> Self {
        MinHeap::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MinHeap;

    /// Checks the structural invariant directly: every non-root entry has
    /// a priority no smaller than its parent's.
    fn heap_ordered<V, P: Ord>(heap: &MinHeap<V, P>) -> bool {
        (1..heap.entries.len()).all(|i| heap.entries[(i - 1) / 2].priority <= heap.entries[i].priority)
    }

    #[test]
    fn invariant_holds_after_every_push() {
        let mut heap = MinHeap::new();
        for i in 0..64u32 {
            // Scrambled but deterministic priorities
            heap.push(i, (i * 7919) % 101);
            assert!(heap_ordered(&heap), "push {} broke heap order", i);
        }
    }

    #[test]
    fn invariant_holds_after_every_pop() {
        let mut heap = MinHeap::new();
        for i in 0..64u32 {
            heap.push(i, (i * 104729) % 97);
        }
        while heap.pop().is_some() {
            assert!(heap_ordered(&heap), "pop broke heap order");
        }
    }

    #[test]
    fn invariant_holds_under_interleaving() {
        let mut heap = MinHeap::new();
        for round in 0..16u32 {
            for i in 0..8u32 {
                heap.push(round * 8 + i, (i * 31 + round * 17) % 59);
                assert!(heap_ordered(&heap));
            }
            for _ in 0..5 {
                heap.pop();
                assert!(heap_ordered(&heap));
            }
        }
    }
}
