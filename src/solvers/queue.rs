use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: usize,
    priority: f64,
    /// Insertion sequence, breaks ties so equal priorities pop first-in first-out.
    seq: u64,
}

impl Entry {
    fn cmp_priority(&self, other: &Entry) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Indexed binary min-heap over keys `0..capacity` with decrease-key.
///
/// Each key is present at most once; pushing a present key updates its priority.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    heap: Vec<Entry>,
    /// Heap slot of every key currently queued.
    positions: Vec<Option<usize>>,
    next_seq: u64,
}

impl PriorityQueue {
    pub fn new(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::new(),
            positions: vec![None; capacity],
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        for entry in self.heap.drain(..) {
            self.positions[entry.key] = None;
        }
        self.next_seq = 0;
    }

    pub fn contains(&self, key: usize) -> bool {
        self.positions[key].is_some()
    }

    pub fn priority(&self, key: usize) -> Option<f64> {
        self.positions[key].map(|slot| self.heap[slot].priority)
    }

    /// Inserts `key`, or changes its priority if it is already queued.
    pub fn push(&mut self, key: usize, priority: f64) {
        if self.update(key, priority) {
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, priority, seq });
        let slot = self.heap.len() - 1;
        self.positions[key] = Some(slot);
        self.sift_up(slot);
    }

    /// Changes the priority of a queued key. Returns `false` if the key is not queued.
    pub fn update(&mut self, key: usize, priority: f64) -> bool {
        let Some(slot) = self.positions[key] else {
            return false;
        };
        self.heap[slot].priority = priority;
        let slot = self.sift_up(slot);
        self.sift_down(slot);
        true
    }

    /// Removes and returns the key with the lowest priority.
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.positions[entry.key] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.key, entry.priority))
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].key] = Some(a);
        self.positions[self.heap[b].key] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) -> usize {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].cmp_priority(&self.heap[parent]) != Ordering::Less {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
        slot
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            let mut smallest = slot;
            if left < self.heap.len()
                && self.heap[left].cmp_priority(&self.heap[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < self.heap.len()
                && self.heap[right].cmp_priority(&self.heap[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
