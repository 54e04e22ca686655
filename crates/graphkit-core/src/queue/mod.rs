//! Priority queue with cheap priority updates
//!
//! The item → priority map is the source of truth. The heap may hold stale
//! duplicates: updating a priority pushes a fresh entry instead of searching
//! the heap for the old one, and stale entries are discarded when they
//! surface at the top. Once the heap holds `rebuild_factor` times as many
//! entries as there are live items it is rebuilt from the map, so a run of
//! updates costs amortized O(log n) each and memory stays O(live items).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Heap size / live item ratio that triggers a rebuild
pub const DEFAULT_REBUILD_FACTOR: usize = 2;

/// Heap entry ordered by priority only
#[derive(Debug, Clone)]
struct HeapEntry<K, P> {
    priority: P,
    item: K,
}

impl<K, P: Ord> PartialEq for HeapEntry<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<K, P: Ord> Eq for HeapEntry<K, P> {}

impl<K, P: Ord> PartialOrd for HeapEntry<K, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, P: Ord> Ord for HeapEntry<K, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

#[derive(Debug, Clone)]
pub struct UpdatablePriorityQueue<K, P> {
    priorities: HashMap<K, P>,
    heap: BinaryHeap<Reverse<HeapEntry<K, P>>>,
    rebuild_factor: usize,
}

impl<K, P> UpdatablePriorityQueue<K, P>
where
    K: Hash + Eq + Clone,
    P: Ord + Clone,
{
    pub fn new() -> Self {
        Self::with_rebuild_factor(DEFAULT_REBUILD_FACTOR)
    }

    /// Create an empty queue that rebuilds at `factor` × live items
    ///
    /// Factors below 2 are raised to 2.
    pub fn with_rebuild_factor(factor: usize) -> Self {
        UpdatablePriorityQueue {
            priorities: HashMap::new(),
            heap: BinaryHeap::new(),
            rebuild_factor: factor.max(DEFAULT_REBUILD_FACTOR),
        }
    }

    /// Build from `(item, priority)` pairs in O(k log k); later duplicates
    /// of an item overwrite earlier ones
    pub fn from_items<I>(items: I, factor: usize) -> Self
    where
        I: IntoIterator<Item = (K, P)>,
    {
        let mut queue = Self::with_rebuild_factor(factor);
        queue.priorities = items.into_iter().collect();
        queue.rebuild();
        queue
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }

    /// Number of heap entries, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    pub fn contains(&self, item: &K) -> bool {
        self.priorities.contains_key(item)
    }

    /// Current priority of `item`, if it is still queued
    pub fn get(&self, item: &K) -> Option<&P> {
        self.priorities.get(item)
    }

    /// Insert `item` or overwrite its priority
    pub fn set_priority(&mut self, item: K, priority: P) {
        self.priorities.insert(item.clone(), priority.clone());
        self.heap.push(Reverse(HeapEntry { priority, item }));

        if self.heap.len() >= self.rebuild_factor * self.priorities.len() {
            self.rebuild();
        }
    }

    /// Drop `item` from the queue; its heap entries become stale
    pub fn remove(&mut self, item: &K) -> Option<P> {
        self.priorities.remove(item)
    }

    /// Remove and return the item with the least priority
    pub fn pop_min(&mut self) -> Result<(K, P)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.is_live(&entry) {
                self.priorities.remove(&entry.item);
                return Ok((entry.item, entry.priority));
            }
        }
        Err(GraphError::EmptyQueue)
    }

    /// The item with the least priority, without removing it
    ///
    /// Takes `&mut self` because stale entries found on top are discarded.
    pub fn peek_min(&mut self) -> Result<(&K, &P)> {
        loop {
            let live = match self.heap.peek() {
                Some(Reverse(entry)) => self.is_live(entry),
                None => return Err(GraphError::EmptyQueue),
            };
            if live {
                break;
            }
            self.heap.pop();
        }

        match self.heap.peek() {
            Some(Reverse(entry)) => Ok((&entry.item, &entry.priority)),
            None => Err(GraphError::EmptyQueue),
        }
    }

    fn is_live(&self, entry: &HeapEntry<K, P>) -> bool {
        self.priorities
            .get(&entry.item)
            .is_some_and(|current| *current == entry.priority)
    }

    /// Recreate the heap from the map, dropping every stale entry
    fn rebuild(&mut self) {
        let stale = self.heap.len();
        self.heap = self
            .priorities
            .iter()
            .map(|(item, priority)| {
                Reverse(HeapEntry {
                    priority: priority.clone(),
                    item: item.clone(),
                })
            })
            .collect();
        tracing::debug!(before = stale, after = self.heap.len(), "queue_rebuild");
    }
}

impl<K, P> Default for UpdatablePriorityQueue<K, P>
where
    K: Hash + Eq + Clone,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, P> FromIterator<(K, P)> for UpdatablePriorityQueue<K, P>
where
    K: Hash + Eq + Clone,
    P: Ord + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self::from_items(iter, DEFAULT_REBUILD_FACTOR)
    }
}
