//! LRU Container Module
//!
//! Implements a fixed-capacity map ordered by recency of access.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Link value marking the end of the recency list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

// == LRU Cache ==
/// Fixed-capacity key-value container with least-recently-used eviction.
///
/// Nodes live in a dense `Vec` and are linked by index into a doubly-linked
/// recency list:
/// - `head` = Most recently used
/// - `tail` = Least recently used
///
/// The `map` indexes keys to node slots so that get, put and eviction are O(1).
/// The container knows nothing about expiration.
#[derive(Debug)]
pub struct LruCache<K, V> {
    map: HashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty container holding at most `capacity` entries.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    // == Get ==
    /// Returns the value for `key`, marking it as most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.promote(idx);
        Some(&self.nodes[idx].value)
    }

    // == Peek ==
    /// Returns the value for `key` without touching the recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    // == Put ==
    /// Inserts or replaces the value for `key` and marks it most recently used.
    ///
    /// When a new key arrives at capacity, the least recently used entry is
    /// evicted first and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.promote(idx);
            return None;
        }

        let evicted = if self.nodes.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };

        let idx = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.map.insert(key, idx);
        self.push_front(idx);

        evicted
    }

    // == Remove ==
    /// Removes `key` and returns its value; no-op if absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        Some(self.detach(idx).value)
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }
        let node = self.detach(self.tail);
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    // == Peek LRU ==
    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.nodes
            .get(self.tail)
            .map(|node| (&node.key, &node.value))
    }

    // == Reset ==
    /// Empties the container.
    pub fn reset(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Iterate ==
    /// Lazily yields entries from most to least recently used.
    ///
    /// Iteration does not affect the recency order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Checks if `key` is present, without touching the recency order.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == List Maintenance ==
    fn promote(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    /// Unlinks the node at `idx` and takes it out of the slab.
    ///
    /// The last slot moves into `idx`, so its neighbours and map slot are
    /// repointed. The caller owns removing the detached key from `map`.
    fn detach(&mut self, idx: usize) -> Node<K, V> {
        self.unlink(idx);
        let node = self.nodes.swap_remove(idx);

        if idx < self.nodes.len() {
            let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
            if prev != NIL {
                self.nodes[prev].next = idx;
            } else {
                self.head = idx;
            }
            if next != NIL {
                self.nodes[next].prev = idx;
            } else {
                self.tail = idx;
            }
            if let Some(slot) = self.map.get_mut(&self.nodes[idx].key) {
                *slot = idx;
            }
        }

        node
    }
}

// == Iterator ==
/// Iterator over the entries of an [`LruCache`], most recently used first.
pub struct Iter<'a, K, V> {
    nodes: &'a [Node<K, V>],
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a LruCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
