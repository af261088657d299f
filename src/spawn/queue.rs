//! Spawn queue
//!
//! Live spawned enemies in spawn order, with a hard capacity.

use std::collections::VecDeque;

/// FIFO of live spawned entities
#[derive(Debug, Clone)]
pub struct SpawnQueue<H> {
    entries: VecDeque<H>,
    capacity: usize,
}

impl<H: Copy + Eq> SpawnQueue<H> {
    /// Empty queue holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of live entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True while another entry would fit
    pub fn has_room(&self) -> bool {
        self.entries.len() < self.capacity
    }

    /// Append to the tail. Refused (returns false) when full.
    pub fn push(&mut self, handle: H) -> bool {
        if !self.has_room() {
            return false;
        }
        self.entries.push_back(handle);
        true
    }

    /// Oldest entry
    pub fn front(&self) -> Option<H> {
        self.entries.front().copied()
    }

    /// True if `handle` is queued
    pub fn contains(&self, handle: H) -> bool {
        self.entries.contains(&handle)
    }

    /// Entries oldest first
    pub fn iter(&self) -> impl Iterator<Item = H> + '_ {
        self.entries.iter().copied()
    }

    /// Remove every entry `retire` returns true for, keeping the rest in order.
    /// Returns the removed entries in queue order.
    pub fn remove_where(&mut self, mut retire: impl FnMut(H) -> bool) -> Vec<H> {
        let mut removed = Vec::new();
        self.entries.retain(|&handle| {
            if retire(handle) {
                removed.push(handle);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Empty the queue, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.entries.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_refused_when_full() {
        let mut queue = SpawnQueue::new(2);
        assert_eq!(queue.capacity(), 2);
        assert!(queue.push(1));
        assert!(queue.push(2));
        assert!(!queue.has_room());
        assert!(!queue.push(3));
        assert_eq!(queue.len(), 2);
        assert!(!queue.contains(3));
    }

    #[test]
    fn test_remove_where_keeps_order() {
        let mut queue = SpawnQueue::new(10);
        for i in 1..=6 {
            queue.push(i);
        }
        let removed = queue.remove_where(|h| h % 2 == 0);
        assert_eq!(removed, vec![2, 4, 6]);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(queue.front(), Some(1));
    }

    #[test]
    fn test_drain_is_fifo() {
        let mut queue = SpawnQueue::new(3);
        queue.push(7);
        queue.push(8);
        queue.push(9);
        assert_eq!(queue.drain().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert!(queue.is_empty());
        assert!(queue.has_room());
    }
}
