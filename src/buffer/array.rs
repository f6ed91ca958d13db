//! # Array-Backed FIFO
//!
//! A fixed-capacity FIFO stored in one contiguous `Vec`.
//!
//! ## Plain English
//!
//! Picture a queue of people standing in a corridor with room for exactly
//! N people. When the corridor is full and someone new arrives, the person
//! at the front leaves and everybody shuffles one step forward.
//!
//! The shuffle costs O(n) per eviction, but contiguous storage keeps small
//! buffers very fast.

use std::fmt;
use std::slice;
use std::vec;

use super::FifoBuffer;
use crate::capacity::Capacity;
use crate::error::{BufferError, BufferResult};

/// A fixed-capacity FIFO backed by a vector.
///
/// ## Properties
/// - Fixed capacity (never holds more than `capacity` items)
/// - Automatically discards the oldest item when full
/// - Front removal shifts every remaining item one slot
/// - Maintains insertion order
pub struct ArrayFifo<T> {
    /// Oldest item at index 0, newest at the end
    items: Vec<T>,

    /// Maximum number of items
    capacity: Capacity,
}

impl<T> ArrayFifo<T> {
    /// Creates an empty buffer, validating the requested capacity.
    ///
    /// ## Example
    /// ```
    /// # use fifo_buffers::ArrayFifo;
    /// let buffer: ArrayFifo<i32> = ArrayFifo::new(100).unwrap();
    /// assert_eq!(buffer.capacity(), 100);
    /// assert!(ArrayFifo::<i32>::new(0).is_err());
    /// ```
    pub fn new<C>(capacity: C) -> BufferResult<Self>
    where
        C: TryInto<Capacity, Error = BufferError>,
    {
        Ok(Self::with_capacity(capacity.try_into()?))
    }

    /// Creates an empty buffer from an already validated capacity.
    pub fn with_capacity(capacity: Capacity) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Adds an item to the back.
    ///
    /// If the buffer is full, the oldest item is removed first.
    pub fn add(&mut self, item: T) {
        if self.is_full() {
            self.items.remove(0);
        }
        self.items.push(item);
    }

    /// Removes and returns the oldest item.
    pub fn get(&mut self) -> BufferResult<T> {
        if self.items.is_empty() {
            return Err(BufferError::EmptyBuffer);
        }
        Ok(self.items.remove(0))
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity.get()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Clears all items from the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the oldest item without removing it.
    pub fn peek_oldest(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the newest item without removing it.
    pub fn peek_newest(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns an iterator over all items (oldest to newest).
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Clone> ArrayFifo<T> {
    /// Returns cloned copies of all items (oldest first).
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T> FifoBuffer<T> for ArrayFifo<T> {
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) {
        ArrayFifo::add(self, item)
    }

    fn get(&mut self) -> BufferResult<T> {
        ArrayFifo::get(self)
    }

    fn len(&self) -> usize {
        ArrayFifo::len(self)
    }

    fn capacity(&self) -> usize {
        ArrayFifo::capacity(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ArrayFifo::iter(self)
    }

    fn clear(&mut self) {
        ArrayFifo::clear(self)
    }
}

impl<T: Clone> Clone for ArrayFifo<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayFifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Extend<T> for ArrayFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayFifo<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ArrayFifo<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// ============================================
// TESTS
// ============================================
