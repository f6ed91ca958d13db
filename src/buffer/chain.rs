//! # Node-Chain FIFO
//!
//! A fixed-capacity FIFO stored as a singly-linked chain of heap nodes.
//!
//! ## Plain English
//!
//! Picture a conga line. Everybody holds the shoulders of the person in
//! front of them. A newcomer grabs onto the last person; when the line is
//! too long, the leader simply walks away and the second person becomes
//! the new leader. Nobody else has to move.
//!
//! ## States
//!
//! ```text
//! empty        head = tail = None, len = 0
//! single-node  head = tail = Some(node), len = 1
//! multi-node   head != tail, len >= 2
//! ```
//!
//! Every add or evict touches a fixed number of links, so cost does not
//! depend on capacity. The price is one allocation per element.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use super::FifoBuffer;
use crate::capacity::Capacity;
use crate::error::{BufferError, BufferResult};

/// One storage cell in the chain.
struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

/// A fixed-capacity FIFO backed by a singly-linked node chain.
///
/// `head` owns the chain: every node owns its successor and the whole chain
/// is released through `head`. `tail` only points at the newest node so
/// appends don't have to walk the chain.
pub struct ChainFifo<T> {
    /// Oldest node, root of ownership
    head: Option<NonNull<Node<T>>>,

    /// Newest node, non-owning
    tail: Option<NonNull<Node<T>>>,

    /// Number of nodes in the chain
    len: usize,

    /// Maximum number of nodes
    capacity: Capacity,

    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: the chain is uniquely owned by the buffer, exactly like a
// `Vec<T>` or `LinkedList<T>`; no node is ever shared with another buffer.
unsafe impl<T: Send> Send for ChainFifo<T> {}
// SAFETY: `&ChainFifo<T>` only hands out `&T`.
unsafe impl<T: Sync> Sync for ChainFifo<T> {}

impl<T> ChainFifo<T> {
    /// Creates an empty buffer, validating the requested capacity.
    ///
    /// ## Example
    /// ```
    /// # use fifo_buffers::{BufferError, ChainFifo};
    /// let mut buffer = ChainFifo::new(2).unwrap();
    /// buffer.add('a');
    /// buffer.add('b');
    /// buffer.add('c');
    /// assert_eq!(buffer.to_vec(), vec!['b', 'c']);
    /// assert_eq!(ChainFifo::<char>::new(-1).unwrap_err(), BufferError::NegativeCapacity(-1));
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
            head: None,
            tail: None,
            len: 0,
            capacity,
            _owns: PhantomData,
        }
    }

    /// Adds an item after the current tail.
    ///
    /// ## What Happens (Plain English)
    ///
    /// 1. Empty buffer: the new node becomes both head and tail
    /// 2. Full buffer: the head is evicted first. With capacity 1 this
    ///    empties the chain, so the new node is installed as the only node
    /// 3. Otherwise: the new node is linked after the tail
    pub fn add(&mut self, item: T) {
        if self.is_full() {
            // Evicted value is dropped here
            self.pop_head();
        }
        self.push_tail(item);
    }

    /// Removes and returns the oldest item.
    pub fn get(&mut self) -> BufferResult<T> {
        self.pop_head().ok_or(BufferError::EmptyBuffer)
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity.get()
    }

    /// Returns the maximum capacity.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        while self.pop_head().is_some() {}
    }

    /// Returns the oldest item without removing it.
    pub fn peek_oldest(&self) -> Option<&T> {
        // SAFETY: head is a live node owned by self; the borrow is tied to &self.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns the newest item without removing it.
    pub fn peek_newest(&self) -> Option<&T> {
        // SAFETY: tail is a live node owned by self; the borrow is tied to &self.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    /// Returns an iterator over all items (oldest to newest).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    fn push_tail(&mut self, value: T) {
        let node = Box::new(Node { value, next: None });
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: tail points at the last live node and nothing else
            // borrows it while we hold &mut self.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    fn pop_head(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: head was leaked from a Box in push_tail and is
            // unlinked below, so ownership returns to this Box exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                // single-node -> empty
                self.tail = None;
            }
            self.len -= 1;
            node.value
        })
    }
}

impl<T: Clone> ChainFifo<T> {
    /// Returns cloned copies of all items (oldest first).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for ChainFifo<T> {
    fn drop(&mut self) {
        // Iterative so long chains don't recurse through nested drops
        self.clear();
    }
}

impl<T> FifoBuffer<T> for ChainFifo<T> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) {
        ChainFifo::add(self, item)
    }

    fn get(&mut self) -> BufferResult<T> {
        ChainFifo::get(self)
    }

    fn len(&self) -> usize {
        ChainFifo::len(self)
    }

    fn capacity(&self) -> usize {
        ChainFifo::capacity(self)
    }

    fn iter(&self) -> Self::Iter<'_> {
        ChainFifo::iter(self)
    }

    fn clear(&mut self) {
        ChainFifo::clear(self)
    }
}

impl<T: Clone> Clone for ChainFifo<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity);
        for item in self.iter() {
            copy.push_tail(item.clone());
        }
        copy
    }
}

impl<T: fmt::Debug> fmt::Debug for ChainFifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ChainFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a ChainFifo<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for ChainFifo<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buffer: self }
    }
}

// ============================================
// ITERATORS
// ============================================

/// Borrowing iterator over a [`ChainFifo`], oldest first.
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the chain cannot be mutated while this iterator
            // borrows the buffer, so every reachable node stays alive for 'a.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

// SAFETY: Iter only hands out `&T`, exactly like `slice::Iter`.
unsafe impl<T: Sync> Send for Iter<'_, T> {}
// SAFETY: as above; sharing the iterator only shares `&T`.
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
            _marker: PhantomData,
        }
    }
}

/// Consuming iterator over a [`ChainFifo`], oldest first.
pub struct IntoIter<T> {
    buffer: ChainFifo<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.buffer.pop_head()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len, Some(self.buffer.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

// ============================================
// TESTS
// ============================================
