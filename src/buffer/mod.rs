//! # FIFO Buffer Module
//!
//! Bounded FIFO buffers that evict their oldest element when full.
//!
//! ## Plain English Explanation
//!
//! Imagine a shelf with room for exactly N boxes. New boxes always go on the
//! right. When the shelf is full, the leftmost (oldest) box is thrown out
//! before the new one goes on.
//!
//! There are two ways to build that shelf:
//! 1. [`ArrayFifo`]: one contiguous row. Cheap to read, but throwing out the
//!    leftmost box means sliding every other box over.
//! 2. [`ChainFifo`]: boxes tied together with string. Throwing out the
//!    oldest box is just cutting one string, but every box is a separate
//!    allocation.
//!
//! Both behave identically from the outside, so code can be written once
//! against [`FifoBuffer`] and run on either.

mod array;
mod chain;

pub use array::ArrayFifo;
pub use chain::{ChainFifo, IntoIter as ChainIntoIter, Iter as ChainIter};

use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::str::FromStr;

use crate::capacity::Capacity;
use crate::config::ConfigError;
use crate::error::BufferResult;

// ============================================
// SHARED CONTRACT
// ============================================

/// The behaviour every bounded FIFO buffer provides.
///
/// ## Invariants
/// - `len() <= capacity()` after every call
/// - `add` on a full buffer evicts the oldest element first
/// - `iter` yields oldest to newest and never changes the buffer
pub trait FifoBuffer<T> {
    /// Borrowing iterator, oldest first
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Appends an item, evicting the oldest one if the buffer is full.
    fn add(&mut self, item: T);

    /// Removes and returns the oldest item, or `EmptyBuffer`.
    fn get(&mut self) -> BufferResult<T>;

    /// Number of items currently held.
    fn len(&self) -> usize;

    /// Maximum number of items.
    fn capacity(&self) -> usize;

    /// Starts a fresh front-to-back traversal.
    fn iter(&self) -> Self::Iter<'_>;

    /// Removes every item.
    fn clear(&mut self);

    /// True when no items are held.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the next `add` will evict.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}

// ============================================
// STORAGE STRATEGY
// ============================================

/// Which storage layout a buffer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Contiguous vector, front removal shifts
    #[default]
    Array,

    /// Singly-linked node chain, front removal relinks
    Chain,
}

impl Strategy {
    /// Both strategies, in the order they are usually reported.
    pub const ALL: [Strategy; 2] = [Strategy::Array, Strategy::Chain];

    /// Short lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Chain => "chain",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "list" | "vec" => Ok(Self::Array),
            "chain" | "linked" | "linked-list" => Ok(Self::Chain),
            _ => Err(ConfigError::UnknownStrategy(s.trim().to_string())),
        }
    }
}

// ============================================
// EITHER-STRATEGY BUFFER
// ============================================

/// A buffer whose storage strategy is picked at runtime.
///
/// ## Example
/// ```
/// # use fifo_buffers::{Capacity, Fifo, FifoBuffer, Strategy};
/// let capacity = Capacity::new(2).unwrap();
/// let mut buffer = Fifo::new(Strategy::Chain, capacity);
/// buffer.add(1);
/// buffer.add(2);
/// buffer.add(3);
/// assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Clone, Debug)]
pub enum Fifo<T> {
    Array(ArrayFifo<T>),
    Chain(ChainFifo<T>),
}

impl<T> Fifo<T> {
    /// Creates an empty buffer with the given strategy.
    pub fn new(strategy: Strategy, capacity: Capacity) -> Self {
        log::debug!("Creating {} buffer with capacity {}", strategy, capacity);

        match strategy {
            Strategy::Array => Self::Array(ArrayFifo::with_capacity(capacity)),
            Strategy::Chain => Self::Chain(ChainFifo::with_capacity(capacity)),
        }
    }

    /// Returns the storage strategy in use.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Array(_) => Strategy::Array,
            Self::Chain(_) => Strategy::Chain,
        }
    }
}

impl<T: Clone> Fifo<T> {
    /// Returns cloned copies of all items (oldest first).
    pub fn to_vec(&self) -> Vec<T> {
        match self {
            Self::Array(buffer) => buffer.to_vec(),
            Self::Chain(buffer) => buffer.to_vec(),
        }
    }
}

impl<T> FifoBuffer<T> for Fifo<T> {
    type Iter<'a>
        = FifoIter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn add(&mut self, item: T) {
        match self {
            Self::Array(buffer) => buffer.add(item),
            Self::Chain(buffer) => buffer.add(item),
        }
    }

    fn get(&mut self) -> BufferResult<T> {
        match self {
            Self::Array(buffer) => buffer.get(),
            Self::Chain(buffer) => buffer.get(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Array(buffer) => buffer.len(),
            Self::Chain(buffer) => buffer.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Self::Array(buffer) => buffer.capacity(),
            Self::Chain(buffer) => buffer.capacity(),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        match self {
            Self::Array(buffer) => FifoIter::Array(buffer.iter()),
            Self::Chain(buffer) => FifoIter::Chain(buffer.iter()),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Array(buffer) => buffer.clear(),
            Self::Chain(buffer) => buffer.clear(),
        }
    }
}

impl<T> Extend<T> for Fifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match self {
            Self::Array(buffer) => buffer.extend(iter),
            Self::Chain(buffer) => buffer.extend(iter),
        }
    }
}

/// Borrowing iterator over a [`Fifo`], oldest first.
pub enum FifoIter<'a, T> {
    Array(slice::Iter<'a, T>),
    Chain(ChainIter<'a, T>),
}

impl<'a, T> Iterator for FifoIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(iter) => iter.next(),
            Self::Chain(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Array(iter) => iter.size_hint(),
            Self::Chain(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for FifoIter<'_, T> {}
impl<T> FusedIterator for FifoIter<'_, T> {}

// ============================================
// TESTS
// ============================================
