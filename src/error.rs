//! # Error Types Module
//!
//! This module defines the error types used by the FIFO buffers.
//!
//! ## Plain English Explanation
//!
//! Only two things can go wrong with a bounded buffer:
//!
//! - "You asked for a buffer that can hold nothing (or less than nothing)"
//! - "You asked for an element but the buffer is empty"
//!
//! The first kind happens once, while building the buffer. The second can
//! happen at any time and the caller is expected to recover from it.

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN ERROR
// ============================================

/// The main error type for the FIFO buffers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A capacity of zero was requested
    ///
    /// ## What This Means
    /// A buffer that holds nothing would evict every element on arrival.
    #[error("Buffer capacity cannot be zero")]
    ZeroCapacity,

    /// A negative capacity was requested
    ///
    /// Values below `i64::MIN` (only reachable from text) are clamped to it.
    #[error("Buffer capacity cannot be negative (got {0})")]
    NegativeCapacity(i64),

    /// The requested capacity is not a whole number that fits in `usize`
    ///
    /// ## Examples
    /// - `"2.5"` or `"ten"` parsed from text
    /// - A `u64` larger than `usize::MAX` on a 32-bit target
    #[error("Invalid buffer capacity: {0}")]
    InvalidCapacityType(String),

    /// `get()` was called on a buffer with no elements
    ///
    /// ## What This Means
    /// Check `len()` or `is_empty()` first, or handle this error.
    #[error("Cannot take an element from an empty buffer")]
    EmptyBuffer,

    /// Something is wrong with a comparison configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses BufferError
///
/// ## Plain English
///
/// This is a shorthand. Instead of writing:
/// ```text
/// fn get(&mut self) -> Result<T, BufferError>
/// ```
/// We can write:
/// ```text
/// fn get(&mut self) -> BufferResult<T>
/// ```
pub type BufferResult<T> = Result<T, BufferError>;

// ============================================
// TESTS
// ============================================
