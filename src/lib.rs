//! # FIFO Buffers
//!
//! Fixed-capacity first-in-first-out buffers that evict their oldest element
//! when full, in two interchangeable storage layouts.
//!
//! ## Architecture Overview
//!
//! The crate is structured into independent modules:
//!
//! - `capacity`: Validation shared by every buffer constructor
//! - `buffer`: The array-backed and node-chain buffers and their shared contract
//! - `compare`: Timing the two layouts against each other
//! - `config`: Settings for comparison runs
//! - `error`: Error types
//!
//! ## Quick Start
//!
//! ```
//! use fifo_buffers::{ArrayFifo, ChainFifo};
//!
//! let mut array = ArrayFifo::new(3).unwrap();
//! let mut chain = ChainFifo::new(3).unwrap();
//! for value in [10, 20, 30, 40] {
//!     array.add(value);
//!     chain.add(value);
//! }
//! assert_eq!(array.to_vec(), vec![20, 30, 40]);
//! assert_eq!(chain.to_vec(), vec![20, 30, 40]);
//! assert_eq!(chain.get(), Ok(20));
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod capacity;
pub mod compare;
pub mod config;
pub mod error;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{ArrayFifo, ChainFifo, Fifo, FifoBuffer, Strategy};
pub use capacity::Capacity;
pub use compare::Comparison;
pub use config::{Config, ConfigError};
pub use error::{BufferError, BufferResult};

// ============================================
// LOGGING
// ============================================

/// Initialize logging for the platform.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}

// ============================================
// TESTS
// ============================================
