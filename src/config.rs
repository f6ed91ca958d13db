//! # Configuration Module
//!
//! Settings for comparing the two buffer strategies.
//!
//! ## Plain English Explanation
//!
//! A comparison run answers "which buffer is faster for THIS capacity and
//! THIS amount of data?". The configuration lists:
//! - Which capacities to try
//! - How many items to push through each buffer
//!
//! Two presets reproduce the classic experiment: a tiny workload where the
//! array wins, and a huge one where the chain catches up.

use thiserror::Error;

use crate::capacity::Capacity;
use crate::error::BufferError;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for a comparison run
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Buffer capacities to compare, in order
    ///
    /// ## Plain English
    /// Each entry produces one line in the report. Signed so that bad
    /// values can be reported instead of silently wrapping.
    pub capacities: Vec<i64>,

    /// How many items are added to each buffer
    ///
    /// ## Limits
    /// - Minimum: 1
    /// - The same workload is reused for every capacity
    pub workload_size: usize,
}

impl Config {
    /// Small workload: 100 items against capacities 1, 50, 90 and 100.
    ///
    /// Contiguous storage usually wins here.
    pub fn small_workload() -> Self {
        Self {
            capacities: vec![1, 50, 90, 100],
            workload_size: 100,
        }
    }

    /// Large workload: ten million items against capacities 1, 500, 9000
    /// and 100000.
    ///
    /// ## When to Use
    /// To see the node chain overtake the array as eviction shifts grow.
    /// Takes a while in debug builds.
    pub fn large_workload() -> Self {
        Self {
            capacities: vec![1, 500, 9_000, 100_000],
            workload_size: 10_000_000,
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// ## Plain English
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacities.is_empty() {
            errors.push(ConfigError::NoCapacities);
        }

        for (index, &requested) in self.capacities.iter().enumerate() {
            if let Err(source) = Capacity::new(requested) {
                errors.push(ConfigError::InvalidCapacity {
                    index,
                    source: Box::new(source),
                });
            }
        }

        if self.workload_size == 0 {
            errors.push(ConfigError::EmptyWorkload);
        }

        errors
    }

    /// Returns the validated capacities, or the first problem found.
    pub fn validated_capacities(&self) -> Result<Vec<Capacity>, ConfigError> {
        if let Some(first) = self.validate().into_iter().next() {
            return Err(first);
        }

        // validate() already rejected every bad entry
        self.capacities
            .iter()
            .enumerate()
            .map(|(index, &requested)| {
                Capacity::new(requested).map_err(|source| ConfigError::InvalidCapacity {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }

    /// Total number of `add` calls a run performs (both strategies).
    pub fn total_adds(&self) -> u128 {
        self.capacities.len() as u128 * self.workload_size as u128 * 2
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::small_workload()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Nothing to compare
    #[error("At least one buffer capacity is required")]
    NoCapacities,

    /// One of the listed capacities failed validation
    #[error("Capacity #{index} is invalid: {source}")]
    InvalidCapacity {
        index: usize,
        #[source]
        source: Box<BufferError>,
    },

    /// Workload of zero items
    #[error("Workload size must be at least 1")]
    EmptyWorkload,

    /// Strategy name not recognised
    #[error("Unknown buffer strategy '{0}' (expected 'array' or 'chain')")]
    UnknownStrategy(String),
}

// ============================================
// TESTS
// ============================================
