//! # Strategy Comparison
//!
//! Times the two buffer strategies against each other.
//!
//! ## Plain English
//!
//! We build one list of numbers, push it through a fresh chain buffer and
//! a fresh array buffer of the same capacity, and stopwatch both. Whoever
//! finishes first wins that capacity.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::buffer::{ArrayFifo, ChainFifo, FifoBuffer, Strategy};
use crate::capacity::Capacity;
use crate::config::Config;
use crate::error::BufferResult;

// ============================================
// WORKLOAD
// ============================================

/// Builds the sequential workload `0, 1, ..., size - 1`.
pub fn sequential_workload(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

/// Adds every item of `workload` to `buffer` and returns how long it took.
pub fn time_adds<B>(buffer: &mut B, workload: &[u64]) -> Duration
where
    B: FifoBuffer<u64>,
{
    let start = Instant::now();
    for &item in workload {
        buffer.add(black_box(item));
    }
    start.elapsed()
}

// ============================================
// COMPARISON RESULT
// ============================================

/// Timing of both strategies for one capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Capacity both buffers were built with
    pub capacity: Capacity,
    /// Number of items added to each buffer
    pub workload_size: usize,
    /// Time spent adding to the array buffer
    pub array: Duration,
    /// Time spent adding to the chain buffer
    pub chain: Duration,
}

impl Comparison {
    /// Returns the faster strategy, or `None` on an exact tie.
    pub fn winner(&self) -> Option<Strategy> {
        match self.array.cmp(&self.chain) {
            std::cmp::Ordering::Less => Some(Strategy::Array),
            std::cmp::Ordering::Greater => Some(Strategy::Chain),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// How much faster the winner was.
    pub fn margin(&self) -> Duration {
        if self.array > self.chain {
            self.array - self.chain
        } else {
            self.chain - self.array
        }
    }

    /// Elapsed time for one strategy.
    pub fn elapsed(&self, strategy: Strategy) -> Duration {
        match strategy {
            Strategy::Array => self.array,
            Strategy::Chain => self.chain,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity {:>7} | workload {:>9} | ",
            self.capacity, self.workload_size
        )?;
        match self.winner() {
            Some(winner) => write!(
                f,
                "{} faster by {} ns",
                winner,
                self.margin().as_nanos()
            ),
            None => write!(f, "both took the same time"),
        }
    }
}

// ============================================
// RUNNING COMPARISONS
// ============================================

/// Times both strategies at one capacity on the same workload.
///
/// The chain buffer runs first, then the array buffer; each starts empty.
pub fn compare(capacity: Capacity, workload: &[u64]) -> Comparison {
    let mut chain = ChainFifo::with_capacity(capacity);
    let chain_elapsed = time_adds(&mut chain, workload);

    let mut array = ArrayFifo::with_capacity(capacity);
    let array_elapsed = time_adds(&mut array, workload);

    Comparison {
        capacity,
        workload_size: workload.len(),
        array: array_elapsed,
        chain: chain_elapsed,
    }
}

/// Runs every capacity in `config` and returns one comparison per entry.
///
/// ## Returns
/// The comparisons in configuration order, or the first configuration
/// problem found.
pub fn run(config: &Config) -> BufferResult<Vec<Comparison>> {
    let capacities = config.validated_capacities().map_err(|err| {
        warn!("Rejected comparison config: {}", err);
        err
    })?;

    info!(
        "Comparing {} capacities over {} items ({} adds total)",
        capacities.len(),
        config.workload_size,
        config.total_adds()
    );

    let workload = sequential_workload(config.workload_size);

    let results = capacities
        .into_iter()
        .map(|capacity| {
            let comparison = compare(capacity, &workload);
            info!("{}", comparison);
            comparison
        })
        .collect();

    Ok(results)
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::error::BufferError;

    fn comparison(array_ns: u64, chain_ns: u64) -> Comparison {
        Comparison {
            capacity: Capacity::new(10).unwrap(),
            workload_size: 100,
            array: Duration::from_nanos(array_ns),
            chain: Duration::from_nanos(chain_ns),
        }
    }

    #[test]
    fn test_sequential_workload() {
        assert_eq!(sequential_workload(4), vec![0, 1, 2, 3]);
        assert!(sequential_workload(0).is_empty());
    }

    #[test]
    fn test_time_adds_fills_buffer() {
        let mut buffer = ArrayFifo::new(3).unwrap();
        time_adds(&mut buffer, &sequential_workload(10));
        assert_eq!(buffer.to_vec(), vec![7, 8, 9]);
    }

    #[test]
    fn test_winner_and_margin() {
        let array_wins = comparison(100, 250);
        assert_eq!(array_wins.winner(), Some(Strategy::Array));
        assert_eq!(array_wins.margin(), Duration::from_nanos(150));

        let chain_wins = comparison(400, 100);
        assert_eq!(chain_wins.winner(), Some(Strategy::Chain));
        assert_eq!(chain_wins.elapsed(Strategy::Chain), Duration::from_nanos(100));

        let tie = comparison(50, 50);
        assert_eq!(tie.winner(), None);
        assert_eq!(tie.margin(), Duration::ZERO);
    }

    #[test]
    fn test_report_line() {
        let line = comparison(100, 250).to_string();
        assert!(line.contains("capacity"));
        assert!(line.contains("array faster by 150 ns"));

        let line = comparison(7, 7).to_string();
        assert!(line.contains("same time"));
    }

    #[test]
    fn test_run_default_config() {
        let config = Config::default();
        let results = run(&config).unwrap();

        assert_eq!(results.len(), 4);
        let capacities: Vec<usize> = results.iter().map(|c| c.capacity.get()).collect();
        assert_eq!(capacities, vec![1, 50, 90, 100]);
        assert!(results.iter().all(|c| c.workload_size == 100));
    }

    #[test]
    fn test_run_rejects_bad_config() {
        let config = Config {
            capacities: vec![],
            workload_size: 10,
        };
        assert_eq!(
            run(&config),
            Err(BufferError::Config(ConfigError::NoCapacities))
        );
    }
}
