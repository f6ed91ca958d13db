//! # Capacity Validation
//!
//! Shared validation for buffer capacities.
//!
//! ## Plain English
//!
//! Before a buffer is built we check that the requested size makes sense:
//! a positive whole number. Once a `Capacity` exists it can never be zero,
//! so everything built from one can skip the check.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::{BufferError, BufferResult};

// ============================================
// CAPACITY
// ============================================

/// A validated, positive buffer capacity.
///
/// ## Example
/// ```
/// # use fifo_buffers::{BufferError, Capacity};
/// assert_eq!(Capacity::new(3).unwrap().get(), 3);
/// assert_eq!(Capacity::new(0), Err(BufferError::ZeroCapacity));
/// assert_eq!(Capacity::new(-2), Err(BufferError::NegativeCapacity(-2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validates a requested capacity.
    ///
    /// ## Returns
    /// - `ZeroCapacity` for 0
    /// - `NegativeCapacity` for anything below 0
    /// - `InvalidCapacityType` if the value does not fit in `usize`
    pub fn new(requested: i64) -> BufferResult<Self> {
        if requested == 0 {
            return Err(BufferError::ZeroCapacity);
        }
        if requested < 0 {
            return Err(BufferError::NegativeCapacity(requested));
        }

        let value = usize::try_from(requested)
            .map_err(|_| BufferError::InvalidCapacityType(requested.to_string()))?;
        Self::from_usize(value)
    }

    /// Validates an unsigned capacity. Only zero is rejected.
    pub fn from_usize(requested: usize) -> BufferResult<Self> {
        NonZeroUsize::new(requested)
            .map(Self)
            .ok_or(BufferError::ZeroCapacity)
    }

    /// Returns the capacity as a plain number.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> Self {
        capacity.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a capacity from text.
///
/// Anything that is not a whole number (`"2.5"`, `"ten"`, `""`) is an
/// `InvalidCapacityType`; whole numbers go through [`Capacity::new`].
/// Positive numbers too large for `usize` are also `InvalidCapacityType`.
/// Negative numbers below `i64::MIN` are reported as
/// `NegativeCapacity(i64::MIN)`.
impl FromStr for Capacity {
    type Err = BufferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(value) => Self::new(value),
            // Larger than i64 but still a whole number
            Err(_) if is_whole_number(trimmed) && !trimmed.starts_with('-') => {
                let value = trimmed
                    .trim_start_matches('+')
                    .parse::<usize>()
                    .map_err(|_| BufferError::InvalidCapacityType(trimmed.to_string()))?;
                Self::from_usize(value)
            }
            // Clamped: the payload is i64
            Err(_) if is_whole_number(trimmed) => Err(BufferError::NegativeCapacity(i64::MIN)),
            Err(_) => Err(BufferError::InvalidCapacityType(trimmed.to_string())),
        }
    }
}

fn is_whole_number(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// Every primitive integer converts through the same validation.
macro_rules! impl_try_from_signed {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Capacity {
                type Error = BufferError;

                fn try_from(requested: $ty) -> Result<Self, Self::Error> {
                    match i64::try_from(requested) {
                        Ok(value) => Self::new(value),
                        Err(_) => Err(BufferError::InvalidCapacityType(requested.to_string())),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_try_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Capacity {
                type Error = BufferError;

                fn try_from(requested: $ty) -> Result<Self, Self::Error> {
                    let value = usize::try_from(requested)
                        .map_err(|_| BufferError::InvalidCapacityType(requested.to_string()))?;
                    Self::from_usize(value)
                }
            }
        )*
    };
}

impl_try_from_signed!(i8, i16, i32, i64, isize);
impl_try_from_unsigned!(u8, u16, u32, u64, usize);

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_capacity() {
        let capacity = Capacity::new(5).unwrap();
        assert_eq!(capacity.get(), 5);
        assert_eq!(capacity.to_string(), "5");
    }

    #[test]
    fn test_zero_capacity() {
        assert_eq!(Capacity::new(0), Err(BufferError::ZeroCapacity));
        assert_eq!(Capacity::from_usize(0), Err(BufferError::ZeroCapacity));
        assert_eq!(Capacity::try_from(0u8), Err(BufferError::ZeroCapacity));
    }

    #[test]
    fn test_negative_capacity() {
        assert_eq!(Capacity::new(-1), Err(BufferError::NegativeCapacity(-1)));
        assert_eq!(
            Capacity::try_from(-7i32),
            Err(BufferError::NegativeCapacity(-7))
        );
    }

    #[test]
    fn test_try_from_integers() {
        assert_eq!(Capacity::try_from(3i32).unwrap().get(), 3);
        assert_eq!(Capacity::try_from(3u64).unwrap().get(), 3);
        assert_eq!(Capacity::try_from(3usize).unwrap().get(), 3);
        assert_eq!(Capacity::try_from(3isize).unwrap().get(), 3);
    }

    #[test]
    fn test_parse_from_text() {
        assert_eq!(" 42 ".parse::<Capacity>().unwrap().get(), 42);
        assert_eq!("0".parse::<Capacity>(), Err(BufferError::ZeroCapacity));
        assert_eq!(
            "-3".parse::<Capacity>(),
            Err(BufferError::NegativeCapacity(-3))
        );
    }

    #[test]
    fn test_parse_rejects_non_whole_numbers() {
        for input in ["2.5", "ten", "", "1e3", "--1"] {
            match input.parse::<Capacity>() {
                Err(BufferError::InvalidCapacityType(_)) => {} // Expected
                other => panic!("{:?} should be invalid, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_parse_huge_negative_is_negative() {
        assert_eq!(
            "-99999999999999999999".parse::<Capacity>(),
            Err(BufferError::NegativeCapacity(i64::MIN))
        );
    }

    #[test]
    fn test_parse_too_large_for_usize() {
        let input = "99999999999999999999999";
        assert_eq!(
            input.parse::<Capacity>(),
            Err(BufferError::InvalidCapacityType(input.to_string()))
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_usize_max_is_accepted() {
        let parsed: Capacity = "18446744073709551615".parse().unwrap();
        assert_eq!(parsed.get(), usize::MAX);

        let converted = Capacity::try_from(u64::MAX).unwrap();
        assert_eq!(converted.get(), usize::MAX);
        assert_eq!(parsed, converted);
    }

    #[test]
    fn test_ordering() {
        let small = Capacity::new(1).unwrap();
        let large = Capacity::new(100).unwrap();
        assert!(small < large);
        assert_eq!(usize::from(large), 100);
    }
}
