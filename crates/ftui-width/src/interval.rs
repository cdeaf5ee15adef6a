#![forbid(unsafe_code)]

//! Closed code-point intervals and the sorted tables built from them.
//!
//! Every width category is stored as an [`IntervalTable`]: a slice of
//! [`Interval`]s sorted ascending by `first`, with no two intervals
//! overlapping or touching. Membership is a fast rejection against the first
//! interval followed by an index-based binary search.
//!
//! # Example
//!
//! ```
//! use ftui_width::interval::{Interval, IntervalTable};
//!
//! static RANGES: [Interval; 2] = [Interval::new(0x41, 0x5a), Interval::new(0x61, 0x7a)];
//! let letters = IntervalTable::new(&RANGES);
//!
//! assert!(letters.contains('q' as u32));
//! assert!(!letters.contains('_' as u32));
//! assert!(letters.validate().is_ok());
//! ```

use std::fmt;

/// Highest valid Unicode scalar value.
pub const MAX_CODE_POINT: u32 = 0x10_FFFF;

/// A closed range `[first, last]` of code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub first: u32,
    pub last: u32,
}

impl Interval {
    #[must_use]
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Whether `code_point` lies within the interval (both ends inclusive).
    #[inline]
    #[must_use]
    pub const fn contains(self, code_point: u32) -> bool {
        self.first <= code_point && code_point <= self.last
    }
}

/// A sorted, disjoint sequence of intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTable<'a> {
    intervals: &'a [Interval],
}

impl<'a> IntervalTable<'a> {
    /// Wrap a slice that is already sorted and disjoint.
    ///
    /// The ordering is not checked here; call [`validate`](Self::validate)
    /// from data tooling or tests.
    #[must_use]
    pub const fn new(intervals: &'a [Interval]) -> Self {
        Self { intervals }
    }

    #[must_use]
    pub const fn intervals(&self) -> &'a [Interval] {
        self.intervals
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Lowest code point covered by the table.
    #[must_use]
    pub fn first_code_point(&self) -> Option<u32> {
        self.intervals.first().map(|interval| interval.first)
    }

    /// Binary-search membership test.
    ///
    /// Anything below the first interval is rejected without searching.
    /// An empty table contains nothing.
    #[must_use]
    pub fn contains(&self, code_point: u32) -> bool {
        let Some(head) = self.intervals.first() else {
            return false;
        };
        if code_point < head.first {
            return false;
        }

        // Half-open [bot, top) over interval indices.
        let mut bot = 0;
        let mut top = self.intervals.len();
        while bot < top {
            let mid = bot + (top - bot) / 2;
            let interval = self.intervals[mid];
            if code_point > interval.last {
                bot = mid + 1;
            } else if code_point < interval.first {
                top = mid;
            } else {
                return true;
            }
        }
        false
    }

    /// Check the table invariants: non-empty, well-formed, in range,
    /// strictly ascending, and with no overlapping or adjacent neighbours.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, scanning from the lowest interval.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.intervals.is_empty() {
            return Err(TableError::Empty);
        }

        for (index, interval) in self.intervals.iter().enumerate() {
            if interval.first > interval.last {
                return Err(TableError::Inverted {
                    index,
                    interval: *interval,
                });
            }
            if interval.last > MAX_CODE_POINT {
                return Err(TableError::OutOfRange {
                    index,
                    interval: *interval,
                });
            }
        }

        for (offset, pair) in self.intervals.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            let index = offset + 1;
            if next.first <= prev.last {
                return Err(TableError::Unordered { index, prev, next });
            }
            if next.first == prev.last + 1 {
                return Err(TableError::Adjacent { index, prev, next });
            }
        }

        Ok(())
    }
}

/// Whether `code_point` lies in any of `tables`.
///
/// Pure disjunction: stops at the first table that matches.
#[inline]
#[must_use]
pub fn any_contains(tables: &[IntervalTable<'_>], code_point: u32) -> bool {
    tables.iter().any(|table| table.contains(code_point))
}

/// A violation of the interval table invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The table has no intervals.
    Empty,
    /// An interval ends before it starts.
    Inverted { index: usize, interval: Interval },
    /// An interval extends past U+10FFFF.
    OutOfRange { index: usize, interval: Interval },
    /// An interval starts at or before the end of its predecessor.
    Unordered {
        index: usize,
        prev: Interval,
        next: Interval,
    },
    /// An interval starts right after its predecessor and should be merged.
    Adjacent {
        index: usize,
        prev: Interval,
        next: Interval,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "interval table is empty"),
            Self::Inverted { index, interval } => write!(
                f,
                "interval {index} is inverted: {:#06x} > {:#06x}",
                interval.first, interval.last
            ),
            Self::OutOfRange { index, interval } => write!(
                f,
                "interval {index} ends at {:#06x}, beyond U+10FFFF",
                interval.last
            ),
            Self::Unordered { index, prev, next } => write!(
                f,
                "interval {index} ({:#06x}..={:#06x}) overlaps or precedes ({:#06x}..={:#06x})",
                next.first, next.last, prev.first, prev.last
            ),
            Self::Adjacent { index, prev, next } => write!(
                f,
                "interval {index} ({:#06x}..={:#06x}) touches ({:#06x}..={:#06x}) and should be merged",
                next.first, next.last, prev.first, prev.last
            ),
        }
    }
}

impl std::error::Error for TableError {}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Sorted, disjoint, non-adjacent intervals built from positive gaps.
    fn arb_intervals() -> impl Strategy<Value = Vec<Interval>> {
        prop::collection::vec((2u32..64, 0u32..32), 1..40).prop_map(|steps| {
            let mut cursor = 0u32;
            steps
                .into_iter()
                .map(|(gap, span)| {
                    let first = cursor + gap;
                    let last = first + span;
                    cursor = last;
                    Interval::new(first, last)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn binary_search_matches_linear_scan(
            intervals in arb_intervals(),
            code_point in 0u32..4096,
        ) {
            let table = IntervalTable::new(&intervals);
            prop_assert!(table.validate().is_ok());
            let linear = intervals.iter().any(|interval| interval.contains(code_point));
            prop_assert_eq!(table.contains(code_point), linear);
        }
    }
}
