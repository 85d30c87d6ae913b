//! Kept ranges of the original document.
//!
//! A [`FragmentRange`] names one contiguous span of the original document that the fragmented
//! view keeps. The translator walks a `&[FragmentRange]` that must be ordered by `start` and
//! pairwise disjoint; that contract is not enforced on the default path (results are
//! unspecified for malformed input), and [`validate_ranges`] checks it for callers that want to
//! fail fast instead.

/// A kept contiguous span of the original document, as a half-open `[start, end)` character
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentRange {
    /// Start character offset in the original document (inclusive).
    pub start: usize,
    /// End character offset in the original document (exclusive).
    pub end: usize,
}

impl FragmentRange {
    /// Create a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the range in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if the range contains an original-document offset.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Range validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// A range's `end` precedes its `start`.
    Inverted {
        /// Index of the offending range.
        index: usize,
    },
    /// A range starts before the previous range.
    OutOfOrder {
        /// Index of the offending range.
        index: usize,
    },
    /// A range overlaps the previous range.
    Overlapping {
        /// Index of the offending range.
        index: usize,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeError::Inverted { index } => {
                write!(f, "range {} has end before start", index)
            }
            RangeError::OutOfOrder { index } => {
                write!(f, "range {} starts before the previous range", index)
            }
            RangeError::Overlapping { index } => {
                write!(f, "range {} overlaps the previous range", index)
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Check that `ranges` are well-formed, ordered by `start`, and pairwise disjoint.
///
/// Touching ranges (`prev.end == next.start`) are disjoint and accepted. The first offending
/// range's index is reported; an empty list is trivially valid.
pub fn validate_ranges(ranges: &[FragmentRange]) -> Result<(), RangeError> {
    for (index, range) in ranges.iter().enumerate() {
        if range.end < range.start {
            return Err(RangeError::Inverted { index });
        }
        if index > 0 {
            let prev = &ranges[index - 1];
            if range.start < prev.start {
                return Err(RangeError::OutOfOrder { index });
            }
            if range.start < prev.end {
                return Err(RangeError::Overlapping { index });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_basics() {
        let range = FragmentRange::new(3, 8);
        assert_eq!(range.len(), 5);
        assert!(!range.is_empty());
        assert!(range.contains(3));
        assert!(range.contains(7));
        assert!(!range.contains(8));
        assert!(!range.contains(2));

        assert!(FragmentRange::new(4, 4).is_empty());
        assert_eq!(FragmentRange::new(4, 4).len(), 0);
    }

    #[test]
    fn test_validate_accepts_ordered_disjoint() {
        let ranges = [
            FragmentRange::new(0, 5),
            FragmentRange::new(5, 8),
            FragmentRange::new(10, 12),
        ];
        assert!(validate_ranges(&ranges).is_ok());
        assert!(validate_ranges(&[]).is_ok());
        assert!(validate_ranges(&[FragmentRange::new(7, 7)]).is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted() {
        let ranges = [FragmentRange::new(0, 5), FragmentRange::new(9, 7)];
        assert_eq!(
            validate_ranges(&ranges),
            Err(RangeError::Inverted { index: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_out_of_order() {
        let ranges = [FragmentRange::new(5, 8), FragmentRange::new(0, 3)];
        assert_eq!(
            validate_ranges(&ranges),
            Err(RangeError::OutOfOrder { index: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let ranges = [FragmentRange::new(0, 5), FragmentRange::new(4, 9)];
        assert_eq!(
            validate_ranges(&ranges),
            Err(RangeError::Overlapping { index: 1 })
        );
    }
}
