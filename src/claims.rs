//! Claimed-range tracking for a single highlight pass
//!
//! First claim wins. Ranges are half-open byte ranges; touching ranges do not
//! overlap. A linear scan is enough for editor-sized buffers.

use std::ops::Range;

/// Check if two ranges overlap
pub fn ranges_overlap(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Ranges already assigned to a span during the current pass
#[derive(Debug, Clone, Default)]
pub struct ClaimedRanges {
    ranges: Vec<Range<usize>>,
}

impl ClaimedRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any claimed range overlaps `range`
    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        self.ranges.iter().any(|claimed| ranges_overlap(claimed, range))
    }

    /// Claim unconditionally
    pub fn claim(&mut self, range: Range<usize>) {
        self.ranges.push(range);
    }

    /// Claim `range` unless it overlaps an earlier claim. Returns whether the
    /// claim was taken.
    pub fn try_claim(&mut self, range: Range<usize>) -> bool {
        if self.overlaps(&range) {
            return false;
        }
        self.ranges.push(range);
        true
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_overlap() {
        assert!(ranges_overlap(&(0..10), &(5..15))); // Overlapping
        assert!(ranges_overlap(&(0..10), &(0..10))); // Identical
        assert!(ranges_overlap(&(2..4), &(0..10))); // Contained
        assert!(!ranges_overlap(&(0..10), &(10..20))); // Adjacent
        assert!(!ranges_overlap(&(0..10), &(15..20))); // Separate
    }

    #[test]
    fn test_first_claim_wins() {
        let mut claims = ClaimedRanges::new();
        assert!(claims.try_claim(0..10));
        assert!(!claims.try_claim(5..15));
        assert!(claims.try_claim(10..12));
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn test_unconditional_claim() {
        let mut claims = ClaimedRanges::new();
        claims.claim(0..5);
        claims.claim(3..8);
        assert_eq!(claims.len(), 2);
        assert!(claims.overlaps(&(7..9)));
        assert!(!claims.overlaps(&(8..9)));
    }
}
