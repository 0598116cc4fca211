use std::ops::Range;

/// Overlap of two half-open intervals, or `0..0` when they do not overlap.
pub fn intersect(a: Range<i32>, b: Range<i32>) -> Range<i32> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if start >= end { 0..0 } else { start..end }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn overlapping_and_disjoint() {
        assert_eq!(intersect(0..4, 2..6), 2..4);
        assert_eq!(intersect(2..6, 0..4), 2..4);
        assert_eq!(intersect(0..10, 3..5), 3..5);
        assert_eq!(intersect(0..2, 5..7), 0..0);
        assert_eq!(intersect(-3..-1, -2..4), -2..-1);
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert_eq!(intersect(0..2, 2..4), 0..0);
        assert_eq!(intersect(2..4, 0..2), 0..0);
    }

    #[test]
    fn empty_input_gives_empty_overlap() {
        assert_eq!(intersect(3..3, 0..10), 0..0);
    }

    proptest! {
        #[test]
        fn matches_brute_force(a0 in -20i32..20, al in 0i32..12, b0 in -20i32..20, bl in 0i32..12) {
            let (a, b) = (a0..a0 + al, b0..b0 + bl);
            let shared: Vec<i32> = a.clone().filter(|v| b.contains(v)).collect();
            let got = intersect(a, b);
            if shared.is_empty() {
                prop_assert_eq!(got, 0..0);
            } else {
                prop_assert_eq!(got, shared[0]..shared[shared.len() - 1] + 1);
            }
        }
    }
}
