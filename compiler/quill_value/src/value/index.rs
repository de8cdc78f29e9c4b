//! Rolling index normalization.
//!
//! Quill indexes wrap around: `-1` is the last element, `len` is the first
//! again, and any magnitude keeps wrapping. `normalize_index` maps an
//! arbitrary signed index onto `[0, len)`.

use crate::errors::{division_by_zero, EvalResult};

/// Map `idx` onto a position in `[0, len)`.
///
/// In-range indexes are returned unchanged. Anything else is shifted by a
/// multiple of `len` large enough to make it non-negative, then reduced
/// modulo `len`. Fails with an arithmetic fault when `len == 0`.
pub fn normalize_index(idx: i64, len: usize) -> EvalResult<usize> {
    if len == 0 {
        return Err(division_by_zero("list index normalization"));
    }
    if let Ok(pos) = usize::try_from(idx) {
        if pos < len {
            return Ok(pos);
        }
    }

    // i128 holds |i64::MIN| + 2 * usize::MAX without overflow.
    let wide_len = i128::try_from(len).map_err(|_| division_by_zero("list index normalization"))?;
    let wide_idx = i128::from(idx);
    let wraps = wide_idx.abs() / wide_len;
    let shifted = wide_idx + (wraps + 2) * wide_len;
    let pos = shifted % wide_len;

    usize::try_from(pos).map_err(|_| division_by_zero("list index normalization"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn in_range_is_unchanged() {
        for i in 0..5 {
            assert_eq!(normalize_index(i, 5).unwrap(), usize::try_from(i).unwrap());
        }
    }

    #[test]
    fn negative_counts_from_end() {
        assert_eq!(normalize_index(-1, 5).unwrap(), 4);
        assert_eq!(normalize_index(-5, 5).unwrap(), 0);
        assert_eq!(normalize_index(-6, 5).unwrap(), 4);
    }

    #[test]
    fn past_end_wraps_to_front() {
        assert_eq!(normalize_index(5, 5).unwrap(), 0);
        assert_eq!(normalize_index(7, 5).unwrap(), 2);
        assert_eq!(normalize_index(1_000_003, 5).unwrap(), 3);
    }

    #[test]
    fn large_negative_magnitudes_wrap_repeatedly() {
        assert_eq!(normalize_index(-1_000_001, 5).unwrap(), 4);
        assert_eq!(normalize_index(-17, 3).unwrap(), 1);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(normalize_index(i64::MIN, 7).unwrap() < 7);
        assert!(normalize_index(i64::MAX, 7).unwrap() < 7);
        assert_eq!(normalize_index(i64::MIN, 1).unwrap(), 0);
    }

    #[test]
    fn zero_length_is_arithmetic_fault() {
        let err = normalize_index(0, 0).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::ArithmeticFault { .. }));
    }

    #[test]
    fn matches_euclidean_remainder() {
        for idx in -40i64..40 {
            for len in 1..9usize {
                let expected = idx.rem_euclid(i64::try_from(len).unwrap());
                assert_eq!(
                    normalize_index(idx, len).unwrap(),
                    usize::try_from(expected).unwrap(),
                    "idx={idx} len={len}"
                );
            }
        }
    }
}
