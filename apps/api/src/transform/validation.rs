//! Word-limit validation — the authoritative server-side guard.
//!
//! The browser form runs the same check before submitting, but only as a UX
//! shortcut; callers are not trusted to be well-behaved.

use crate::errors::AppError;

/// Literal message the UI renders when the bounds are inconsistent.
pub const INCONSISTENT_BOUNDS: &str = "Max word limit cannot be less than min word limit.";

/// Rejects iff both bounds are present and `max < min`. Equal bounds are a
/// degenerate exact-count request and pass. Absent bounds are unconstrained.
/// No other numeric validation happens here: the payload type is unsigned and
/// the form inputs floor at 1, so negatives never arrive and zero is ignored
/// at composition time.
pub fn check_word_limits(max: Option<u32>, min: Option<u32>) -> Result<(), AppError> {
    match (max, min) {
        (Some(max), Some(min)) if max < min => {
            Err(AppError::Validation(INCONSISTENT_BOUNDS.to_string()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_max_below_min_with_literal_message() {
        let err = check_word_limits(Some(5), Some(20)).unwrap_err();
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Max word limit cannot be less than min word limit.")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_equal_bounds() {
        assert!(check_word_limits(Some(50), Some(50)).is_ok());
    }

    #[test]
    fn accepts_max_above_min() {
        assert!(check_word_limits(Some(250), Some(50)).is_ok());
    }

    #[test]
    fn accepts_when_either_bound_is_absent() {
        assert!(check_word_limits(None, Some(50)).is_ok());
        assert!(check_word_limits(Some(250), None).is_ok());
        assert!(check_word_limits(None, None).is_ok());
    }
}
