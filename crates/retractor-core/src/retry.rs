//! Fixed-budget retry for network calls.
//!
//! The download stage tolerates up to [`MAX_RETRIES`] consecutive transient
//! failures per call (so six attempts in total) and then gives up. An
//! iterative loop, not recursion, so the budget never grows the call stack.

use crate::error::HttpError;

/// Retry ceiling: 5 retries = 6 attempts total.
pub const MAX_RETRIES: u32 = 5;

/// Retry a fallible network operation with a fixed attempt budget.
///
/// Transient errors are logged and retried immediately; fatal errors and
/// budget exhaustion return the final `Err`.
pub fn retry_fixed<T>(
    label: &str,
    mut attempt_fn: impl FnMut() -> Result<T, HttpError>,
) -> Result<T, HttpError> {
    let mut attempt = 0u32;
    loop {
        match attempt_fn() {
            Ok(v) => return Ok(v),
            Err(e) if attempt < MAX_RETRIES && e.is_transient() => {
                attempt += 1;
                log::warn!("{label}: connection error, retrying {attempt}/{MAX_RETRIES}: {e}");
            }
            Err(e) => {
                log::error!("{label}: failed permanently: {e}");
                return Err(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transient() -> HttpError {
        HttpError::Http {
            status: None,
            message: "connection reset".to_string(),
        }
    }

    fn fatal() -> HttpError {
        HttpError::Http {
            status: Some(404),
            message: "not found".to_string(),
        }
    }

    #[test]
    fn first_success_no_retry() {
        let mut calls = 0;
        let result = retry_fixed("test", || {
            calls += 1;
            Ok::<_, HttpError>(42)
        });
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[test]
    fn recovers_after_transient_failures() {
        let mut calls = 0;
        let result = retry_fixed("test", || {
            calls += 1;
            if calls < 3 { Err(transient()) } else { Ok(7) }
        });
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls, 3);
    }

    #[test]
    fn budget_exhaustion_is_six_attempts() {
        let mut calls = 0;
        let result: Result<(), _> = retry_fixed("test", || {
            calls += 1;
            Err(transient())
        });
        assert!(result.is_err());
        assert_eq!(calls, 6);
    }

    #[test]
    fn fatal_error_not_retried() {
        let mut calls = 0;
        let result: Result<(), _> = retry_fixed("test", || {
            calls += 1;
            Err(fatal())
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }
}
