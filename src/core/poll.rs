//! Bounded polling for state transitions.

use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};

/// How often and how many times to poll before giving up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Sleep between two checks.
    pub interval: Duration,
    /// Checks allowed before the wait fails with [`Error::Timeout`].
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Worst-case time spent sleeping.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.interval.saturating_mul(self.max_attempts)
    }
}

/// Call `done` until it returns `true`, sleeping `policy.interval` between
/// checks. Errors raised by `done` abort the wait immediately.
///
/// # Errors
///
/// Returns [`Error::Timeout`] naming `what` when `max_attempts` checks all
/// returned `false`, or whatever error `done` produced.
pub fn wait_until<F>(what: &str, policy: PollPolicy, mut done: F) -> Result<()>
where
    F: FnMut() -> Result<bool>,
{
    for attempt in 1..=policy.max_attempts {
        if done()? {
            log::debug!("{what}: confirmed after {attempt} check(s)");
            return Ok(());
        }
        log::trace!("{what}: not yet ({attempt}/{})", policy.max_attempts);
        if attempt < policy.max_attempts {
            thread::sleep(policy.interval);
        }
    }

    Err(Error::Timeout {
        what: what.to_string(),
        after: policy.budget(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: PollPolicy = PollPolicy {
        interval: Duration::ZERO,
        max_attempts: 5,
    };

    #[test]
    fn test_wait_until_immediate() {
        let mut checks = 0;
        wait_until("test", FAST, || {
            checks += 1;
            Ok(true)
        })
        .unwrap();
        assert_eq!(checks, 1);
    }

    #[test]
    fn test_wait_until_after_retries() {
        let mut checks = 0;
        wait_until("test", FAST, || {
            checks += 1;
            Ok(checks == 3)
        })
        .unwrap();
        assert_eq!(checks, 3);
    }

    #[test]
    fn test_wait_until_times_out() {
        let mut checks = 0;
        let err = wait_until("disconnect", FAST, || {
            checks += 1;
            Ok(false)
        })
        .unwrap_err();
        assert_eq!(checks, 5);
        assert!(matches!(err, Error::Timeout { ref what, .. } if what == "disconnect"));
    }

    #[test]
    fn test_wait_until_propagates_errors() {
        let mut checks = 0;
        let err = wait_until("test", FAST, || {
            checks += 1;
            Err(Error::controller("states", "boom"))
        })
        .unwrap_err();
        assert_eq!(checks, 1);
        assert!(matches!(err, Error::Controller { .. }));
    }

    #[test]
    fn test_budget() {
        let policy = PollPolicy {
            interval: Duration::from_secs(1),
            max_attempts: 60,
        };
        assert_eq!(policy.budget(), Duration::from_secs(60));
    }
}
