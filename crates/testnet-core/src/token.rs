//! Monotonic request tokens.
//!
//! Each field the session mutates asynchronously (connection, balance) owns a
//! [`TokenCounter`]. Issuing a request bumps the counter; when the response
//! arrives it may only be applied if its token is still the latest one.
//! Invalidating bumps the counter without handing out a token, which orphans
//! every in-flight request.

use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque ticket for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Issues strictly increasing tokens for a single field.
#[derive(Debug, Default)]
pub struct TokenCounter {
    latest: AtomicU64,
}

impl TokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new token, superseding all previous ones.
    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `token` is still the most recently issued one.
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::SeqCst) == token.0
    }

    /// Supersede every outstanding token.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase() {
        let counter = TokenCounter::new();
        let a = counter.issue();
        let b = counter.issue();
        assert!(b > a);
        assert!(!counter.is_latest(a));
        assert!(counter.is_latest(b));
    }

    #[test]
    fn invalidate_orphans_outstanding_token() {
        let counter = TokenCounter::new();
        let token = counter.issue();
        counter.invalidate();
        assert!(!counter.is_latest(token));

        let next = counter.issue();
        assert!(counter.is_latest(next));
    }
}
