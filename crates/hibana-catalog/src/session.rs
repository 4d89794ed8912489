//! Search-session discipline for interactive callers: a fixed debounce
//! quiet period before issuing a query, and a monotonic ticket guard so a
//! superseded request's late response never overwrites newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Quiet period after the last keystroke before a new free-text query is
/// issued. Exists to reduce request volume, not for correctness.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Wait out the debounce quiet period.
pub async fn debounce() {
    tokio::time::sleep(SEARCH_DEBOUNCE).await;
}

/// Last-request-wins guard for out-of-order responses.
///
/// Take a ticket with [`issue`](Self::issue) before each outbound query;
/// when the response arrives, apply it only if [`accept`](Self::accept)
/// still holds. The catalog client itself stays stateless; this is an
/// opt-in layer for callers that fire rapid successive queries.
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Call once per outbound query.
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while `ticket` is still the newest issued ticket.
    pub fn accept(&self, ticket: u64) -> bool {
        ticket == self.issued.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.accept(first));
        assert!(seq.accept(second));
        // A newer query supersedes an accepted-but-unapplied one too.
        let third = seq.issue();
        assert!(!seq.accept(second));
        assert!(seq.accept(third));
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let seq = RequestSequence::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_waits_quiet_period() {
        let start = tokio::time::Instant::now();
        debounce().await;
        assert_eq!(start.elapsed(), SEARCH_DEBOUNCE);
    }
}
