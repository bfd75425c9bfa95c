//! Identifier issuing.
//!
//! Each resource kind has exactly one [`IdIssuer`]. It hands out
//! `prefix + n` from an atomic counter, so identifiers are unique by
//! construction rather than by chance, and it starts above every seeded
//! identifier so new records never shadow seed data.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier authority for one resource kind.
#[derive(Debug)]
pub struct IdIssuer {
    prefix: &'static str,
    next: AtomicU64,
}

impl IdIssuer {
    /// Creates an issuer whose first identifier is `prefix + start`.
    pub fn new(prefix: &'static str, start: u64) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(start),
        }
    }

    /// Creates an issuer that starts after the highest numeric suffix among
    /// `existing` identifiers carrying `prefix`.
    ///
    /// ```rust
    /// use questforce_core::ids::IdIssuer;
    ///
    /// let issuer = IdIssuer::above("q", ["q1", "q3", "q2"]);
    /// assert_eq!(issuer.issue(), "q4");
    /// assert_eq!(issuer.issue(), "q5");
    /// ```
    pub fn above<'a>(prefix: &'static str, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self::new(prefix, highest + 1)
    }

    /// Issues the next identifier.
    pub fn issue(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use super::*;

    #[test]
    fn test_above_ignores_foreign_ids() {
        let issuer = IdIssuer::above("sub_", ["sub_123", "legacy", "sub_abc"]);
        assert_eq!(issuer.issue(), "sub_124");
    }

    #[test]
    fn test_above_with_no_seed() {
        let issuer = IdIssuer::above("w", std::iter::empty::<&str>());
        assert_eq!(issuer.issue(), "w1");
    }

    #[test]
    fn test_unique_across_threads() {
        let issuer = Arc::new(IdIssuer::new("", 1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let issuer = Arc::clone(&issuer);
                thread::spawn(move || (0..250).map(|_| issuer.issue()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id issued");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
