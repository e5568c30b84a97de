//! Per-process unique invite identifiers.

use std::sync::atomic::{AtomicI64, Ordering};

static LAST_UID: AtomicI64 = AtomicI64::new(i64::MIN);

/// Returns a millisecond stamp for a new UID.
///
/// Usually `now_millis`; when two invites are generated within the same
/// millisecond (or the clock steps back) the previous value plus one is
/// used, so values are strictly increasing within the process.
pub fn next_uid_millis(now_millis: i64) -> i64 {
    let previous = LAST_UID
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
            Some(now_millis.max(last.saturating_add(1)))
        })
        .unwrap_or_else(|last| last);
    now_millis.max(previous.saturating_add(1))
}

/// Formats a UID as `<millis>@<domain>`.
pub fn format_uid(millis: i64, domain: &str) -> String {
    format!("{millis}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_increasing_for_same_clock() {
        let a = next_uid_millis(1_000);
        let b = next_uid_millis(1_000);
        let c = next_uid_millis(1_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn never_goes_backwards() {
        let a = next_uid_millis(5_000_000_000_000);
        let b = next_uid_millis(1);
        assert!(b > a);
    }

    #[test]
    fn unique_across_threads() {
        let mut all: Vec<i64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| (0..250).map(|_| next_uid_millis(42)).collect::<Vec<_>>()))
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        let n = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), n);
    }

    #[test]
    fn uid_text() {
        assert_eq!(format_uid(1737244800000, "mi-calendario"), "1737244800000@mi-calendario");
    }
}
