use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Monotonic counter used by factories to keep generated values unique
/// within a test process.
pub fn next_id() -> usize {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}
