use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic tags for a stream of requests against one input.
///
/// An in-flight request that has been superseded must not overwrite newer
/// state when its response finally lands: tag the request at issue time
/// and apply the response only if its tag is still the latest.
#[derive(Debug, Default)]
pub struct SequenceGuard {
    latest: AtomicU64,
}

impl SequenceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next tag, superseding all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `tag` is still the latest issued.
    pub fn is_current(&self, tag: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == tag
    }
}
