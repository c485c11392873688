use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Stamp identifying one state of a mutable control-point sequence.
///
/// Every mutation takes a fresh stamp, so two sequences (or two states of the
/// same sequence) never share one. A cached snapshot is stale as soon as the
/// stamp it was built from differs from the sequence's current stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Generation(u64);

impl Generation {
    pub fn next() -> Self {
        Self(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::next()
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gen#{}", self.0)
    }
}
