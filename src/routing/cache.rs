//! Package availability cache.
//!
//! A monotone, process-lifetime memo of language pairs confirmed usable
//! (installed, or installed after a successful install). Entries are never
//! evicted and never persisted. The engine diverging after insertion (say, a
//! manual uninstall) is an accepted risk.

use crate::engine::LanguagePair;
use std::collections::HashSet;
use std::sync::Mutex;

/// Set of language pairs known to be usable without another engine query.
///
/// Owned by the resolver instance that populates it; constructing a fresh
/// resolver (as tests do) starts with an empty cache. Inserts are idempotent
/// and commutative, so a coarse mutex is all the synchronization needed.
#[derive(Debug, Default)]
pub struct AvailabilityCache {
    pairs: Mutex<HashSet<LanguagePair>>,
}

impl AvailabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure lookup: has this pair been confirmed usable?
    pub fn has(&self, pair: &LanguagePair) -> bool {
        self.pairs
            .lock()
            .expect("availability cache lock poisoned")
            .contains(pair)
    }

    /// Idempotent insert. Callers must only remember pairs verified
    /// installed-or-installed-after-install at the time of insertion.
    pub fn remember(&self, pair: &LanguagePair) {
        self.pairs
            .lock()
            .expect("availability cache lock poisoned")
            .insert(pair.clone());
    }

    /// Number of remembered pairs, for observability.
    pub fn len(&self) -> usize {
        self.pairs
            .lock()
            .expect("availability cache lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
