//! Optional memoizing cache for analysis results.
//!
//! Keys are a hash of the normalized text, entries expire after a fixed TTL,
//! and the store is capped, evicting the least-recently-produced entry on
//! overflow. This is the only shared mutable state in the crate; a single
//! mutex enforces the single-writer discipline so concurrent callers never
//! observe a partially written entry.

use chrono::{DateTime, Duration, Utc};
use im::HashMap;
use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use crate::core::AnalysisResult;

const DEFAULT_TTL_SECS: i64 = 3600;
const DEFAULT_CAPACITY: usize = 1000;

#[derive(Clone, Debug)]
struct CacheEntry {
    result: AnalysisResult,
    created: DateTime<Utc>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    hits: usize,
    misses: usize,
}

/// TTL + capacity bounded store of full analysis results.
pub struct AnalysisCache {
    state: Mutex<CacheState>,
    ttl: Duration,
    capacity: usize,
}

impl AnalysisCache {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_TTL_SECS, DEFAULT_CAPACITY)
    }

    /// Custom TTL and capacity, mainly for tests.
    pub fn with_limits(ttl_secs: i64, capacity: usize) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            ttl: Duration::seconds(ttl_secs),
            capacity: capacity.max(1),
        }
    }

    /// Fetch a fresh cached result for `text`, if any. Expired entries count
    /// as misses and are dropped.
    pub fn get(&self, text: &str) -> Option<AnalysisResult> {
        let key = Self::cache_key(text);
        let now = Utc::now();
        let mut state = self.state.lock();

        let entry = state.entries.get(&key).cloned();
        match entry {
            Some(entry) if now - entry.created < self.ttl => {
                state.hits += 1;
                Some(entry.result)
            }
            Some(_) => {
                state.entries = state.entries.without(&key);
                state.misses += 1;
                None
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Store a result for `text`, evicting the oldest entry when full.
    pub fn insert(&self, text: &str, result: AnalysisResult) {
        let key = Self::cache_key(text);
        let mut state = self.state.lock();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.capacity {
            let oldest = state
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.created)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                state.entries = state.entries.without(&oldest);
            }
        }

        state.entries = state.entries.update(
            key,
            CacheEntry {
                result,
                created: Utc::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (hits, misses) counters since construction.
    pub fn stats(&self) -> (usize, usize) {
        let state = self.state.lock();
        (state.hits, state.misses)
    }

    /// Normalized-text key: identical requirements modulo case and leading/
    /// trailing whitespace share an entry.
    fn cache_key(text: &str) -> String {
        let normalized = text.trim().to_lowercase();
        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new()
    }
}
