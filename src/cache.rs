//! In-memory TTL cache for summary results.
//!
//! Keys are [`SummaryRequest`](crate::models::SummaryRequest) digests, so
//! identical content at a different density tier occupies a separate slot.
//! Expiry is lazy: entries are never returned once older than the TTL, and
//! stale slots are swept opportunistically when new entries are stored.

use std::collections::HashMap;

use crate::models::SummaryResult;

/// Default entry lifetime in seconds.
pub const DEFAULT_TTL_SECS: i64 = 3600;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: SummaryResult,
    inserted_at: i64,
}

/// Process-local summary cache. Not shared across sessions or restarts.
#[derive(Debug)]
pub struct SummaryCache {
    ttl_secs: i64,
    entries: HashMap<String, CacheEntry>,
}

impl SummaryCache {
    pub fn new(ttl_secs: i64) -> Self {
        Self {
            ttl_secs,
            entries: HashMap::new(),
        }
    }

    /// Look up a live entry by request digest.
    pub fn get(&self, digest: &str) -> Option<SummaryResult> {
        self.get_at(digest, chrono::Utc::now().timestamp())
    }

    fn get_at(&self, digest: &str, now: i64) -> Option<SummaryResult> {
        let entry = self.entries.get(digest)?;
        if now - entry.inserted_at < self.ttl_secs {
            Some(entry.result.clone())
        } else {
            None
        }
    }

    /// Store a result under its request digest, replacing any prior entry.
    pub fn put(&mut self, digest: String, result: SummaryResult) {
        self.put_at(digest, result, chrono::Utc::now().timestamp());
    }

    fn put_at(&mut self, digest: String, result: SummaryResult, now: i64) {
        self.evict_expired_at(now);
        self.entries.insert(
            digest,
            CacheEntry {
                result,
                inserted_at: now,
            },
        );
    }

    /// Drop every entry past its TTL.
    pub fn evict_expired(&mut self) {
        self.evict_expired_at(chrono::Utc::now().timestamp());
    }

    fn evict_expired_at(&mut self, now: i64) {
        let ttl = self.ttl_secs;
        self.entries.retain(|_, e| now - e.inserted_at < ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
