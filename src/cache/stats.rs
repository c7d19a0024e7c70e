//! Store Statistics Module
//!
//! Counts lookup outcomes and the two ways entries leave the container
//! without an explicit `del`: lazy expiry purges and LRU evictions.

use serde::Serialize;

/// Outcome of a single keyed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// A live entry was found
    Hit,
    /// No entry under the key
    Miss,
    /// An entry was found past its expiry and purged; reads as a miss
    Expired,
}

// == Cache Stats ==
/// Snapshot of store counters.
///
/// An expired lookup counts as a miss and as an expiration, so
/// `hits + misses` is always the number of keyed lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    /// Expired entries purged, on lookup or during enumeration
    pub expirations: u64,
    /// Entries pushed out by capacity pressure, live or already expired
    pub evictions: u64,
    /// Entries currently held, including expired ones not yet touched
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Share of keyed lookups that found a live entry; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    pub fn record_lookup(&mut self, outcome: Lookup) {
        match outcome {
            Lookup::Hit => self.hits += 1,
            Lookup::Miss => self.misses += 1,
            Lookup::Expired => {
                self.misses += 1;
                self.expirations += 1;
            }
        }
    }

    /// Counts expired entries dropped while enumerating.
    pub fn record_purged(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = CacheStats::new();
        assert_eq!(stats, CacheStats::default());
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_expired_lookup_counts_as_miss() {
        let mut stats = CacheStats::new();
        stats.record_lookup(Lookup::Hit);
        stats.record_lookup(Lookup::Expired);

        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expirations, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        for _ in 0..3 {
            stats.record_lookup(Lookup::Hit);
        }
        stats.record_lookup(Lookup::Miss);
        assert_eq!(stats.hit_rate(), 0.75);
    }

    #[test]
    fn test_purges_and_evictions_leave_lookups_alone() {
        let mut stats = CacheStats::new();
        stats.record_purged(4);
        stats.record_eviction();
        stats.record_eviction();

        assert_eq!(stats.expirations, 4);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.hits + stats.misses, 0);
    }

    #[test]
    fn test_stats_serialize() {
        let mut stats = CacheStats::new();
        stats.set_total_entries(42);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_entries"], 42);
        assert_eq!(json["expirations"], 0);
    }
}
