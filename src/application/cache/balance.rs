//! Time-bounded cache of account balances per exchange.
//!
//! Shields the trading loop from hammering exchange balance endpoints while
//! bounding how stale a cached balance may be. Expiry is lazy: a stale entry
//! stays in the map but is never returned, and is replaced by the next write.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::domain::{Balance, ExchangeId};
use crate::port::{Clock, SystemClock};

/// Maximum age, in milliseconds, of a balance that may still be returned.
pub const CACHE_TIMEOUT_MS: i64 = 5 * 60 * 1000;

/// [`CACHE_TIMEOUT_MS`] as a duration.
#[must_use]
pub fn cache_timeout() -> Duration {
    Duration::milliseconds(CACHE_TIMEOUT_MS)
}

/// A balance together with the time it was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceEntry {
    value: Balance,
    recorded_at: DateTime<Utc>,
}

impl BalanceEntry {
    #[must_use]
    pub const fn value(&self) -> Balance {
        self.value
    }

    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Age of the entry relative to `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.recorded_at)
    }
}

/// Latest known balance per exchange, valid for [`CACHE_TIMEOUT_MS`].
///
/// Thread-safe: entries live in a sharded concurrent map, so writers and
/// readers for different exchanges do not contend, and a read for one
/// exchange sees either the previous or the new entry in full.
pub struct BalanceCache {
    /// One entry per exchange; writes replace.
    entries: DashMap<ExchangeId, BalanceEntry>,
    /// Entries older than this are treated as absent.
    ttl: Duration,
    /// Time source for write stamps and read-time freshness checks.
    clock: Arc<dyn Clock>,
}

impl BalanceCache {
    /// Create an empty cache on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty cache on the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: cache_timeout(),
            clock,
        }
    }

    /// Record `value` for `exchange`, stamped with the current time.
    pub fn set(&self, exchange: ExchangeId, value: Balance) {
        let now = self.clock.now();
        self.set_recorded_at(exchange, value, now);
    }

    /// Record `value` for `exchange` with an explicit timestamp.
    ///
    /// Live code should use [`BalanceCache::set`]; this path exists so expiry
    /// can be exercised deterministically, e.g. by writing an entry that is
    /// already stale.
    pub fn set_recorded_at(&self, exchange: ExchangeId, value: Balance, recorded_at: DateTime<Utc>) {
        self.entries.insert(exchange, BalanceEntry { value, recorded_at });
    }

    /// Get the cached balance for `exchange` if it is still fresh.
    ///
    /// Returns `None` when nothing was ever recorded or the entry is older
    /// than the cache timeout.
    #[must_use]
    pub fn get(&self, exchange: &ExchangeId) -> Option<Balance> {
        self.get_entry(exchange).map(|entry| entry.value)
    }

    /// Get the cached entry for `exchange` if it is still fresh.
    #[must_use]
    pub fn get_entry(&self, exchange: &ExchangeId) -> Option<BalanceEntry> {
        let entry = *self.entries.get(exchange)?;
        let now = self.clock.now();

        // Valid up to and including exactly ttl old
        if entry.age(now) > self.ttl {
            return None;
        }

        Some(entry)
    }

    /// Sum the fresh balances of every listed exchange.
    ///
    /// Returns `None` if any of them is missing or stale, or if the sum
    /// overflows.
    #[must_use]
    pub fn combined(&self, exchanges: &[ExchangeId]) -> Option<Balance> {
        exchanges
            .iter()
            .map(|exchange| self.get(exchange))
            .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value?))
    }

    /// Number of stored entries, fresh or stale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was ever recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BalanceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BalanceCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceCache")
            .field("entries", &self.entries.len())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::clock::ManualClock;
    use rust_decimal_macros::dec;

    fn exchange_a() -> ExchangeId {
        ExchangeId::new("CoinDynasty")
    }

    fn exchange_b() -> ExchangeId {
        ExchangeId::new("CoinSnake")
    }

    #[test]
    fn get_returns_written_value() {
        let cache = BalanceCache::new();
        cache.set(exchange_a(), dec!(123.45));

        assert_eq!(cache.get(&exchange_a()), Some(dec!(123.45)));
    }

    #[test]
    fn exchanges_are_independent() {
        let cache = BalanceCache::new();
        cache.set(exchange_a(), dec!(123.45));
        cache.set(exchange_b(), dec!(987.65));

        assert_eq!(cache.get(&exchange_a()), Some(dec!(123.45)));
        assert_eq!(cache.get(&exchange_b()), Some(dec!(987.65)));
    }

    #[test]
    fn last_write_wins() {
        let cache = BalanceCache::new();
        cache.set(exchange_a(), dec!(1));
        cache.set(exchange_a(), dec!(2));

        assert_eq!(cache.get(&exchange_a()), Some(dec!(2)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn never_written_is_absent() {
        let cache = BalanceCache::new();
        assert_eq!(cache.get(&exchange_a()), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn stale_write_is_absent_but_stored() {
        let cache = BalanceCache::new();
        let recorded_at = Utc::now() - Duration::milliseconds(CACHE_TIMEOUT_MS + 1);

        cache.set_recorded_at(exchange_a(), dec!(123.45), recorded_at);

        assert_eq!(cache.get(&exchange_a()), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn entry_at_exact_timeout_is_fresh() {
        let clock = Arc::new(ManualClock::default());
        let cache = BalanceCache::with_clock(clock.clone());
        let recorded_at = clock.now() - cache_timeout();

        cache.set_recorded_at(exchange_a(), dec!(5), recorded_at);

        assert_eq!(cache.get(&exchange_a()), Some(dec!(5)));
    }

    #[test]
    fn freshness_is_checked_at_read_time() {
        let clock = Arc::new(ManualClock::default());
        let cache = BalanceCache::with_clock(clock.clone());
        cache.set(exchange_a(), dec!(10));

        clock.advance(cache_timeout());
        assert_eq!(cache.get(&exchange_a()), Some(dec!(10)));

        clock.advance(Duration::milliseconds(1));
        assert_eq!(cache.get(&exchange_a()), None);

        cache.set(exchange_a(), dec!(11));
        assert_eq!(cache.get(&exchange_a()), Some(dec!(11)));
    }

    #[test]
    fn get_entry_reports_age() {
        let clock = Arc::new(ManualClock::default());
        let cache = BalanceCache::with_clock(clock.clone());
        cache.set(exchange_a(), dec!(10));
        clock.advance(Duration::seconds(30));

        let entry = cache.get_entry(&exchange_a()).unwrap();
        assert_eq!(entry.value(), dec!(10));
        assert_eq!(entry.age(clock.now()), Duration::seconds(30));
    }

    #[test]
    fn combined_requires_every_exchange_fresh() {
        let clock = Arc::new(ManualClock::default());
        let cache = BalanceCache::with_clock(clock.clone());
        let both = [exchange_a(), exchange_b()];

        cache.set(exchange_a(), dec!(123.45));
        assert_eq!(cache.combined(&both), None);

        cache.set(exchange_b(), dec!(987.65));
        assert_eq!(cache.combined(&both), Some(dec!(1111.10)));

        cache.set_recorded_at(
            exchange_a(),
            dec!(123.45),
            clock.now() - cache_timeout() - Duration::milliseconds(1),
        );
        assert_eq!(cache.combined(&both), None);
        assert_eq!(cache.combined(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn combined_overflow_is_unknown() {
        let cache = BalanceCache::new();
        cache.set(exchange_a(), Decimal::MAX);
        cache.set(exchange_b(), Decimal::MAX);

        assert_eq!(cache.combined(&[exchange_a(), exchange_b()]), None);
        assert_eq!(cache.combined(&[exchange_a()]), Some(Decimal::MAX));
    }

    #[test]
    fn concurrent_writers_on_distinct_exchanges() {
        let cache = Arc::new(BalanceCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let exchange = ExchangeId::new(format!("exchange-{i}"));
                    for n in 0..100 {
                        cache.set(exchange.clone(), Decimal::from(n));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 8);
        for i in 0..8 {
            let exchange = ExchangeId::new(format!("exchange-{i}"));
            assert_eq!(cache.get(&exchange), Some(Decimal::from(99)));
        }
    }
}
