use std::sync::Arc;
use std::time::Duration;

use rust_decimal_macros::dec;

use spreadbot::application::balance::{BalancePoller, BalanceService, RefreshSummary};
use spreadbot::application::cache::{cache_timeout, BalanceCache};
use spreadbot::error::{Error, ExchangeError};
use spreadbot::testkit::clock::ManualClock;
use spreadbot::testkit::domain::exchange;
use spreadbot::testkit::exchange::CountingBalanceSource;

fn two_exchange_source() -> Arc<CountingBalanceSource> {
    Arc::new(
        CountingBalanceSource::new()
            .with_balance("CoinDynasty", dec!(123.45))
            .with_balance("CoinSnake", dec!(987.65)),
    )
}

#[tokio::test]
async fn fresh_cache_shields_the_exchange() {
    let source = two_exchange_source();
    let service = BalanceService::new(Arc::new(BalanceCache::new()), source.clone());
    let a = exchange("CoinDynasty");

    for _ in 0..10 {
        assert_eq!(service.balance(&a).await.unwrap(), dec!(123.45));
    }

    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn expired_cache_falls_back_to_live_fetch() {
    let clock = Arc::new(ManualClock::default());
    let cache = Arc::new(BalanceCache::with_clock(clock.clone()));
    let source = two_exchange_source();
    let service = BalanceService::new(Arc::clone(&cache), source.clone());
    let a = exchange("CoinDynasty");

    service.balance(&a).await.unwrap();
    source.set_balance(a.clone(), dec!(200));

    clock.advance(cache_timeout());
    assert_eq!(service.balance(&a).await.unwrap(), dec!(123.45));

    clock.advance(chrono::Duration::milliseconds(1));
    assert_eq!(service.balance(&a).await.unwrap(), dec!(200));
    assert_eq!(source.calls(), 2);
    assert_eq!(cache.get(&a), Some(dec!(200)));
}

#[tokio::test]
async fn failed_live_fetch_keeps_stale_entry_hidden() {
    let clock = Arc::new(ManualClock::default());
    let cache = Arc::new(BalanceCache::with_clock(clock.clone()));
    let service = BalanceService::new(Arc::clone(&cache), Arc::new(CountingBalanceSource::new()));
    let a = exchange("CoinDynasty");

    cache.set(a.clone(), dec!(5));
    clock.advance(cache_timeout() * 2);

    let result = service.balance(&a).await;

    assert!(matches!(
        result,
        Err(Error::Exchange(ExchangeError::UnknownExchange { .. }))
    ));
    assert_eq!(cache.get(&a), None);
}

#[tokio::test]
async fn poller_round_refreshes_every_exchange() {
    let source = two_exchange_source();
    let cache = Arc::new(BalanceCache::new());
    let service = Arc::new(BalanceService::new(Arc::clone(&cache), source));
    let exchanges = vec![exchange("CoinDynasty"), exchange("CoinSnake"), exchange("Gone")];
    let poller = BalancePoller::new(service, exchanges.clone(), Duration::from_secs(60)).unwrap();

    let summary = poller.poll_once().await;

    assert_eq!(summary, RefreshSummary { refreshed: 2, failed: 1 });
    assert_eq!(cache.combined(&exchanges[..2]), Some(dec!(1111.10)));
    assert_eq!(cache.combined(&exchanges), None);
}

#[tokio::test(start_paused = true)]
async fn concurrent_refreshes_respect_timeout() {
    let source = Arc::new(
        CountingBalanceSource::new()
            .with_balance("CoinDynasty", dec!(1))
            .with_balance("CoinSnake", dec!(2))
            .with_delay(Duration::from_millis(200)),
    );
    let service = BalanceService::new(Arc::new(BalanceCache::new()), source)
        .with_fetch_timeout(Duration::from_secs(2));

    let started = tokio::time::Instant::now();
    let summary = service
        .refresh_all(&[exchange("CoinDynasty"), exchange("CoinSnake")])
        .await;

    assert_eq!(summary.refreshed, 2);
    // Both fetches ran side by side rather than one after the other.
    assert!(started.elapsed() < Duration::from_millis(400));
}
