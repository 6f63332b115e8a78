#[cfg(test)]
mod cache_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;
    use async_trait::async_trait;
    use crate::cache::structs::metrics_cache::MetricsCache;
    use crate::collector::structs::collector::Collector;
    use crate::qbittorrent::errors::UpstreamError;
    use crate::qbittorrent::structs::main_data::MainData;
    use crate::qbittorrent::structs::preferences::Preferences;
    use crate::qbittorrent::structs::torrent::Torrent;
    use crate::qbittorrent::traits::qbittorrent_api::QbittorrentApi;
    use crate::tracker_mapper::structs::tracker_mapper::TrackerMapper;

    #[derive(Default)]
    struct CountingApi {
        torrent_calls: AtomicUsize,
        fail: AtomicBool,
        delay: Duration,
    }

    #[async_trait]
    impl QbittorrentApi for CountingApi {
        async fn get_torrents(&self) -> Result<Vec<Torrent>, UpstreamError> {
            self.torrent_calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(UpstreamError::Status { endpoint: "api/v2/torrents/info".to_string(), status: 502 });
            }
            Ok(vec![Torrent { name: "a".to_string(), state: "uploading".to_string(), ..Default::default() }])
        }

        async fn get_preferences(&self) -> Result<Preferences, UpstreamError> {
            Ok(Preferences::default())
        }

        async fn get_main_data(&self) -> Result<MainData, UpstreamError> {
            Ok(MainData::default())
        }

        async fn get_version(&self) -> Result<String, UpstreamError> {
            Ok("v5.0.1".to_string())
        }
    }

    fn cache(api: Arc<CountingApi>, window: Duration, single_flight: bool) -> MetricsCache {
        let collector = Collector::new(api, Arc::new(TrackerMapper::default()), false, true);
        MetricsCache::new(Arc::new(collector), window, single_flight)
    }

    mod cache_record_tests {
        use std::sync::Arc;
        use std::time::{Duration, Instant};
        use crate::cache::structs::cache_record::CacheRecord;
        use crate::metrics::structs::metric_snapshot::MetricSnapshot;

        #[test]
        fn test_freshness_boundary() {
            let produced_at = Instant::now();
            let record = CacheRecord::new(Arc::new(MetricSnapshot::default()), produced_at);
            let window = Duration::from_secs(5);
            assert!(record.is_fresh(produced_at, window));
            assert!(record.is_fresh(produced_at + Duration::from_millis(4999), window));
            assert!(!record.is_fresh(produced_at + window, window));
        }

        #[test]
        fn test_zero_window_is_never_fresh() {
            let produced_at = Instant::now();
            let record = CacheRecord::new(Arc::new(MetricSnapshot::default()), produced_at);
            assert!(!record.is_fresh(produced_at, Duration::ZERO));
        }

        #[test]
        fn test_age_saturates() {
            let now = Instant::now();
            let record = CacheRecord::new(Arc::new(MetricSnapshot::default()), now + Duration::from_secs(1));
            assert_eq!(record.age(now), Duration::ZERO);
        }
    }

    mod gate_tests {
        use std::sync::Arc;
        use std::sync::atomic::Ordering;
        use std::time::{Duration, Instant};
        use futures_util::future::join_all;
        use crate::qbittorrent::errors::UpstreamError;
        use super::{cache, CountingApi};

        #[tokio::test]
        async fn test_fresh_record_is_reused() {
            let api = Arc::new(CountingApi::default());
            let cache = cache(api.clone(), Duration::from_secs(5), true);
            let t0 = Instant::now();

            let first = cache.get_snapshot_at(t0).await.unwrap();
            let second = cache.get_snapshot_at(t0 + Duration::from_millis(100)).await.unwrap();

            assert!(Arc::ptr_eq(&first, &second));
            assert_eq!(cache.collections(), 1);
            assert_eq!(api.torrent_calls.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn test_stale_record_triggers_one_more_poll() {
            let api = Arc::new(CountingApi::default());
            let cache = cache(api.clone(), Duration::from_secs(5), true);
            let t0 = Instant::now();

            let first = cache.get_snapshot_at(t0).await.unwrap();
            let second = cache.get_snapshot_at(t0 + Duration::from_secs(6)).await.unwrap();
            let third = cache.get_snapshot_at(t0 + Duration::from_secs(7)).await.unwrap();

            assert!(!Arc::ptr_eq(&first, &second));
            assert!(Arc::ptr_eq(&second, &third));
            assert_eq!(cache.collections(), 2);
        }

        #[tokio::test]
        async fn test_zero_window_always_polls() {
            let api = Arc::new(CountingApi::default());
            let cache = cache(api.clone(), Duration::ZERO, true);
            let t0 = Instant::now();

            cache.get_snapshot_at(t0).await.unwrap();
            cache.get_snapshot_at(t0).await.unwrap();
            cache.get_snapshot_at(t0).await.unwrap();

            assert_eq!(cache.collections(), 3);
            assert_eq!(api.torrent_calls.load(Ordering::SeqCst), 3);
        }

        #[tokio::test]
        async fn test_failure_keeps_previous_record() {
            let api = Arc::new(CountingApi::default());
            let cache = cache(api.clone(), Duration::from_secs(5), true);
            let t0 = Instant::now();

            let first = cache.get_snapshot_at(t0).await.unwrap();
            let produced_at = cache.record().unwrap().produced_at;
            api.fail.store(true, Ordering::SeqCst);
            let result = cache.get_snapshot_at(t0 + Duration::from_secs(10)).await;

            assert!(matches!(result, Err(UpstreamError::Status { status: 502, .. })));
            let record = cache.record().unwrap();
            assert!(Arc::ptr_eq(&record.snapshot, &first));
            assert_eq!(record.produced_at, produced_at);
            assert_eq!(cache.collections(), 1);
        }

        #[tokio::test]
        async fn test_failure_on_empty_cache_stores_nothing() {
            let api = Arc::new(CountingApi::default());
            api.fail.store(true, Ordering::SeqCst);
            let cache = cache(api.clone(), Duration::from_secs(5), true);

            assert!(cache.get_snapshot().await.is_err());
            assert!(cache.record().is_none());
        }

        #[tokio::test]
        async fn test_concurrent_misses_coalesce() {
            let api = Arc::new(CountingApi { delay: Duration::from_millis(50), ..Default::default() });
            let cache = cache(api.clone(), Duration::from_secs(5), true);
            let t0 = Instant::now();

            let results = join_all((0..8).map(|_| cache.get_snapshot_at(t0))).await;
            let snapshots: Vec<_> = results.into_iter().map(|result| result.unwrap()).collect();

            assert_eq!(api.torrent_calls.load(Ordering::SeqCst), 1);
            assert!(snapshots.iter().all(|snapshot| Arc::ptr_eq(snapshot, &snapshots[0])));
        }

        #[tokio::test]
        async fn test_record_is_stamped_when_poll_completes() {
            let api = Arc::new(CountingApi { delay: Duration::from_millis(50), ..Default::default() });
            let cache = cache(api.clone(), Duration::from_secs(5), true);
            let started = Instant::now();

            cache.get_snapshot().await.unwrap();

            assert!(cache.record().unwrap().produced_at >= started + Duration::from_millis(50));
        }

        #[tokio::test]
        async fn test_waiter_behind_slow_poll_reuses_its_result() {
            let api = Arc::new(CountingApi { delay: Duration::from_millis(300), ..Default::default() });
            let cache = cache(api.clone(), Duration::from_millis(100), true);

            let late_scrape = async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                cache.get_snapshot().await
            };
            let (first, second) = tokio::join!(cache.get_snapshot(), late_scrape);

            assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
            assert_eq!(api.torrent_calls.load(Ordering::SeqCst), 1);
            assert_eq!(cache.collections(), 1);
        }

        #[tokio::test]
        async fn test_concurrent_misses_without_single_flight() {
            let api = Arc::new(CountingApi { delay: Duration::from_millis(50), ..Default::default() });
            let cache = cache(api.clone(), Duration::from_secs(5), false);
            let t0 = Instant::now();

            let results = join_all((0..4).map(|_| cache.get_snapshot_at(t0))).await;

            assert!(results.iter().all(|result| result.is_ok()));
            assert_eq!(api.torrent_calls.load(Ordering::SeqCst), 4);
            assert_eq!(cache.collections(), 4);
        }
    }
}
