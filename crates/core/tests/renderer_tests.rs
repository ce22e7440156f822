// ═══════════════════════════════════════════════════════════════════
// Renderer Tests — retry sequence, sample fallback, container mounting
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use gold_rupee_core::clock::FixedClock;
use gold_rupee_core::errors::CoreError;
use gold_rupee_core::models::dataset::RawDataset;
use gold_rupee_core::models::settings::RendererSettings;
use gold_rupee_core::providers::sample::OFFLINE_NOTICE;
use gold_rupee_core::providers::traits::PriceSource;
use gold_rupee_core::services::renderer_service::{ChartPage, ChartRenderer, LoadState};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Sources
// ═══════════════════════════════════════════════════════════════════

/// Fails the first `failures` fetches, then serves `dataset`.
struct FlakySource {
    failures: u32,
    calls: AtomicU32,
    dataset: RawDataset,
}

impl FlakySource {
    fn new(failures: u32, dataset: RawDataset) -> Arc<Self> {
        Arc::new(Self {
            failures,
            calls: AtomicU32::new(0),
            dataset,
        })
    }

    fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for FlakySource {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn fetch(&self) -> Result<RawDataset, CoreError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        if n < self.failures {
            Err(CoreError::Network("connection refused".into()))
        } else {
            Ok(self.dataset.clone())
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn live_dataset() -> RawDataset {
    RawDataset::from_value(json!([
        {"date": "2020-01-01", "goldPrice": 1500, "rupeeRate": 71.2},
        {"date": "2024-01-01", "goldPrice": 2000, "rupeeRate": 83.1}
    ]))
    .unwrap()
}

fn policy(retries: u32) -> RendererSettings {
    RendererSettings {
        retries,
        retry_delay_ms: 1,
    }
}

fn renderer(source: Arc<dyn PriceSource>, retries: u32) -> ChartRenderer {
    ChartRenderer::new(source, Arc::new(FixedClock(today())), policy(retries), 5)
}

// ═══════════════════════════════════════════════════════════════════
//  ChartRenderer
// ═══════════════════════════════════════════════════════════════════

mod chart_renderer {
    use super::*;

    #[tokio::test]
    async fn renders_live_data_on_first_try() {
        let source = FlakySource::new(0, live_dataset());
        let mut r = renderer(source.clone(), 3);
        assert_eq!(r.state(), LoadState::Idle);

        let chart = r.render().await.unwrap();
        assert!(!chart.is_fallback());
        assert_eq!(chart.data.labels, vec!["Jan 2020", "Jan 2024"]);
        assert_eq!(chart.data.gold_values, vec![1500.0, 2000.0]);
        assert!(chart.svg.contains("<svg"));
        assert_eq!(chart.config.notice, None);

        assert_eq!(source.calls(), 1);
        assert_eq!(r.state(), LoadState::Rendered);
        assert_eq!(r.history(), &[LoadState::Loading, LoadState::Rendered]);
    }

    #[tokio::test]
    async fn recovers_after_retries() {
        let source = FlakySource::new(2, live_dataset());
        let mut r = renderer(source.clone(), 3);

        let chart = r.render().await.unwrap();
        assert!(!chart.is_fallback());
        assert_eq!(source.calls(), 3);
        assert_eq!(
            r.history(),
            &[
                LoadState::Loading,
                LoadState::Retrying { attempt: 1 },
                LoadState::Retrying { attempt: 2 },
                LoadState::Rendered,
            ]
        );
    }

    #[tokio::test]
    async fn falls_back_to_sample_after_exhausting_retries() {
        let source = FlakySource::new(u32::MAX, live_dataset());
        let mut r = renderer(source.clone(), 2);

        let chart = r.render().await.unwrap();
        assert!(chart.is_fallback());
        assert_eq!(chart.notice.as_deref(), Some(OFFLINE_NOTICE));
        assert_eq!(chart.config.notice.as_deref(), Some(OFFLINE_NOTICE));
        assert!(chart.svg.contains(OFFLINE_NOTICE));
        assert!(!chart.data.is_empty());

        // one initial attempt plus two retries
        assert_eq!(source.calls(), 3);
        assert_eq!(r.state(), LoadState::Fallback);
        assert_eq!(
            r.history(),
            &[
                LoadState::Loading,
                LoadState::Retrying { attempt: 1 },
                LoadState::Retrying { attempt: 2 },
                LoadState::Fallback,
            ]
        );
    }

    #[tokio::test]
    async fn zero_retries_falls_back_immediately() {
        let source = FlakySource::new(1, live_dataset());
        let mut r = renderer(source.clone(), 0);
        let chart = r.render().await.unwrap();
        assert!(chart.is_fallback());
        assert_eq!(source.calls(), 1);
        assert_eq!(r.history(), &[LoadState::Loading, LoadState::Fallback]);
    }

    #[tokio::test]
    async fn empty_live_data_uses_sample() {
        let empty = RawDataset::from_value(json!({"data": []})).unwrap();
        let mut r = renderer(FlakySource::new(0, empty), 3);
        let chart = r.render().await.unwrap();
        assert!(chart.is_fallback());
        assert!(!chart.data.is_empty());
    }

    #[tokio::test]
    async fn stale_points_are_filtered_client_side() {
        let stale = RawDataset::from_value(json!([
            {"date": "2001-01-01", "goldPrice": 270, "rupeeRate": 46.5},
            {"date": "2023-01-01", "goldPrice": 1900, "rupeeRate": 82.0}
        ]))
        .unwrap();
        let mut r = renderer(FlakySource::new(0, stale), 0);
        let chart = r.render().await.unwrap();
        assert_eq!(chart.data.labels, vec!["Jan 2023"]);
    }

    #[tokio::test]
    async fn chart_is_kept_on_the_instance() {
        let mut r = renderer(FlakySource::new(0, live_dataset()), 0);
        assert!(r.chart().is_none());
        r.render().await.unwrap();
        assert!(r.is_rendered());
        assert_eq!(r.chart().unwrap().data.len(), 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartPage
// ═══════════════════════════════════════════════════════════════════

mod chart_page {
    use super::*;

    #[tokio::test]
    async fn second_mount_reuses_existing_chart() {
        let source = FlakySource::new(0, live_dataset());
        let mut page = ChartPage::new();

        page.mount("gold-chart", || renderer(source.clone(), 0))
            .await
            .unwrap();
        assert!(page.is_initialized("gold-chart"));

        let mut factory_called = false;
        let chart = page
            .mount("gold-chart", || {
                factory_called = true;
                renderer(source.clone(), 0)
            })
            .await
            .unwrap();
        assert_eq!(chart.data.len(), 2);
        assert!(!factory_called);
        assert_eq!(source.calls(), 1);
        assert_eq!(page.len(), 1);
    }

    #[tokio::test]
    async fn containers_are_independent() {
        let a = FlakySource::new(0, live_dataset());
        let b = FlakySource::new(u32::MAX, live_dataset());
        let mut page = ChartPage::new();

        let live = page.mount("a", || renderer(a.clone(), 0)).await.unwrap();
        assert!(!live.is_fallback());
        let offline = page.mount("b", || renderer(b.clone(), 0)).await.unwrap();
        assert!(offline.is_fallback());

        assert_eq!(page.len(), 2);
        assert_eq!(page.renderer("a").unwrap().state(), LoadState::Rendered);
        assert_eq!(page.renderer("b").unwrap().state(), LoadState::Fallback);
        assert!(!page.is_initialized("c"));
    }
}
