//! Fallback chain: primary, secondary, then generated data
//!
//! Sources are tried in order and the first one yielding a non-empty series
//! wins. Failures are logged, never surfaced. The chain cannot end empty.

use chrono::NaiveDate;
use rand::Rng;

use super::config::HeatmapConfig;
use super::day::{ContributionDay, trailing_days};
use super::source::{FetchError, Fetcher, Source};
use super::synthetic;

/// Where the rendered data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Remote(Source),
    Synthetic,
}

#[derive(Debug, Clone)]
pub struct LoadedHeatmap {
    /// Oldest first
    pub days: Vec<ContributionDay>,
    pub origin: DataOrigin,
}

/// One source attempt: fetch, parse, order and trim
pub async fn fetch_from<F: Fetcher>(
    fetcher: &F,
    source: Source,
    config: &HeatmapConfig,
    today: NaiveDate,
) -> Result<Vec<ContributionDay>, FetchError> {
    let body = fetcher.get_text(&source.url(config)).await?;
    let days = source.parse(&body, config)?;
    let days = trailing_days(days, today, config.days);
    if days.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(days)
}

/// Run the whole chain. Sources are awaited one after another; the next
/// request only starts once the previous one has failed.
pub async fn load_contributions<F: Fetcher, R: Rng>(
    fetcher: &F,
    config: &HeatmapConfig,
    today: NaiveDate,
    rng: &mut R,
) -> LoadedHeatmap {
    for source in Source::CHAIN {
        match fetch_from(fetcher, source, config, today).await {
            Ok(days) => {
                log::info!(
                    "Loaded {} days of contribution data from {} source",
                    days.len(),
                    source.name()
                );
                return LoadedHeatmap {
                    days,
                    origin: DataOrigin::Remote(source),
                };
            }
            Err(e) => log::warn!("Contribution {} source failed: {}", source.name(), e),
        }
    }

    log::warn!("All contribution sources failed, using generated pattern");
    LoadedHeatmap {
        days: synthetic::generate(today, config.days, rng),
        origin: DataOrigin::Synthetic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use futures::executor::block_on;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use serde_json::json;
    use std::cell::RefCell;

    enum Reply {
        Body(String),
        Status(u16),
    }

    /// Canned responses keyed by URL, recording every request
    struct FakeFetcher {
        replies: Vec<(String, Reply)>,
        requests: RefCell<Vec<String>>,
    }

    impl FakeFetcher {
        fn new(replies: Vec<(String, Reply)>) -> Self {
            Self {
                replies,
                requests: RefCell::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Fetcher for FakeFetcher {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            match self.replies.iter().find(|(u, _)| u == url) {
                Some((_, Reply::Body(body))) => Ok(body.clone()),
                Some((_, Reply::Status(code))) => Err(FetchError::Status(*code)),
                None => Err(FetchError::Network("connection refused".to_string())),
            }
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    /// `n` days ending today, oldest first, each with count 1
    fn series(n: u64) -> String {
        let days: Vec<_> = (0..n)
            .rev()
            .map(|back| {
                let date = today().checked_sub_days(Days::new(back)).unwrap();
                json!({ "date": date.to_string(), "count": 1, "level": 1 })
            })
            .collect();
        json!({ "total": { "lastYear": n }, "contributions": days }).to_string()
    }

    fn load(fetcher: &FakeFetcher) -> LoadedHeatmap {
        let mut rng = Pcg32::seed_from_u64(1);
        block_on(load_contributions(
            fetcher,
            &HeatmapConfig::default(),
            today(),
            &mut rng,
        ))
    }

    fn primary_url() -> String {
        Source::Primary.url(&HeatmapConfig::default())
    }

    fn secondary_url() -> String {
        Source::Secondary.url(&HeatmapConfig::default())
    }

    #[test]
    fn test_primary_success() {
        let fetcher = FakeFetcher::new(vec![(primary_url(), Reply::Body(series(400)))]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Remote(Source::Primary));
        assert_eq!(loaded.days.len(), 365);
        assert_eq!(loaded.days.last().unwrap().date, today());
        assert_eq!(fetcher.requests(), vec![primary_url()]);
    }

    #[test]
    fn test_short_series_not_padded() {
        let fetcher = FakeFetcher::new(vec![(primary_url(), Reply::Body(series(300)))]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.days.len(), 300);
    }

    #[test]
    fn test_primary_failure_tries_secondary_once() {
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Status(503)),
            (secondary_url(), Reply::Body(series(365))),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Remote(Source::Secondary));
        assert_eq!(loaded.days.len(), 365);
        assert_eq!(fetcher.requests(), vec![primary_url(), secondary_url()]);
    }

    #[test]
    fn test_all_sources_fail() {
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Status(500)),
            (secondary_url(), Reply::Status(404)),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Synthetic);
        assert_eq!(loaded.days.len(), 365);
        assert_eq!(loaded.days.last().unwrap().date, today());
        // No requests beyond the two fixed hops
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[test]
    fn test_malformed_and_missing_fields_fall_through() {
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Body("not json".to_string())),
            (secondary_url(), Reply::Body(r#"{"years":[]}"#.to_string())),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Synthetic);
        assert_eq!(loaded.days.len(), 365);
    }

    #[test]
    fn test_empty_series_falls_through() {
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Body(r#"{"contributions":[]}"#.to_string())),
            (secondary_url(), Reply::Body(series(10))),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Remote(Source::Secondary));
        assert_eq!(loaded.days.len(), 10);
    }

    #[test]
    fn test_secondary_string_level_still_used() {
        let body = json!({
            "contributions": [
                { "date": "2026-10-17", "count": 3, "level": "2" },
                { "date": "2026-10-18", "count": 0, "level": "0" },
            ]
        })
        .to_string();
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Status(500)),
            (secondary_url(), Reply::Body(body)),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Remote(Source::Secondary));
        assert_eq!(loaded.days.len(), 2);
        assert_eq!(loaded.days[0].level, 2);
    }

    #[test]
    fn test_all_records_bad_falls_through() {
        let body = r#"{"contributions":[{"date":"yesterday","count":1}]}"#.to_string();
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Body(body)),
            (secondary_url(), Reply::Body(series(5))),
        ]);

        let loaded = load(&fetcher);
        assert_eq!(loaded.origin, DataOrigin::Remote(Source::Secondary));
    }

    #[test]
    fn test_secondary_order_normalized() {
        // Newest first, with a future day for the rest of the year
        let body = json!({
            "years": [{ "year": "2026", "total": 9 }],
            "contributions": [
                { "date": "2026-12-31", "count": 0, "intensity": "0" },
                { "date": "2026-10-18", "count": 9, "intensity": "4" },
                { "date": "2026-10-17", "count": 0, "intensity": "0" },
            ]
        })
        .to_string();
        let fetcher = FakeFetcher::new(vec![
            (primary_url(), Reply::Status(500)),
            (secondary_url(), Reply::Body(body)),
        ]);

        let loaded = load(&fetcher);
        let dates: Vec<_> = loaded.days.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-10-17", "2026-10-18"]);
        assert_eq!(loaded.days[1].level, 4);
    }
}
