//! Remote contribution sources
//!
//! Each source knows its URL and how to turn its response body into days.
//! Fetching itself goes through the `Fetcher` seam so the chain can be
//! exercised without a browser.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::config::HeatmapConfig;
use super::day::ContributionDay;

/// Why a source attempt produced no data
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No contribution data in response")]
    MissingContributions,

    #[error("Empty contribution series")]
    Empty,
}

/// HTTP GET returning the body of a successful response
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

/// Remote sources, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Year series API (`contributions: [{date, count, level}]`)
    Primary,
    /// Alternate API (`contributions: [{date, count, color, intensity}]`,
    /// alongside per-year totals)
    Secondary,
}

/// Fields of a daily record shared by both sources. Anything else in the
/// record is ignored. `level` stays untyped until a caller asks for it.
#[derive(Debug, Deserialize)]
struct RawDay {
    date: NaiveDate,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    level: Option<Value>,
}

impl RawDay {
    /// Source-provided level, if it is an integer 1-4
    fn source_level(&self) -> Option<u8> {
        self.level
            .as_ref()
            .and_then(Value::as_u64)
            .filter(|l| (1..=4).contains(l))
            .map(|l| l as u8)
    }
}

#[derive(Debug, Deserialize)]
struct SeriesResponse {
    #[serde(default)]
    contributions: Option<Vec<Value>>,
}

impl Source {
    pub const CHAIN: [Source; 2] = [Source::Primary, Source::Secondary];

    pub fn name(&self) -> &'static str {
        match self {
            Source::Primary => "primary",
            Source::Secondary => "secondary",
        }
    }

    /// Request URL for the configured account
    pub fn url(&self, config: &HeatmapConfig) -> String {
        let template = match self {
            Source::Primary => &config.primary_url,
            Source::Secondary => &config.secondary_url,
        };
        template.replace("{user}", &config.username)
    }

    /// Parse a response body into days, in the order the source sent them
    pub fn parse(
        &self,
        body: &str,
        config: &HeatmapConfig,
    ) -> Result<Vec<ContributionDay>, FetchError> {
        let response: SeriesResponse = serde_json::from_str(body)?;
        let raw = response
            .contributions
            .ok_or(FetchError::MissingContributions)?;

        let trust_levels = config.trust_source_levels && *self == Source::Primary;

        let mut skipped = 0usize;
        let days = raw
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<RawDay>(record) {
                Ok(r) => Some(r),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping bad {} record: {}", self.name(), e);
                    None
                }
            })
            .map(|r| {
                let mut day = ContributionDay::new(r.date, r.count.unwrap_or(0));
                if trust_levels {
                    if let Some(level) = r.source_level() {
                        day.level = level;
                    }
                }
                day
            })
            .collect::<Vec<_>>();

        if skipped > 0 {
            log::warn!(
                "{} source: kept {} records, skipped {}",
                self.name(),
                days.len(),
                skipped
            );
        }

        Ok(days)
    }
}
