//! Contribution heatmap
//!
//! One year of daily activity, acquired through an ordered chain of sources:
//! - Primary remote series
//! - Secondary remote series (different response shape)
//! - Generated plausible pattern (cannot fail)
//!
//! Whatever answers first is rendered as a grid of leveled cells.

pub mod config;
pub mod day;
pub mod loader;
pub mod preview;
pub mod source;
pub mod synthetic;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::HeatmapConfig;
pub use day::{ContributionDay, level_for_count, trailing_days};
pub use loader::{DataOrigin, LoadedHeatmap, fetch_from, load_contributions};
pub use preview::text_preview;
pub use source::{FetchError, Fetcher, Source};
