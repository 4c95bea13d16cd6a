//! Heatmap settings

use crate::consts::*;

#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Account whose contributions are shown
    pub username: String,
    /// Endpoint templates, `{user}` is substituted
    pub primary_url: String,
    pub secondary_url: String,
    /// Number of trailing days to show
    pub days: usize,
    /// Use the primary source's own `level` field instead of deriving it
    /// from the count. Off by default so every source is leveled the same.
    pub trust_source_levels: bool,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            username: GITHUB_USERNAME.to_string(),
            primary_url: PRIMARY_SOURCE_URL.to_string(),
            secondary_url: SECONDARY_SOURCE_URL.to_string(),
            days: HEATMAP_DAYS,
            trust_source_levels: false,
        }
    }
}
