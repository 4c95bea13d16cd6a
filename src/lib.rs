//! Homepage widgets - interactive pieces of a personal homepage
//!
//! Core modules:
//! - `field`: Cursor-reactive particle field (pure physics, no DOM)
//! - `renderer`: 2D canvas drawing for the particle field
//! - `heatmap`: Contribution heatmap data, fallback chain and rendering
//! - `theme`: Light/dark theme preference
//! - `persistence`: Key/value preference storage (LocalStorage on web)
//! - `clock`: Central time clock and date formatting
//! - `map`: Leaflet map configuration and bindings
//! - `platform`: Browser access helpers

pub mod clock;
pub mod field;
pub mod heatmap;
pub mod map;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod theme;

pub use heatmap::{ContributionDay, HeatmapConfig, level_for_count};
pub use theme::Theme;

/// Page configuration constants
pub mod consts {
    /// Particle field
    pub const PARTICLE_COUNT: usize = 20;
    /// Pointer distance (px) inside which particles are pushed away
    pub const REPULSION_RADIUS: f32 = 150.0;
    /// Push distance per frame at zero distance from the pointer
    pub const REPULSION_STRENGTH: f32 = 5.0;
    /// Fraction of the anchor offset recovered per frame
    pub const ANCHOR_PULL: f32 = 0.005;
    /// How far past an edge a particle may go before wrapping
    pub const WRAP_MARGIN: f32 = 10.0;
    /// Drift velocity components are drawn from [-MAX_DRIFT, MAX_DRIFT]
    pub const MAX_DRIFT: f32 = 0.4;
    pub const MIN_PARTICLE_RADIUS: f32 = 2.5;
    pub const MAX_PARTICLE_RADIUS: f32 = 4.5;

    /// Heatmap
    pub const HEATMAP_DAYS: usize = 365;
    pub const GITHUB_USERNAME: &str = "imraghavojha";
    /// `{user}` is replaced with the account name
    pub const PRIMARY_SOURCE_URL: &str =
        "https://github-contributions-api.jogruber.de/v4/{user}?y=last";
    pub const SECONDARY_SOURCE_URL: &str =
        "https://github-contributions.vercel.app/api/v1/{user}";
    /// Delay before scrolling the grid so layout has settled
    pub const HEATMAP_SCROLL_DELAY_MS: u32 = 100;

    /// Theme
    pub const THEME_STORAGE_KEY: &str = "theme";
    pub const DARK_MODE_CLASS: &str = "dark-mode";

    /// Clock
    pub const CLOCK_LABEL: &str = "CDT";
    pub const CLOCK_TIME_ZONE: &str = "America/Chicago";
    pub const CLOCK_LOCALE: &str = "en-US";
    pub const CLOCK_REFRESH_MS: u32 = 60_000;

    /// DOM anchors
    pub const MAP_ID: &str = "map";
    pub const CLOCK_ID: &str = "clock";
    pub const THEME_TOGGLE_ID: &str = "theme-toggle";
    pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
    pub const HEATMAP_ID: &str = "github-heatmap";
    pub const HEATMAP_SCROLL_SELECTOR: &str = ".heatmap-container";
    pub const LAST_UPDATED_ID: &str = "last-updated";
}
