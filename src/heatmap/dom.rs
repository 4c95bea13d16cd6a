//! Heatmap DOM rendering (WASM only)

use chrono::Local;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::config::HeatmapConfig;
use super::day::ContributionDay;
use super::loader::load_contributions;
use crate::consts::*;
use crate::platform::HttpFetcher;

/// Replace the grid contents with one cell per day, oldest first.
///
/// Cells are built in a detached fragment; the container is only touched
/// once they all exist, so a failure leaves the previous contents in place.
pub fn render(
    document: &Document,
    container: &Element,
    days: &[ContributionDay],
) -> Result<(), JsValue> {
    let fragment = document.create_document_fragment();

    for day in days {
        let cell = document.create_element("div")?;
        let label = day.label();
        cell.set_class_name(&day.css_class());
        cell.set_attribute("title", &label)?;
        cell.set_attribute("aria-label", &label)?;
        cell.set_attribute("role", "img")?;
        fragment.append_child(&cell)?;
    }

    container.set_inner_html("");
    container.append_child(&fragment)?;
    Ok(())
}

/// Scroll the grid all the way right once layout has settled
pub fn scroll_to_latest(document: &Document) {
    let Some(scroller) = document.query_selector(HEATMAP_SCROLL_SELECTOR).ok().flatten() else {
        return;
    };
    gloo_timers::callback::Timeout::new(HEATMAP_SCROLL_DELAY_MS, move || {
        scroller.set_scroll_left(scroller.scroll_width());
    })
    .forget();
}

/// Run the source chain and render whatever it produced
pub async fn load_and_render(document: Document, container: Element) {
    let config = HeatmapConfig::default();
    let today = Local::now().date_naive();
    let mut rng = Pcg32::seed_from_u64(js_sys::Date::now() as u64);

    let loaded = load_contributions(&HttpFetcher, &config, today, &mut rng).await;

    if let Err(e) = render(&document, &container, &loaded.days) {
        log::error!("Failed to render heatmap: {:?}", e);
        return;
    }
    log::info!("Heatmap rendered ({} days, {:?})", loaded.days.len(), loaded.origin);

    scroll_to_latest(&document);
}
