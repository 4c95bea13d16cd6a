//! Platform abstraction layer
//!
//! Browser access for the widgets:
//! - Window/document handles
//! - Viewport and document size
//! - HTTP (gloo-net fetch)

#[cfg(target_arch = "wasm32")]
mod web {
    use gloo_net::http::Request;
    use web_sys::{Document, Element, Window};

    use crate::field::Surface;
    use crate::heatmap::{FetchError, Fetcher};

    pub fn window() -> Option<Window> {
        web_sys::window()
    }

    pub fn document() -> Option<Document> {
        window()?.document()
    }

    /// Element by id, logging when the anchor is missing
    pub fn anchor(document: &Document, id: &str) -> Option<Element> {
        let el = document.get_element_by_id(id);
        if el.is_none() {
            log::info!("No #{} on this page, widget skipped", id);
        }
        el
    }

    /// Viewport width by full document height, in CSS pixels
    pub fn page_surface() -> Option<Surface> {
        let window = window()?;
        let document = window.document()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = document.document_element()?.scroll_height() as f64;
        Some(Surface::new(
            width as f32,
            height as f32,
            window.device_pixel_ratio() as f32,
        ))
    }

    /// Vertical scroll offset, for converting client to document coordinates
    pub fn scroll_y() -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    /// Fetch over the browser's `fetch`
    pub struct HttpFetcher;

    impl Fetcher for HttpFetcher {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if !response.ok() {
                return Err(FetchError::Status(response.status()));
            }

            response
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;
