//! Location map
//!
//! A fixed point on a Leaflet slippy map. Zoom and pan are Leaflet's
//! business; this module only describes the map and hands it over.

use serde::Serialize;

use crate::consts::MAP_ID;

/// Austin, TX
pub const MAP_CENTER: [f64; 2] = [30.2672, -97.7431];
/// Slightly south of the center so the dot does not cover the city label
pub const MARKER_POSITION: [f64; 2] = [30.264, -97.7431];
pub const TILE_URL: &str =
    "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: [f64; 2],
    pub zoom: u8,
    pub zoom_control: bool,
    pub scroll_wheel_zoom: bool,
    pub dragging: bool,
    pub touch_zoom: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub attribution: String,
    pub subdomains: String,
    pub max_zoom: u8,
}

/// Leaflet circle marker style
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: String,
    pub color: String,
    pub weight: f64,
    pub fill_opacity: f64,
    pub opacity: f64,
    pub class_name: String,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub element_id: String,
    pub map: MapOptions,
    pub tile_url: String,
    pub tiles: TileOptions,
    pub marker_position: [f64; 2],
    /// Solid location dot
    pub dot: MarkerStyle,
    /// Translucent halo drawn under the dot
    pub glow: MarkerStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            element_id: MAP_ID.to_string(),
            map: MapOptions {
                center: MAP_CENTER,
                zoom: 11,
                zoom_control: true,
                scroll_wheel_zoom: false,
                dragging: true,
                touch_zoom: true,
            },
            tile_url: TILE_URL.to_string(),
            tiles: TileOptions {
                attribution: String::new(),
                subdomains: "abcd".to_string(),
                max_zoom: 19,
            },
            marker_position: MARKER_POSITION,
            dot: MarkerStyle {
                radius: 6.0,
                fill_color: "#3b82f6".to_string(),
                color: "#ffffff".to_string(),
                weight: 2.0,
                fill_opacity: 1.0,
                opacity: 1.0,
                class_name: "blue-location-dot".to_string(),
            },
            glow: MarkerStyle {
                radius: 14.0,
                fill_color: "#3b82f6".to_string(),
                color: "transparent".to_string(),
                weight: 0.0,
                fill_opacity: 0.4,
                opacity: 0.0,
                class_name: "blue-location-glow".to_string(),
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod leaflet {
    use wasm_bindgen::prelude::*;

    // Bindings to the global `L` loaded by the page
    #[wasm_bindgen]
    extern "C" {
        pub type LeafletMap;
        pub type Layer;

        #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
        pub fn create_map(id: &str, options: &JsValue) -> Result<LeafletMap, JsValue>;

        #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &JsValue) -> Result<Layer, JsValue>;

        #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
        pub fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &Layer, map: &LeafletMap) -> Layer;
    }
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue> {
    let json = serde_json::to_string(value)
        .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Build the map, tile layer and markers (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn init_map(config: &MapConfig) -> Result<(), wasm_bindgen::JsValue> {
    let map = leaflet::create_map(&config.element_id, &to_js(&config.map)?)?;
    leaflet::tile_layer(&config.tile_url, &to_js(&config.tiles)?)?.add_to(&map);

    let position = to_js(&config.marker_position)?;
    leaflet::circle_marker(&position, &to_js(&config.dot)?)?.add_to(&map);
    leaflet::circle_marker(&position, &to_js(&config.glow)?)?.add_to(&map);

    log::info!("Map initialized");
    Ok(())
}
