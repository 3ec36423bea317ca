//! Leaflet Bindings
//!
//! Minimal wasm-bindgen surface over the Leaflet `L` global loaded by the
//! host page. Only what the map view needs: a map with a tile layer, a
//! marker group, popups, and click events.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = closePopup)]
    pub fn close_popup(this: &LeafletMap);
}

#[wasm_bindgen]
extern "C" {
    /// `L.TileLayer`
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    /// `L.LayerGroup`
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);
}

#[wasm_bindgen]
extern "C" {
    /// `L.Marker`
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, group: &LayerGroup) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &web_sys::Element) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    /// Leaflet mouse event carrying the clicked coordinates.
    pub type LeafletMouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &LeafletMouseEvent) -> LatLng;

    /// `L.LatLng`
    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// Tile layer options, serialized with Leaflet's camelCase field names.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    max_zoom: u8,
    attribution: &'a str,
}

/// `[lat, lng]` pair in the shape Leaflet accepts everywhere.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&[lat, lng]).unwrap_or(JsValue::NULL)
}

pub fn tile_layer_options(max_zoom: u8, attribution: &str) -> JsValue {
    serde_wasm_bindgen::to_value(&TileLayerOptions {
        max_zoom,
        attribution,
    })
    .unwrap_or(JsValue::NULL)
}
