//! Minimal Leaflet bindings. Leaflet itself is loaded by `Dioxus.toml`.

use js_sys::{Array, Function, Object, Reflect};
use sample_map_shared::models::Coord;
use sample_map_shared::registry::Bounds;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    #[wasm_bindgen(js_namespace = L, js_name = Map)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    fn create_map(element_id: &str, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &Array, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = on)]
    fn on(this: &LeafletMap, event: &str, handler: &Function) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L, js_name = TileLayer)]
    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    #[wasm_bindgen(js_namespace = L, js_name = Marker)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(latlng: &Array, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = on)]
    fn on(this: &Marker, event: &str, handler: &Function) -> Marker;

    #[wasm_bindgen(js_namespace = L, js_name = DivIcon)]
    type DivIcon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> DivIcon;
}

const SKULL_SVG: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" class="skull-icon"><path fill="#000000" d="M12,2A9,9 0 0,0 3,11C3,14.03 4.53,16.82 7,18.47V22H9V19H11V22H13V19H15V22H17V18.46C19.47,16.81 21,14.03 21,11A9,9 0 0,0 12,2M8,11A2,2 0 0,1 10,13A2,2 0 0,1 8,15A2,2 0 0,1 6,13A2,2 0 0,1 8,11M16,11A2,2 0 0,1 18,13A2,2 0 0,1 16,15A2,2 0 0,1 14,13A2,2 0 0,1 16,11M12,14L13.5,17H10.5L12,14Z" /></svg>"##;

const ICON_SIZE: f64 = 24.0;

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in entries {
        // Reflect::set only fails on frozen objects
        let _ = Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

fn pair(a: f64, b: f64) -> Array {
    Array::of2(&JsValue::from_f64(a), &JsValue::from_f64(b))
}

fn latlng(c: Coord) -> Array {
    pair(c.lat, c.lng)
}

fn skull_icon() -> DivIcon {
    let half = ICON_SIZE / 2.0;
    div_icon(&options(&[
        ("html", JsValue::from_str(SKULL_SVG)),
        ("className", JsValue::from_str("skull-icon")),
        ("iconSize", pair(ICON_SIZE, ICON_SIZE).into()),
        ("iconAnchor", pair(half, half).into()),
        ("popupAnchor", pair(0.0, -half).into()),
    ]))
}

/// Create the map in `element_id` with the OSM base layer.
pub fn init_map(element_id: &str, config: &AppConfig) -> LeafletMap {
    let map = create_map(element_id, &options(&[]));
    map.set_view(&latlng(config.initial_center), config.initial_zoom);
    tile_layer(
        config.tile_url,
        &options(&[("attribution", JsValue::from_str(config.tile_attribution))]),
    )
    .add_to(&map);
    map
}

/// Run `handler` on every click on the map background.
pub fn on_map_click(map: &LeafletMap, handler: impl FnMut() + 'static) {
    let closure = Closure::<dyn FnMut()>::new(handler);
    map.on("click", closure.as_ref().unchecked_ref());
    // the map lives for the whole page session
    closure.forget();
}

/// Place a skull marker at `coord` that runs `on_click` when clicked.
pub fn place_marker(map: &LeafletMap, coord: Coord, on_click: impl FnMut() + 'static) -> Marker {
    let marker = create_marker(&latlng(coord), &options(&[("icon", skull_icon().into())]));
    marker.add_to(map);
    let closure = Closure::<dyn FnMut()>::new(on_click);
    marker.on("click", closure.as_ref().unchecked_ref());
    // markers are never removed
    closure.forget();
    marker
}

pub fn center_on(map: &LeafletMap, coord: Coord, zoom: f64) {
    map.set_view(&latlng(coord), zoom);
}

/// Frame the view around every marker.
pub fn fit_to(map: &LeafletMap, bounds: Bounds, padding: f64) {
    let corners = Array::of2(&latlng(bounds.south_west), &latlng(bounds.north_east));
    map.fit_bounds(&corners, &options(&[("padding", pair(padding, padding).into())]));
}
