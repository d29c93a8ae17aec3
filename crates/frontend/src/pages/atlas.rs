use dioxus::prelude::*;
use sample_map_shared::atlas::Atlas;
use sample_map_shared::labels::LOADING;
use sample_map_shared::models::CoordKey;
use sample_map_shared::sheet::SheetFormat;

use crate::api;
use crate::components::map_view::MapView;
use crate::components::sample_popup::SamplePopup;
use crate::components::search_box::SearchBox;
use crate::config::AppConfig;
use crate::leaflet::{self, LeafletMap, Marker};

/// Coordinate key for a `/at/:lat/:lng` link.
pub fn focus_key(lat: &str, lng: &str) -> Option<CoordKey> {
    CoordKey::parse(&format!("{},{}", lat, lng))
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

#[component]
pub fn AtlasPage(focus: Option<CoordKey>) -> Element {
    let config = AppConfig::from_env();

    let samples = use_resource(move || async move {
        api::load_samples(config.sheet_url, &SheetFormat::default()).await
    });

    let map = use_signal(|| None::<LeafletMap>);
    let mut atlas = use_signal(|| None::<Atlas<Marker>>);
    let mut pending_focus = use_signal(|| focus.clone());

    // Markers are placed only after both the sheet and the map are ready.
    use_effect(move || match &*samples.read() {
        Some(Ok(records)) => {
            let Some(lmap) = map.read().clone() else {
                return;
            };
            if atlas.peek().is_some() {
                return;
            }
            let built = Atlas::from_records(records.clone(), SheetFormat::default(), |cluster| {
                let key = cluster.key.clone();
                leaflet::place_marker(&lmap, cluster.coord, move || {
                    if let Some(a) = atlas.write().as_mut() {
                        if let Some(closed) = a.open_marker(&key) {
                            tracing::debug!(%closed, "Popup superseded");
                        }
                    }
                })
            });
            if let Some(bounds) = built.registry().bounds() {
                leaflet::fit_to(&lmap, bounds, config.fit_padding);
            }
            atlas.set(Some(built));
        }
        Some(Err(err)) => {
            tracing::error!(%err, "Error loading data");
            alert(&api::failure_alert(err));
        }
        None => {}
    });

    // Deep links open their marker once, after markers exist.
    use_effect(move || {
        if atlas.read().is_none() {
            return;
        }
        let Some(key) = pending_focus.write().take() else {
            return;
        };
        let coord = atlas.write().as_mut().and_then(|a| {
            let coord = a.registry().lookup(&key)?.cluster.coord;
            a.open_marker(&key);
            Some(coord)
        });
        match (coord, map.peek().as_ref()) {
            (Some(coord), Some(lmap)) => leaflet::center_on(lmap, coord, config.search_zoom),
            _ => tracing::warn!(%key, "No marker at linked coordinate"),
        }
    });

    let loading = samples.read().is_none();

    rsx! {
        div { class: "app", dir: "rtl",
            SearchBox { atlas: atlas, map: map, zoom: config.search_zoom }
            div { class: "map-shell",
                MapView { config: config, map: map, atlas: atlas }
                SamplePopup { atlas: atlas }
                if loading {
                    div { id: "loading", class: "loading", "{LOADING}" }
                }
            }
        }
    }
}
