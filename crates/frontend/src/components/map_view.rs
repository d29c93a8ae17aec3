use dioxus::prelude::*;
use sample_map_shared::atlas::Atlas;

use crate::config::AppConfig;
use crate::leaflet::{self, LeafletMap, Marker};

pub const MAP_ELEMENT_ID: &str = "map";

/// Host element for the Leaflet map.
///
/// The map is created once the element is mounted. Clicking the map
/// background closes the open popup.
#[component]
pub fn MapView(
    config: AppConfig,
    map: Signal<Option<LeafletMap>>,
    atlas: Signal<Option<Atlas<Marker>>>,
) -> Element {
    rsx! {
        div {
            id: MAP_ELEMENT_ID,
            class: "map",
            onmounted: move |_| {
                if map.peek().is_some() {
                    return;
                }
                let lmap = leaflet::init_map(MAP_ELEMENT_ID, &config);
                leaflet::on_map_click(&lmap, move || {
                    if let Some(a) = atlas.write().as_mut() {
                        a.close_popup();
                    }
                });
                tracing::debug!("Map initialized");
                map.set(Some(lmap));
            },
        }
    }
}
