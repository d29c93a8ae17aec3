use dioxus::prelude::*;
use sample_map_shared::atlas::{Atlas, Selection};
use sample_map_shared::labels::SEARCH_PLACEHOLDER;
use sample_map_shared::search::result_summary;

use crate::leaflet::{self, LeafletMap, Marker};

/// Search input with its results list.
///
/// The list only shows for queries of two or more characters that match
/// something. Picking a result recenters on its marker, opens the popup and
/// clears the box.
#[component]
pub fn SearchBox(
    atlas: Signal<Option<Atlas<Marker>>>,
    map: Signal<Option<LeafletMap>>,
    zoom: f64,
) -> Element {
    let mut query = use_signal(String::new);

    let hits: Vec<(usize, Vec<(&'static str, String)>)> = match atlas.read().as_ref() {
        Some(a) => {
            let outcome = a.search(&query.read());
            a.hits(&outcome)
                .map(|(i, record)| (i, result_summary(record)))
                .collect()
        }
        None => Vec::new(),
    };

    rsx! {
        div { class: "search-container",
            input {
                id: "searchInput",
                class: "search-input",
                r#type: "search",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{query}",
                oninput: move |evt: Event<FormData>| {
                    query.set(evt.value());
                },
            }
            if !hits.is_empty() {
                div { class: "search-results",
                    for (i, summary) in hits {
                        div {
                            key: "{i}",
                            class: "search-result-item",
                            onclick: move |_| {
                                let selection = atlas.write().as_mut().map(|a| a.select_result(i));
                                match selection {
                                    Some(Selection::Show { coord, .. }) => {
                                        if let Some(m) = map.peek().as_ref() {
                                            leaflet::center_on(m, coord, zoom);
                                        }
                                    }
                                    _ => tracing::debug!(record = i, "Search result has no marker"),
                                }
                                query.set(String::new());
                            },
                            for (label, value) in summary {
                                div {
                                    strong { "{label}:" }
                                    " {value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
