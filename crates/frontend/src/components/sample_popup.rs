use dioxus::prelude::*;
use sample_map_shared::atlas::Atlas;
use sample_map_shared::labels::{CLOSE_BUTTON, NEXT_BUTTON, PREV_BUTTON};

use crate::leaflet::Marker;

/// Paged view over the open cluster. Renders nothing while closed.
#[component]
pub fn SamplePopup(atlas: Signal<Option<Atlas<Marker>>>) -> Element {
    let Some(view) = atlas.read().as_ref().and_then(|a| a.popup_view()) else {
        return rsx! {};
    };

    rsx! {
        div { class: "custom-popup",
            button {
                class: "popup-close",
                "aria-label": CLOSE_BUTTON,
                onclick: move |_| {
                    if let Some(a) = atlas.write().as_mut() {
                        a.close_popup();
                    }
                },
                "×"
            }
            div { class: "popup-fields",
                for field in view.fields.iter() {
                    div {
                        strong { "{field.label}:" }
                        " {field.value}"
                    }
                }
            }
            if let Some(nav) = view.navigation {
                div { class: "sample-counter", "{nav.counter}" }
                div { class: "popup-navigation",
                    button {
                        class: "nav-button",
                        disabled: !nav.prev_enabled,
                        onclick: move |_| {
                            if let Some(a) = atlas.write().as_mut() {
                                a.prev_sample();
                            }
                        },
                        "{PREV_BUTTON}"
                    }
                    button {
                        class: "nav-button",
                        disabled: !nav.next_enabled,
                        onclick: move |_| {
                            if let Some(a) = atlas.write().as_mut() {
                                a.next_sample();
                            }
                        },
                        "{NEXT_BUTTON}"
                    }
                }
            }
        }
    }
}
