mod api;
mod components;
mod config;
mod leaflet;
mod pages;

use dioxus::prelude::*;
use sample_map_shared::models::CoordKey;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/at/:lat/:lng")]
    Focus { lat: String, lng: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::atlas::AtlasPage { focus: None::<CoordKey> }
    }
}

#[component]
fn Focus(lat: String, lng: String) -> Element {
    rsx! {
        pages::atlas::AtlasPage { focus: pages::atlas::focus_key(&lat, &lng) }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
