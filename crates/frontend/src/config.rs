use sample_map_shared::models::Coord;
use sample_map_shared::sheet::DEFAULT_SHEET_URL;

/// Build-time settings for the map page.
///
/// `SAMPLE_SHEET_URL` may be set when building to point at another sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub sheet_url: &'static str,
    pub initial_center: Coord,
    pub initial_zoom: f64,
    /// Zoom used when jumping to a search result.
    pub search_zoom: f64,
    /// Padding in pixels kept around markers when framing the view.
    pub fit_padding: f64,
    pub tile_url: &'static str,
    pub tile_attribution: &'static str,
}

impl AppConfig {
    pub const fn from_env() -> Self {
        let sheet_url = match option_env!("SAMPLE_SHEET_URL") {
            Some(url) => url,
            None => DEFAULT_SHEET_URL,
        };
        AppConfig {
            sheet_url,
            initial_center: Coord {
                lat: 50.615,
                lng: 86.459,
            },
            initial_zoom: 6.0,
            search_zoom: 12.0,
            fit_padding: 50.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            tile_attribution: "© OpenStreetMap contributors",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
