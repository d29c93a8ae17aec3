use crate::labels;
use crate::models::Cluster;
use crate::pager::Pager;
use crate::sheet::SheetFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub counter: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Everything the popup shows for the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupView {
    pub fields: Vec<PopupField>,
    /// Present only for clusters with more than one record.
    pub navigation: Option<Navigation>,
}

/// Build the popup content for the pager's current record.
///
/// Coordinate columns are hidden. Boundary buttons are disabled, never wrapped.
pub fn render_popup(cluster: &Cluster, pager: &Pager, format: &SheetFormat) -> PopupView {
    let fields = cluster
        .records
        .get(pager.index())
        .map(|record| {
            record
                .fields()
                .filter(|(key, _)| !format.is_coordinate_field(key))
                .map(|(key, value)| PopupField {
                    label: labels::field_label(key).to_string(),
                    value: value.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();

    let navigation = pager.is_paged().then(|| Navigation {
        counter: labels::sample_counter(pager.position(), cluster.len()),
        prev_enabled: pager.has_prev(),
        next_enabled: pager.has_next(),
    });

    PopupView { fields, navigation }
}
