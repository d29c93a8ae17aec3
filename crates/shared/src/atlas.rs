use crate::error::FormatError;
use crate::grouping::group;
use crate::models::{Cluster, Coord, CoordKey, Record};
use crate::pager::PopupController;
use crate::popup::{render_popup, PopupView};
use crate::registry::MarkerRegistry;
use crate::search::{SearchIndex, SearchOutcome};
use crate::sheet::{parse_sheet, SheetFormat};

/// What the map surface should do after a search result is picked.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Recenter on `coord` and show the popup for `key`.
    Show { key: CoordKey, coord: Coord },
    /// The record has no marker; only the search box is cleared.
    Miss,
}

/// One loaded sheet: records, markers, search and the open popup.
///
/// Every record stays searchable, including rows whose coordinates could not
/// be parsed. Only rows with valid coordinates get markers.
#[derive(Debug, Clone)]
pub struct Atlas<H> {
    format: SheetFormat,
    records: Vec<Record>,
    index: SearchIndex,
    registry: MarkerRegistry<H>,
    popup: PopupController,
}

impl<H> Atlas<H> {
    pub fn from_records<F>(records: Vec<Record>, format: SheetFormat, create_marker: F) -> Self
    where
        F: FnMut(&Cluster) -> H,
    {
        let index = SearchIndex::new(&records);
        let registry = MarkerRegistry::populate(group(&records), create_marker);
        Atlas {
            format,
            records,
            index,
            registry,
            popup: PopupController::new(),
        }
    }

    /// Parse sheet text and place one marker per coordinate.
    pub fn load<F>(text: &str, format: SheetFormat, create_marker: F) -> Result<Self, FormatError>
    where
        F: FnMut(&Cluster) -> H,
    {
        let records = parse_sheet(text, &format)?;
        Ok(Self::from_records(records, format, create_marker))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn registry(&self) -> &MarkerRegistry<H> {
        &self.registry
    }

    pub fn popup(&self) -> &PopupController {
        &self.popup
    }

    /// Open the popup for a marker. Unknown keys are ignored.
    ///
    /// Returns the key of the popup that was closed to make room.
    pub fn open_marker(&mut self, key: &CoordKey) -> Option<CoordKey> {
        let len = self.registry.lookup(key)?.cluster.len();
        self.popup.open(key.clone(), len)
    }

    pub fn next_sample(&mut self) {
        self.popup.next();
    }

    pub fn prev_sample(&mut self) {
        self.popup.prev();
    }

    pub fn close_popup(&mut self) -> Option<CoordKey> {
        self.popup.close()
    }

    /// Rendered content of the open popup, if any.
    pub fn popup_view(&self) -> Option<PopupView> {
        let open = self.popup.current()?;
        let entry = self.registry.lookup(&open.key)?;
        Some(render_popup(&entry.cluster, &open.pager, &self.format))
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        self.index.search(query)
    }

    /// Records for a search outcome, in source order.
    pub fn hits<'a>(&'a self, outcome: &'a SearchOutcome) -> impl Iterator<Item = (usize, &'a Record)> + 'a {
        outcome
            .hits()
            .iter()
            .filter_map(move |&i| self.records.get(i).map(|r| (i, r)))
    }

    /// Act on a picked search result by record index.
    pub fn select_result(&mut self, record_index: usize) -> Selection {
        let Some(key) = self
            .records
            .get(record_index)
            .and_then(Record::coord_key)
        else {
            return Selection::Miss;
        };
        let Some(coord) = self.registry.lookup(&key).map(|e| e.cluster.coord) else {
            return Selection::Miss;
        };
        self.open_marker(&key);
        Selection::Show { key, coord }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::PopupState;

    const SHEET: &str = "o\tSex\ty\tLatitude\tLongitude\n\
                         S1\tM\tR1a\t50.615\t86.459\n\
                         S2\tF\tN1c\t50.615\t86.459\n\
                         S3\tM\tQ1b\t55.0\t90.0\n";

    fn load() -> (Atlas<usize>, Vec<CoordKey>) {
        let mut placed = Vec::new();
        let atlas = Atlas::load(SHEET, SheetFormat::default(), |c| {
            placed.push(c.key.clone());
            placed.len() - 1
        })
        .unwrap();
        (atlas, placed)
    }

    #[test]
    fn test_two_markers_for_three_rows() {
        let (atlas, placed) = load();
        assert_eq!(placed.len(), 2);
        assert_eq!(atlas.registry().len(), 2);
        assert_eq!(atlas.records().len(), 3);
    }

    #[test]
    fn test_click_and_page_through_cluster() {
        let (mut atlas, placed) = load();
        assert!(atlas.popup_view().is_none());

        atlas.open_marker(&placed[0]);
        let nav = atlas.popup_view().unwrap().navigation.unwrap();
        assert_eq!(nav.counter, "عينة 1 من 2");
        assert!(nav.next_enabled);
        assert!(!nav.prev_enabled);

        atlas.next_sample();
        let view = atlas.popup_view().unwrap();
        assert_eq!(view.fields[0].value, "S2");
        let nav = view.navigation.unwrap();
        assert_eq!(nav.counter, "عينة 2 من 2");
        assert!(!nav.next_enabled);
        assert!(nav.prev_enabled);
    }

    #[test]
    fn test_opening_another_marker_closes_previous() {
        let (mut atlas, placed) = load();
        atlas.open_marker(&placed[0]);
        atlas.next_sample();
        assert_eq!(atlas.open_marker(&placed[1]), Some(placed[0].clone()));
        assert_eq!(
            atlas.popup().state(),
            PopupState::Showing {
                key: placed[1].clone(),
                index: 0
            }
        );
        assert!(atlas.popup_view().unwrap().navigation.is_none());
    }

    #[test]
    fn test_one_char_query_never_opens_panel() {
        let (atlas, _) = load();
        for q in ["S", "M", "1", "R"] {
            assert!(!atlas.search(q).shows_panel());
        }
    }

    #[test]
    fn test_select_result_opens_popup_at_first_record() {
        let (mut atlas, placed) = load();
        let outcome = atlas.search("n1c");
        let (idx, record) = atlas.hits(&outcome).next().unwrap();
        assert_eq!(record.get("o"), Some("S2"));
        let selection = atlas.select_result(idx);
        assert_eq!(
            selection,
            Selection::Show {
                key: placed[0].clone(),
                coord: Coord::new(50.615, 86.459)
            }
        );
        // the cluster opens at its first record, not the matched one
        assert_eq!(atlas.popup_view().unwrap().fields[0].value, "S1");
    }

    #[test]
    fn test_select_record_without_marker_is_miss() {
        let text = "o\tSex\ty\tLatitude\tLongitude\nS1\tM\tR1a\t\t86.1\nS2\tF\tR1a\t1\t2\n";
        let mut atlas = Atlas::load(text, SheetFormat::default(), |_| ()).unwrap();
        let outcome = atlas.search("r1a");
        assert_eq!(outcome.hits(), &[0, 1]);
        assert_eq!(atlas.select_result(0), Selection::Miss);
        assert_eq!(atlas.popup().state(), PopupState::Closed);
        assert_eq!(atlas.select_result(99), Selection::Miss);
    }

    #[test]
    fn test_unknown_marker_key_ignored() {
        let (mut atlas, _) = load();
        assert_eq!(atlas.open_marker(&CoordKey::parse("0,0").unwrap()), None);
        assert_eq!(atlas.popup().state(), PopupState::Closed);
    }

    #[test]
    fn test_load_propagates_format_error() {
        let result = Atlas::load("", SheetFormat::default(), |_| ());
        assert_eq!(result.err(), Some(FormatError::MissingHeader));
    }
}
