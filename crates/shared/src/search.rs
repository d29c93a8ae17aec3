use crate::labels::{self, HAPLOGROUP_FIELD, SAMPLE_FIELD, SEX_FIELD};
use crate::models::Record;

/// Columns the search box matches against.
pub const SEARCH_FIELDS: [&str; 3] = [SAMPLE_FIELD, SEX_FIELD, HAPLOGROUP_FIELD];

/// Queries shorter than this (in characters) are not searches at all.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; the results panel stays hidden.
    Inactive,
    /// Indices into the indexed record list, in source order.
    Matches(Vec<usize>),
}

impl SearchOutcome {
    pub fn shows_panel(&self) -> bool {
        matches!(self, SearchOutcome::Matches(hits) if !hits.is_empty())
    }

    pub fn hits(&self) -> &[usize] {
        match self {
            SearchOutcome::Inactive => &[],
            SearchOutcome::Matches(hits) => hits,
        }
    }
}

/// Linear case-insensitive substring filter over the searched columns.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    haystacks: Vec<[String; 3]>,
}

impl SearchIndex {
    pub fn new(records: &[Record]) -> Self {
        let haystacks = records
            .iter()
            .map(|r| SEARCH_FIELDS.map(|f| r.get(f).unwrap_or("").to_lowercase()))
            .collect();
        SearchIndex { haystacks }
    }

    pub fn len(&self) -> usize {
        self.haystacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.haystacks.is_empty()
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        let needle = query.to_lowercase();
        if needle.chars().count() < MIN_QUERY_CHARS {
            return SearchOutcome::Inactive;
        }
        let hits = self
            .haystacks
            .iter()
            .enumerate()
            .filter(|(_, fields)| fields.iter().any(|f| f.contains(&needle)))
            .map(|(i, _)| i)
            .collect();
        SearchOutcome::Matches(hits)
    }
}

/// Label/value lines shown for one entry in the results list.
pub fn result_summary(record: &Record) -> Vec<(&'static str, String)> {
    [SAMPLE_FIELD, SEX_FIELD]
        .into_iter()
        .map(|f| (labels::field_label(f), record.get(f).unwrap_or("").to_string()))
        .collect()
}
