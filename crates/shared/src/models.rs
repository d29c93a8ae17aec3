use serde::{Deserialize, Serialize};

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lng: f64,
}

impl Coord {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coord { lat, lng }
    }

    pub fn key(&self) -> CoordKey {
        CoordKey::from_coord(*self)
    }
}

/// Render a number the way the grouping key expects: shortest round-trip
/// decimal, no trailing `.0`, and negative zero folded into zero.
fn key_number(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else {
        v.to_string()
    }
}

/// String form of a normalized coordinate pair, e.g. `"50.615,86.459"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordKey(String);

impl CoordKey {
    pub fn from_coord(coord: Coord) -> Self {
        CoordKey(format!("{},{}", key_number(coord.lat), key_number(coord.lng)))
    }

    /// Parse a `"lat,lng"` key back into a coordinate.
    pub fn parse(raw: &str) -> Option<Self> {
        let (lat, lng) = raw.split_once(',')?;
        let lat: f64 = lat.trim().parse().ok()?;
        let lng: f64 = lng.trim().parse().ok()?;
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        Some(CoordKey::from_coord(Coord::new(lat, lng)))
    }

    pub fn coord(&self) -> Option<Coord> {
        let (lat, lng) = self.0.split_once(',')?;
        Some(Coord::new(lat.parse().ok()?, lng.parse().ok()?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One spreadsheet row.
///
/// Fields keep header order and raw text, coordinate columns included. The
/// two coordinates are additionally coerced to numbers at load time; a cell
/// that could not be coerced is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, String)>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    line: usize,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Record {
            fields,
            latitude,
            longitude,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// 1-based line in the source sheet, 0 for records built in code.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Value of a column, `None` if the sheet has no such header.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }

    /// Both coordinates, only when both are present and finite.
    pub fn coord(&self) -> Option<Coord> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(Coord::new(lat, lng))
            }
            _ => None,
        }
    }

    pub fn coord_key(&self) -> Option<CoordKey> {
        self.coord().map(CoordKey::from_coord)
    }
}

/// Records sharing one exact coordinate pair, in source order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub key: CoordKey,
    pub coord: Coord,
    pub records: Vec<Record>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
