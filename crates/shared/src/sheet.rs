use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::models::Record;
use crate::numerals::parse_coordinate;

/// Published Google Sheet the map reads from.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vR6PofkmS3WNppu0IPU7aYpSFhIOcXuxoa8d2TK9KEo5DfiYQaH9BNeUJHfNJ-V0gy0HpRlVBGn12H5/pub?output=csv";

pub const DEFAULT_LATITUDE_FIELD: &str = "Latitude";
pub const DEFAULT_LONGITUDE_FIELD: &str = "Longitude";

/// How the published sheet is laid out.
///
/// The Google Sheets export is requested as `output=csv` yet arrives
/// tab-separated, hence the tab default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetFormat {
    pub delimiter: char,
    pub latitude_field: String,
    pub longitude_field: String,
}

impl Default for SheetFormat {
    fn default() -> Self {
        SheetFormat {
            delimiter: '\t',
            latitude_field: DEFAULT_LATITUDE_FIELD.to_string(),
            longitude_field: DEFAULT_LONGITUDE_FIELD.to_string(),
        }
    }
}

impl SheetFormat {
    pub fn is_coordinate_field(&self, field: &str) -> bool {
        field == self.latitude_field || field == self.longitude_field
    }
}

/// Parse delimited text into records, one per non-blank data line.
///
/// The header row fixes column order. Cells are matched positionally and
/// trimmed; short rows are padded with `""`, surplus cells are ignored.
pub fn parse_sheet(text: &str, format: &SheetFormat) -> Result<Vec<Record>, FormatError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());
    let (_, header_line) = lines.next().ok_or(FormatError::MissingHeader)?;
    let headers: Vec<String> = header_line
        .split(format.delimiter)
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(FormatError::EmptyHeader);
    }

    let records: Vec<Record> = lines
        .map(|(number, line)| parse_row(line, &headers, format).at_line(number))
        .collect();

    tracing::debug!(columns = headers.len(), rows = records.len(), "Parsed sheet");
    Ok(records)
}

fn parse_row(line: &str, headers: &[String], format: &SheetFormat) -> Record {
    let mut cells = line.split(format.delimiter);
    let mut latitude = None;
    let mut longitude = None;

    let fields = headers
        .iter()
        .map(|header| {
            let value = cells.next().map(str::trim).unwrap_or("").to_string();
            if *header == format.latitude_field {
                latitude = parse_coordinate(&value);
            } else if *header == format.longitude_field {
                longitude = parse_coordinate(&value);
            }
            (header.clone(), value)
        })
        .collect();

    Record::new(fields, latitude, longitude)
}
