//! Format-independent cell grid and its mapping onto event records.

use log::warn;

use super::columns;
use crate::models::EventRecord;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// Build a cell from raw CSV text: blanks are empty, numerals are numbers.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                Some(format!("{}", *n as i64))
            }
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Whole-number value; fractional numbers are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64()
            .filter(|n| n.fract() == 0.0 && n.abs() < 9.0e15)
            .map(|n| n as i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cell::Bool(b) => Some(*b),
            Cell::Number(n) if *n == 1.0 => Some(true),
            Cell::Number(n) if *n == 0.0 => Some(false),
            Cell::Text(s) => match s.trim().to_lowercase().as_str() {
                "yes" | "true" | "y" | "1" => Some(true),
                "no" | "false" | "n" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Header row plus data rows, as read from a sheet or CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let headers = headers.into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Names from [`columns::RELEVANT_COLUMNS`] absent from the header row.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::RELEVANT_COLUMNS
            .iter()
            .copied()
            .filter(|name| self.resolve(name).is_none())
            .collect()
    }

    fn resolve(&self, name: &str) -> Option<usize> {
        self.column_index(name).or_else(|| {
            if name == columns::TOTAL_DAMAGES {
                self.column_index(columns::TOTAL_DAMAGES_ALIAS)
            } else {
                None
            }
        })
    }

    /// Map every data row onto an [`EventRecord`].
    ///
    /// Missing columns yield `None` for every record; fully blank rows are
    /// skipped.
    pub fn to_events(&self) -> Vec<EventRecord> {
        for name in self.missing_columns() {
            warn!("Column '{}' not found in event table; values will be empty", name);
        }

        let idx = ColumnIndex::resolve(self);
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|c| *c != Cell::Empty))
            .map(|(n, row)| idx.record(row, n))
            .collect()
    }
}

/// Column positions resolved once per table.
struct ColumnIndex {
    dis_no: Option<usize>,
    historic: Option<usize>,
    classification_key: Option<usize>,
    disaster_group: Option<usize>,
    disaster_subgroup: Option<usize>,
    disaster_type: Option<usize>,
    disaster_subtype: Option<usize>,
    event_name: Option<usize>,
    country: Option<usize>,
    subregion: Option<usize>,
    region: Option<usize>,
    location: Option<usize>,
    associated_types: Option<usize>,
    start_year: Option<usize>,
    start_month: Option<usize>,
    start_day: Option<usize>,
    end_year: Option<usize>,
    end_month: Option<usize>,
    end_day: Option<usize>,
    total_deaths: Option<usize>,
    no_injured: Option<usize>,
    no_affected: Option<usize>,
    no_homeless: Option<usize>,
    total_affected: Option<usize>,
    total_damages: Option<usize>,
}

impl ColumnIndex {
    fn resolve(table: &RawTable) -> Self {
        Self {
            dis_no: table.resolve(columns::DIS_NO),
            historic: table.resolve(columns::HISTORIC),
            classification_key: table.resolve(columns::CLASSIFICATION_KEY),
            disaster_group: table.resolve(columns::DISASTER_GROUP),
            disaster_subgroup: table.resolve(columns::DISASTER_SUBGROUP),
            disaster_type: table.resolve(columns::DISASTER_TYPE),
            disaster_subtype: table.resolve(columns::DISASTER_SUBTYPE),
            event_name: table.resolve(columns::EVENT_NAME),
            country: table.resolve(columns::COUNTRY),
            subregion: table.resolve(columns::SUBREGION),
            region: table.resolve(columns::REGION),
            location: table.resolve(columns::LOCATION),
            associated_types: table.resolve(columns::ASSOCIATED_TYPES),
            start_year: table.resolve(columns::START_YEAR),
            start_month: table.resolve(columns::START_MONTH),
            start_day: table.resolve(columns::START_DAY),
            end_year: table.resolve(columns::END_YEAR),
            end_month: table.resolve(columns::END_MONTH),
            end_day: table.resolve(columns::END_DAY),
            total_deaths: table.resolve(columns::TOTAL_DEATHS),
            no_injured: table.resolve(columns::NO_INJURED),
            no_affected: table.resolve(columns::NO_AFFECTED),
            no_homeless: table.resolve(columns::NO_HOMELESS),
            total_affected: table.resolve(columns::TOTAL_AFFECTED),
            total_damages: table.resolve(columns::TOTAL_DAMAGES),
        }
    }

    fn record(&self, row: &[Cell], row_number: usize) -> EventRecord {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));
        let text = |idx: Option<usize>| cell(idx).and_then(Cell::as_text);
        let int = |idx: Option<usize>| cell(idx).and_then(Cell::as_i64);
        let year = |idx: Option<usize>| int(idx).and_then(|v| i32::try_from(v).ok());
        let small = |idx: Option<usize>| int(idx).and_then(|v| u32::try_from(v).ok());
        let people = |idx: Option<usize>| int(idx).and_then(|v| u64::try_from(v).ok());

        EventRecord {
            dis_no: text(self.dis_no).unwrap_or_else(|| format!("row-{}", row_number + 1)),
            historic: cell(self.historic).and_then(Cell::as_bool),
            classification_key: text(self.classification_key),
            disaster_group: text(self.disaster_group),
            disaster_subgroup: text(self.disaster_subgroup),
            disaster_type: text(self.disaster_type),
            disaster_subtype: text(self.disaster_subtype),
            event_name: text(self.event_name),
            country: text(self.country),
            subregion: text(self.subregion),
            region: text(self.region),
            location: text(self.location),
            associated_types: text(self.associated_types),
            start_year: year(self.start_year),
            start_month: small(self.start_month),
            start_day: small(self.start_day),
            end_year: year(self.end_year),
            end_month: small(self.end_month),
            end_day: small(self.end_day),
            total_deaths: people(self.total_deaths),
            no_injured: people(self.no_injured),
            no_affected: people(self.no_affected),
            no_homeless: people(self.no_homeless),
            total_affected: people(self.total_affected),
            total_damages_kusd: cell(self.total_damages)
                .and_then(Cell::as_f64)
                .filter(|v| *v >= 0.0),
        }
    }
}
