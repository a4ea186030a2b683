use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use super::table::{Cell, RawTable};
use crate::db::checksum::calculate_checksum;
use crate::models::EventRecord;

/// Sheet holding the event rows in the EM-DAT export.
pub const DEFAULT_SHEET: &str = "EM-DAT Data (Original)";

/// Errors raised while reading the event spreadsheet.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {} has no extension", .0.display())]
    NoExtension(PathBuf),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to open workbook: {0}")]
    Workbook(String),

    #[error("Sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Event table has no header row")]
    MissingHeader,
}

/// Result type for spreadsheet loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Physical format of the event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| LoadError::NoExtension(path.to_path_buf()))?;

        match extension.to_lowercase().as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            "csv" => Ok(SourceFormat::Csv),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Workbook => f.write_str("workbook"),
            SourceFormat::Csv => f.write_str("csv"),
        }
    }
}

/// Provenance of the loaded event table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub source: String,
    pub format: SourceFormat,
    /// Sheet name for workbooks.
    pub sheet: Option<String>,
    /// SHA-256 of the raw file bytes.
    pub checksum: String,
    pub record_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Loads the event table from a workbook sheet or a CSV export.
pub struct EventLoader;

impl EventLoader {
    /// Load events from a file, auto-detecting the format from its extension.
    ///
    /// `sheet` is only consulted for workbooks.
    pub fn load_from_file(path: &Path, sheet: &str) -> LoadResult<(Vec<EventRecord>, DatasetInfo)> {
        let format = SourceFormat::from_path(path)?;
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let checksum = calculate_checksum(&bytes);

        let (table, sheet) = match format {
            SourceFormat::Workbook => (Self::read_workbook(bytes, sheet)?, Some(sheet.to_string())),
            SourceFormat::Csv => (Self::read_csv(bytes.as_slice())?, None),
        };
        let events = table.to_events();

        info!(
            "Loaded {} events from {} ({}, checksum {})",
            events.len(),
            path.display(),
            format,
            &checksum[..12]
        );

        let info = DatasetInfo {
            source: path.display().to_string(),
            format,
            sheet,
            checksum,
            record_count: events.len(),
            loaded_at: Utc::now(),
        };
        Ok((events, info))
    }

    /// Load events from CSV text.
    pub fn load_csv_str(csv_data: &str) -> LoadResult<Vec<EventRecord>> {
        Ok(Self::read_csv(csv_data.as_bytes())?.to_events())
    }

    /// Read a CSV export into a raw table. Ragged rows are tolerated.
    pub fn read_csv<R: Read>(reader: R) -> LoadResult<RawTable> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::MissingHeader);
        }

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from_text).collect());
        }

        Ok(RawTable::new(headers, rows))
    }

    /// Read one sheet of an in-memory workbook into a raw table.
    pub fn read_workbook(bytes: Vec<u8>, sheet: &str) -> LoadResult<RawTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| LoadError::Workbook(e.to_string()))?;

        let available = workbook.sheet_names();
        if !available.iter().any(|name| name == sheet) {
            return Err(LoadError::SheetNotFound {
                sheet: sheet.to_string(),
                available,
            });
        }

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| LoadError::Workbook(e.to_string()))?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or(LoadError::MissingHeader)?
            .iter()
            .map(|c| workbook_cell(c).as_text().unwrap_or_default())
            .collect();

        let rows: Vec<Vec<Cell>> = rows
            .map(|row| row.iter().map(workbook_cell).collect::<Vec<_>>())
            .collect();

        Ok(RawTable::new(headers, rows))
    }
}

fn workbook_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        _ => Cell::Empty,
    }
}
