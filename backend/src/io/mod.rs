//! Spreadsheet loading for the event table.
//!
//! The dashboard reads one EM-DAT export at startup. Workbooks (`.xlsx`,
//! `.xlsm`, `.xls`, `.ods`) are read from a fixed sheet; `.csv` exports of that
//! sheet are accepted as well. Both formats are first read into a
//! [`RawTable`](table::RawTable) and then mapped onto
//! [`EventRecord`](crate::models::EventRecord)s by header name.

pub mod columns;
pub mod loaders;
pub mod table;

pub use loaders::{DatasetInfo, EventLoader, LoadError, LoadResult, SourceFormat, DEFAULT_SHEET};
pub use table::{Cell, RawTable};
