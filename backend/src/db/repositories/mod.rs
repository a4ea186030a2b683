//! Repository implementations module.
//!
//! - `local`: immutable in-memory table loaded from the spreadsheet
pub mod local;

pub use local::LocalRepository;
