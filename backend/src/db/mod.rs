//! Storage layer for the event table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / services                               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │  &dyn EventRepository
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - read-only interface   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LocalRepository - immutable in-memory table            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no process-wide repository: the binary loads the table once and
//! passes it down explicitly.

pub mod checksum;
pub mod repositories;
pub mod repository;

pub use checksum::calculate_checksum;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, EventRepository, RepositoryError, RepositoryResult};
