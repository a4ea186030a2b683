pub mod error;
pub mod event;
pub mod filter;
pub mod metric;

pub use error::*;
pub use event::*;
pub use filter::*;
pub use metric::*;
