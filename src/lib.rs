// Crate root library declaration and module exports.
pub mod cache;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod query;
pub mod sensor;
pub mod source;

pub use cache::ObservanceCache;
pub use model::{Observance, ObservanceTable, ParsedDate, RawRow, Scope};
pub use query::DayQueryEngine;
