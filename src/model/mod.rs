// File: ./src/model/mod.rs
pub mod easter;
pub mod observance;
pub mod parser;
pub mod reconcile;
pub mod variable_days;

pub use observance::{Observance, ObservanceTable, ParsedDate, RawRow, Scope};
