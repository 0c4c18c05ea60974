//! # edi-adapter-csv
//!
//! CSV adapter for loading EDI specification tables.
//!
//! Specification tables arrive as CSV exports of segment/element
//! enumerations. This crate reads them into the plain row form the
//! conversion engine consumes — an ordered list of ordered string cells,
//! header row included — without interpreting any column.

pub mod errors;
pub mod reader;

pub use errors::{CsvError, CsvResult};
pub use reader::SpecTableReader;
