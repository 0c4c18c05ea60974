#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

//! # edi-convert
//!
//! Conversion engine from flat EDI specification tables to hierarchical
//! schemas.
//!
//! Specification tables describe loops, segments, and elements as a
//! sequence of independent rows with no nesting syntax. This crate
//! reconstructs the loop hierarchy from those rows, hoists segment types
//! shared across loops into a common namespace, and emits a single ordered
//! asset list in final document order:
//!
//! raw rows → row mapper → segment grouping → {common extraction, loop
//! assembly} → document assembly → ordered asset list.
//!
//! The whole pipeline is a pure, synchronous, in-memory transformation.
//! Inside it, malformed cells degrade to documented defaults rather than
//! failing a run; the only hard failure is degenerate input (no header row
//! or no data rows), signaled by [`convert`] returning `None`.

/// Common-element extraction across loops.
pub mod common;
/// Run context: namespace, version, and title, loadable from YAML.
pub mod context;
/// Document assembly and final sequence-id numbering.
pub mod document;
/// Segment grouping over the mapped row stream.
pub mod group;
/// Loop hierarchy assembly.
pub mod loops;
/// Top-level conversion driver.
pub mod pipeline;
/// Positional row binding onto named fields.
pub mod row;

pub use common::extract_common;
pub use context::ConversionContext;
pub use document::assemble_document;
pub use group::{GroupCursor, SegmentEntry, SegmentGrouper};
pub use loops::{LoopRecord, assemble_loops};
pub use pipeline::convert;
pub use row::{SpecRow, map_row};

use thiserror::Error;

/// Errors raised at the edges of the engine (context file loading); the
/// conversion itself never fails mid-run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid context: {0}")]
    Context(String),
}

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;
