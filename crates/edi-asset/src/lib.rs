#![deny(warnings)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

//! # edi-asset
//!
//! Schema asset model for EDI specification conversion.
//!
//! This crate provides the building blocks shared by every stage of the
//! spec-table-to-schema conversion: namespaces and qualified names, the
//! `AssetElement` schema node with its factory, occurrence cardinality with
//! a permissive parser, and the ordered `AssetList` that carries the final
//! document-ordered output.

/// Schema element node, classification, and the element factory.
pub mod element;
/// Ordered asset list with sibling-anchored insertion.
pub mod list;
/// Namespaces, qualified names, and the base-type lookup.
pub mod namespace;
/// Occurrence cardinality and the permissive cardinality parser.
pub mod occurrence;
/// Casing helpers for descriptions and document names.
pub mod text;

pub use element::{AssetElement, ElementKind};
pub use list::AssetList;
pub use namespace::{Namespace, QualifiedName, base_type};
pub use occurrence::Occurrence;
pub use text::{to_proper_case, to_title_case};
