//! Scriptcon Table
//!
//! The persisted rule-table document: a serialized map from script name to
//! an ordered list of mapping and correction blocks. The document is
//! produced by an external build-time generation step; this crate depends
//! only on its schema.
//!
//! Responsibilities:
//! - Define the block schema (literal mapping / regex correction)
//! - Load documents from JSON (string, reader, or path)
//! - Preserve authored order (block order and mapping-entry order both
//!   carry meaning downstream)

mod error;
mod schema;

pub use error::{TableError, TableResult};
pub use schema::{Block, ScriptTable};
