//! Core metadata model shared by every component.
//!
//! The types in this module are pure value objects. They are produced by an
//! external metadata-loading collaborator and never mutated by this crate.

mod dialect;
mod schema;

pub use dialect::Dialect;
pub use schema::{ColumnInfo, DatabaseInfo, ForeignKeyInfo, TableInfo, TypeCode};
