//! # schema-bridge
//!
//! Cross-vendor relational schema translation and data migration core.
//!
//! This library implements the dialect-aware heart of a database copy tool:
//!
//! - **Type translation** between seven SQL dialects via registrable,
//!   per-(source, target) mapping tables
//! - **DDL generation** that sequences CREATE TABLE and ALTER TABLE
//!   statements so foreign-key cycles never break a target schema
//! - **Connection lifecycle controllers** that bracket bulk loads with
//!   integrity-check suspension and restoration
//! - **SQL script lexing** that splits raw scripts into normalized,
//!   executable statements
//! - **A typed exporter protocol** for streaming table data to a sink
//!
//! Live connections, connection registries, metadata enumeration and the
//! physical row source/sink are external collaborators; this crate only
//! defines the seams they plug into.
//!
//! ## Example
//!
//! ```rust
//! use schema_bridge::{Dialect, SchemaScriptGenerator, TypeMappingTable};
//! use std::sync::Arc;
//!
//! let typemap = Arc::new(TypeMappingTable::with_builtins());
//! let generator = SchemaScriptGenerator::new(
//!     Dialect::Mysql,
//!     Dialect::Postgresql,
//!     typemap,
//! );
//! # let db = schema_bridge::DatabaseInfo::new("empty");
//! let statements = generator.generate_schema(&db);
//! ```

pub mod core;
pub mod ddl;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod sql;
pub mod typemap;

// Re-exports for convenient access
pub use core::{ColumnInfo, DatabaseInfo, Dialect, ForeignKeyInfo, TableInfo, TypeCode};
pub use ddl::SchemaScriptGenerator;
pub use error::{BridgeError, Result};
pub use export::{copy_database, ExportStats, Exporter, RowSource, SqlValue};
pub use lifecycle::{lifecycle_for, with_load_bracket, LoadLifecycle, LoadOptions, TargetConnection};
pub use sql::SqlLexer;
pub use typemap::{MappedType, TypeMappingTable};
