//! Data transfer protocol for streaming table data to a sink.
//!
//! [`Exporter`] is the sink-side contract; [`copy_database`] is the driver
//! that walks a database's tables and rows and calls the sink in the
//! protocol's fixed order:
//!
//! ```text
//! initialize
//! write_database_meta                       (once)
//! for each table:
//!     initialize_table
//!     write_table_header                    (once, before the first row only)
//!     for each row:
//!         initialize_row
//!         one typed write call per column, in column order
//!         finalize_row
//!     finalize_table
//!     flush
//! finish
//! ```
//!
//! The table header is written lazily so a sink never records a header for
//! a table that turns out to be empty. Typed write calls exist so a sink
//! can avoid boxing and formatting overhead for the common scalar types;
//! [`Exporter::write_value`] is the fallback for everything else.
//!
//! One exporter instance serves one copy at a time; parallel table copies
//! need one sink instance per worker.

mod stream;
mod value;

use async_trait::async_trait;

use crate::core::{DatabaseInfo, TableInfo};
use crate::error::Result;

pub use stream::{copy_database, ExportStats, RowSource};
pub use value::SqlValue;

/// Sink-side contract of the data transfer protocol.
///
/// Any call may fail; a failure aborts the remaining sequence for the
/// current table or row and propagates to the orchestrator, which owns
/// retry/abort decisions and connection-state restoration.
#[async_trait]
pub trait Exporter: Send {
    /// Prepare the sink. Called exactly once, before anything else.
    async fn initialize(&mut self) -> Result<()>;

    /// Tear down the sink. Called exactly once, after all tables.
    async fn finish(&mut self) -> Result<()>;

    /// Record database-level metadata. Called once, after [`initialize`](Self::initialize).
    async fn write_database_meta(&mut self, db: &DatabaseInfo) -> Result<()>;

    /// Begin a table. Called once per table, before any of its rows.
    async fn initialize_table(&mut self, table: &TableInfo) -> Result<()>;

    /// Record the table header.
    ///
    /// Called at most once per table, and only before the first row that
    /// is actually written; empty tables get no header.
    async fn write_table_header(&mut self, table: &TableInfo) -> Result<()>;

    /// End a table. Called once per table, after its last row.
    async fn finalize_table(&mut self, table: &TableInfo) -> Result<()>;

    /// Begin a row.
    async fn initialize_row(&mut self) -> Result<()>;

    /// End a row.
    async fn finalize_row(&mut self) -> Result<()>;

    /// Persist buffered state before the orchestrator commits.
    async fn flush(&mut self) -> Result<()>;

    /// Write a boolean column value.
    async fn write_bool(&mut self, value: bool) -> Result<()>;

    /// Write a tinyint column value.
    async fn write_byte(&mut self, value: i8) -> Result<()>;

    /// Write a smallint column value.
    async fn write_short(&mut self, value: i16) -> Result<()>;

    /// Write an int column value.
    async fn write_int(&mut self, value: i32) -> Result<()>;

    /// Write a bigint column value.
    async fn write_long(&mut self, value: i64) -> Result<()>;

    /// Write a real/float4 column value.
    async fn write_float(&mut self, value: f32) -> Result<()>;

    /// Write a double-precision column value.
    async fn write_double(&mut self, value: f64) -> Result<()>;

    /// Write any other column value, NULL included.
    async fn write_value(&mut self, value: &SqlValue) -> Result<()>;
}
